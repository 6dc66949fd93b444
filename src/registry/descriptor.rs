//! Handler descriptors.
//!
//! A descriptor is the data the router needs about one controller: which
//! actions it implements, an optional method-to-action override table, and
//! the middlewares declared per action. Built once during application wiring.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use axum::http::Method;

use crate::dispatch::handler::{Middleware, RequestHandler};
use crate::routing::resolver::normalize_identifier;

/// Registered controller metadata.
#[derive(Clone)]
pub struct HandlerDescriptor {
    name: String,
    actions: HashMap<String, Arc<dyn RequestHandler>>,
    method_actions: Option<HashMap<Method, String>>,
    middlewares: HashMap<String, Vec<Arc<dyn Middleware>>>,
}

impl HandlerDescriptor {
    /// Create a descriptor for a fully-qualified name.
    ///
    /// `/` and `\` are both accepted as separators.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: normalize_identifier(name.as_ref()),
            actions: HashMap::new(),
            method_actions: None,
            middlewares: HashMap::new(),
        }
    }

    /// Register the implementation of an action.
    pub fn action(mut self, name: impl Into<String>, handler: impl RequestHandler + 'static) -> Self {
        self.actions.insert(name.into(), Arc::new(handler));
        self
    }

    /// Add an entry to this handler's method override table.
    ///
    /// Once any entry exists the default method table is no longer consulted
    /// for this handler.
    pub fn map_method(mut self, method: Method, action: impl Into<String>) -> Self {
        self.method_actions
            .get_or_insert_with(HashMap::new)
            .insert(method, action.into());
        self
    }

    /// Replace this handler's method override table wholesale.
    ///
    /// An empty table leaves every method unmapped; it does not bring the
    /// default table back.
    pub fn method_table(mut self, table: HashMap<Method, String>) -> Self {
        self.method_actions = Some(table);
        self
    }

    /// Append a middleware to the chain of `action`.
    pub fn middleware(mut self, action: impl Into<String>, middleware: impl Middleware + 'static) -> Self {
        self.middlewares
            .entry(action.into())
            .or_default()
            .push(Arc::new(middleware));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_action(&self, action: &str) -> bool {
        self.actions.contains_key(action)
    }

    pub fn action_handler(&self, action: &str) -> Option<&Arc<dyn RequestHandler>> {
        self.actions.get(action)
    }

    /// Names of all implemented actions, sorted.
    pub fn action_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn method_actions(&self) -> Option<&HashMap<Method, String>> {
        self.method_actions.as_ref()
    }

    /// Middlewares declared for `action`, in declaration order.
    pub fn middlewares_for(&self, action: &str) -> &[Arc<dyn Middleware>] {
        self.middlewares.get(action).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Debug for HandlerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let middlewares: HashMap<&str, Vec<&str>> = self
            .middlewares
            .iter()
            .map(|(action, list)| (action.as_str(), list.iter().map(|m| m.name()).collect()))
            .collect();

        f.debug_struct("HandlerDescriptor")
            .field("name", &self.name)
            .field("actions", &self.action_names())
            .field("method_actions", &self.method_actions)
            .field("middlewares", &middlewares)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::handler::{handler_fn, middleware_fn, Next};
    use axum::response::IntoResponse;

    #[test]
    fn test_name_is_normalized() {
        let handler = HandlerDescriptor::new("App/Controller//Blog\\PostController");
        assert_eq!(handler.name(), "App\\Controller\\Blog\\PostController");
    }

    #[test]
    fn test_actions_and_overrides() {
        let handler = HandlerDescriptor::new("App\\Controller\\UsersController")
            .action("list", handler_fn(|_req| async { Ok("list".into_response()) }))
            .map_method(Method::GET, "list");

        assert!(handler.has_action("list"));
        assert!(!handler.has_action("index"));
        assert_eq!(handler.action_names(), vec!["list"]);
        assert_eq!(
            handler.method_actions().unwrap().get(&Method::GET).map(String::as_str),
            Some("list")
        );
    }

    #[test]
    fn test_method_table_replaces_entries() {
        let handler = HandlerDescriptor::new("App\\Controller\\UsersController")
            .map_method(Method::GET, "list")
            .method_table(HashMap::from([(Method::POST, "publish".to_string())]));

        let table = handler.method_actions().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&Method::POST).map(String::as_str), Some("publish"));

        let sealed = HandlerDescriptor::new("App\\Controller\\UsersController").method_table(HashMap::new());
        assert!(sealed.method_actions().unwrap().is_empty());
    }

    #[test]
    fn test_middlewares_default_to_empty() {
        let handler = HandlerDescriptor::new("App\\Controller\\IndexController").middleware(
            "create",
            middleware_fn("auth", |req, next: Next| async move { next.handle(req).await }),
        );

        assert!(handler.method_actions().is_none());
        assert!(handler.middlewares_for("index").is_empty());
        assert_eq!(handler.middlewares_for("create").len(), 1);
        assert_eq!(handler.middlewares_for("create")[0].name(), "auth");
    }
}
