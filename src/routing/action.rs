//! HTTP method to action mapping.

use axum::http::Method;

use crate::registry::HandlerDescriptor;

/// Action for `method` under the conventional table.
///
/// HEAD→head, OPTIONS→options, GET→index, POST→create, PUT→update,
/// DELETE→delete. Every other method is unmapped.
pub fn default_action(method: &Method) -> Option<&'static str> {
    match *method {
        Method::HEAD => Some("head"),
        Method::OPTIONS => Some("options"),
        Method::GET => Some("index"),
        Method::POST => Some("create"),
        Method::PUT => Some("update"),
        Method::DELETE => Some("delete"),
        _ => None,
    }
}

/// Pick the action `handler` should run for `method`.
///
/// A handler's own override table replaces the default table entirely. The
/// chosen action must also be implemented by the handler.
pub fn map_action<'a>(handler: &'a HandlerDescriptor, method: &Method) -> Option<&'a str> {
    let action = match handler.method_actions() {
        Some(table) => table.get(method).map(String::as_str),
        None => default_action(method),
    }?;

    handler.has_action(action).then_some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::handler::handler_fn;
    use axum::response::IntoResponse;

    fn crud() -> HandlerDescriptor {
        ["head", "options", "index", "create", "update", "delete"]
            .into_iter()
            .fold(HandlerDescriptor::new("App\\Controller\\UsersController"), |d, name| {
                d.action(name, handler_fn(|_req| async { Ok(().into_response()) }))
            })
    }

    #[test]
    fn test_default_table() {
        let handler = crud();
        assert_eq!(map_action(&handler, &Method::HEAD), Some("head"));
        assert_eq!(map_action(&handler, &Method::OPTIONS), Some("options"));
        assert_eq!(map_action(&handler, &Method::GET), Some("index"));
        assert_eq!(map_action(&handler, &Method::POST), Some("create"));
        assert_eq!(map_action(&handler, &Method::PUT), Some("update"));
        assert_eq!(map_action(&handler, &Method::DELETE), Some("delete"));
        assert_eq!(map_action(&handler, &Method::PATCH), None);
        assert_eq!(map_action(&handler, &Method::TRACE), None);
    }

    #[test]
    fn test_unimplemented_action() {
        let handler = HandlerDescriptor::new("App\\Controller\\UsersController")
            .action("index", handler_fn(|_req| async { Ok(().into_response()) }));
        assert_eq!(map_action(&handler, &Method::GET), Some("index"));
        assert_eq!(map_action(&handler, &Method::POST), None);
    }

    #[test]
    fn test_override_replaces_default_table() {
        let handler = crud()
            .action("list", handler_fn(|_req| async { Ok(().into_response()) }))
            .action("patch", handler_fn(|_req| async { Ok(().into_response()) }))
            .map_method(Method::GET, "list")
            .map_method(Method::PATCH, "patch");

        assert_eq!(map_action(&handler, &Method::GET), Some("list"));
        assert_eq!(map_action(&handler, &Method::PATCH), Some("patch"));
        // not merged: POST is absent from the override table
        assert_eq!(map_action(&handler, &Method::POST), None);
    }

    #[test]
    fn test_empty_override_table_maps_nothing() {
        let handler = crud().method_table(std::collections::HashMap::new());
        for method in [Method::HEAD, Method::OPTIONS, Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            assert_eq!(map_action(&handler, &method), None);
        }
    }

    #[test]
    fn test_override_to_missing_action() {
        let handler = crud().map_method(Method::GET, "list");
        assert_eq!(map_action(&handler, &Method::GET), None);
    }

    #[test]
    fn test_extension_method_via_override() {
        let purge = Method::from_bytes(b"PURGE").unwrap();
        let handler = crud()
            .action("purge", handler_fn(|_req| async { Ok(().into_response()) }))
            .map_method(purge.clone(), "purge");
        assert_eq!(map_action(&handler, &purge), Some("purge"));
    }
}
