//! Chain composition.
//!
//! # Responsibilities
//! - Collect the middlewares a handler declares for one action
//! - Append the resolved action as the single terminal entry
//!
//! # Design Decisions
//! - Declared order is kept exactly: no dedup, no reordering, no priorities
//! - Composition never executes anything; see `dispatcher.rs` for that

use std::fmt;
use std::sync::Arc;

use crate::dispatch::handler::{Middleware, RequestHandler};
use crate::registry::HandlerDescriptor;

/// One step of an execution chain.
#[derive(Clone)]
pub enum ChainEntry {
    /// A middleware that receives the rest of the chain as `next`.
    Middleware(Arc<dyn Middleware>),
    /// A terminal action; nothing after it runs.
    Action {
        label: String,
        handler: Arc<dyn RequestHandler>,
    },
}

impl ChainEntry {
    pub fn label(&self) -> &str {
        match self {
            ChainEntry::Middleware(middleware) => middleware.name(),
            ChainEntry::Action { label, .. } => label,
        }
    }

    pub fn is_action(&self) -> bool {
        matches!(self, ChainEntry::Action { .. })
    }
}

impl fmt::Debug for ChainEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainEntry::Middleware(_) => write!(f, "Middleware({})", self.label()),
            ChainEntry::Action { label, .. } => write!(f, "Action({label})"),
        }
    }
}

/// Ordered sequence of middlewares ending in an action.
#[derive(Clone, Debug, Default)]
pub struct Chain {
    entries: Vec<ChainEntry>,
}

impl Chain {
    pub fn new(entries: Vec<ChainEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ChainEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ChainEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(ChainEntry::label).collect()
    }
}

/// Build the chain for `action` on `handler`.
///
/// Returns `None` when the handler does not implement `action`.
pub fn compose(handler: &HandlerDescriptor, action: &str) -> Option<Chain> {
    let terminal = handler.action_handler(action)?;

    let mut entries: Vec<ChainEntry> = handler
        .middlewares_for(action)
        .iter()
        .cloned()
        .map(ChainEntry::Middleware)
        .collect();
    entries.push(ChainEntry::Action {
        label: format!("{}::{}", handler.name(), action),
        handler: Arc::clone(terminal),
    });

    Some(Chain::new(entries))
}
