//! Handler registry.
//!
//! # Responsibilities
//! - Map fully-qualified handler identifiers to descriptors
//! - Answer "is this identifier known?" for the path resolver
//!
//! # Design Decisions
//! - Populated once during wiring, then frozen behind an Arc
//! - Lookups are plain HashMap hits, no runtime discovery
//! - Identifiers are normalized on the way in, so `/` and `\` spellings agree

mod descriptor;

pub use descriptor::HandlerDescriptor;

use std::collections::HashMap;
use std::sync::Arc;

use crate::routing::resolver::normalize_identifier;

/// Immutable-after-wiring set of known handlers.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<HandlerDescriptor>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor, returning the one it replaced, if any.
    pub fn register(&mut self, descriptor: HandlerDescriptor) -> Option<Arc<HandlerDescriptor>> {
        let name = descriptor.name().to_string();
        let replaced = self.handlers.insert(name.clone(), Arc::new(descriptor));
        if replaced.is_some() {
            tracing::warn!(handler = %name, "Handler registered twice, keeping the latest");
        }
        replaced
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, descriptor: HandlerDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<HandlerDescriptor>> {
        match self.handlers.get(name) {
            Some(handler) => Some(handler),
            None => self.handlers.get(&normalize_identifier(name)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered identifiers, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
