//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, method)
//!     → resolver.rs (path → handler identifier → registry lookup)
//!     → action.rs (method → action name, checked against the handler)
//!     → dispatch::chain (declared middlewares + terminal action)
//!     → router.rs (dispatch the chain, or hand off to the fallback)
//! ```
//!
//! # Design Decisions
//! - Fixed naming convention, no patterns, parameters or wildcards
//! - Deterministic: same input always resolves the same way
//! - Any miss along the way means fallback, never an error

pub mod action;
pub mod resolver;
pub mod router;

pub use router::{FileRouter, ResolvedRoute};
