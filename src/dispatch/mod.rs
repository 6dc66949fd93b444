//! Middleware dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! (HandlerDescriptor, action)
//!     → chain.rs (declared middlewares + terminal action)
//!     → dispatcher.rs (fold into nested handlers, run once)
//!     → Response or upstream error
//! ```
//!
//! # Design Decisions
//! - Handlers and middlewares are trait objects shared via Arc
//! - Errors from middlewares/actions are returned untouched
//! - The dispatch engine sits behind the `Dispatch` trait so callers can
//!   substitute their own

pub mod chain;
pub mod dispatcher;
pub mod handler;

pub use chain::{compose, Chain, ChainEntry};
pub use dispatcher::{Dispatch, MiddlewareDispatcher};
pub use handler::{
    handler_fn, middleware_fn, HandlerFn, HandlerResult, Middleware, MiddlewareFn, Next,
    RequestHandler,
};
