//! Convention-based file router.
//!
//! Maps a request path such as `/blog/post` onto a registered handler named
//! `App\Controller\Blog\PostController`, picks the action from the HTTP
//! method, and runs that action behind the middlewares the handler declares
//! for it. Anything that cannot be resolved is handed to a fallback handler.

pub mod config;
pub mod dispatch;
pub mod http;
pub mod observability;
pub mod registry;
pub mod routing;

pub use config::schema::{AppConfig, RouterConfig};
pub use dispatch::{handler_fn, middleware_fn, HandlerResult, Middleware, Next, RequestHandler};
pub use http::{FileRouterLayer, FileRouterService, HttpServer};
pub use registry::{HandlerDescriptor, HandlerRegistry};
pub use routing::{FileRouter, ResolvedRoute};
