//! In-memory user list.

use std::sync::{Arc, RwLock};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use file_router::{handler_fn, HandlerDescriptor, HandlerResult};
use serde::{Deserialize, Serialize};

use super::middleware::{require_json, timed};

const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct User {
    name: String,
}

type Store = Arc<RwLock<Vec<User>>>;

pub fn descriptor() -> HandlerDescriptor {
    let store = Store::default();
    let list_store = Arc::clone(&store);

    HandlerDescriptor::new("App\\Controller\\UsersController")
        .action("index", handler_fn(move |_req| list(Arc::clone(&list_store))))
        .action("create", handler_fn(move |req| create(Arc::clone(&store), req)))
        .middleware("create", timed("users.create"))
        .middleware("create", require_json())
}

async fn list(store: Store) -> HandlerResult {
    let users = store.read().map_err(|_| "user store lock poisoned")?.clone();
    Ok(Json(users).into_response())
}

async fn create(store: Store, req: Request<Body>) -> HandlerResult {
    let bytes = to_bytes(req.into_body(), MAX_BODY_BYTES).await?;
    let user: User = match serde_json::from_slice(&bytes) {
        Ok(user) => user,
        Err(e) => return Ok((StatusCode::BAD_REQUEST, e.to_string()).into_response()),
    };

    store
        .write()
        .map_err(|_| "user store lock poisoned")?
        .push(user.clone());
    tracing::info!(name = %user.name, "User created");
    Ok((StatusCode::CREATED, Json(user)).into_response())
}
