//! Sample handlers served by the `file-router` binary.
//!
//! | Path          | Handler                              |
//! |---------------|--------------------------------------|
//! | `/`           | `App\Controller\IndexController`     |
//! | `/users`      | `App\Controller\UsersController`     |
//! | `/blog/post`  | `App\Controller\Blog\PostController` |

mod blog;
mod index;
mod middleware;
mod users;

use file_router::HandlerRegistry;

/// Registry with every sample handler.
pub fn registry() -> HandlerRegistry {
    HandlerRegistry::new()
        .with(index::descriptor())
        .with(users::descriptor())
        .with(blog::post_descriptor())
}
