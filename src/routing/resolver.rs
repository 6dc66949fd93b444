//! Path to handler-identifier resolution.
//!
//! # Responsibilities
//! - Mark every segment boundary of the path with an uppercase letter
//! - Split into directory part and final segment
//! - Assemble `namespace\base_directory\directory\SegmentPostfix`
//! - Look the identifier up in the registry
//!
//! # Design Decisions
//! - Only the character right after each `/` is uppercased (ASCII); a
//!   multi-word segment such as `user-profile` keeps its inner casing
//! - No regex: a single pass over the path plus one split
//! - Deterministic: same path + config + registry always gives the same answer

use std::sync::Arc;

use crate::config::RouterConfig;
use crate::registry::{HandlerDescriptor, HandlerRegistry};

/// Separator used in fully-qualified handler identifiers.
pub const SEPARATOR: char = '\\';

/// Handler token used for the root path.
pub const INDEX_HANDLER: &str = "Index";

/// Derive the fully-qualified handler identifier for `path`.
///
/// Returns `None` when the path does not have a `.../segment` shape.
pub fn controller_name(path: &str, config: &RouterConfig) -> Option<String> {
    let (directory, segment) = if path == "/" {
        (String::new(), INDEX_HANDLER.to_string())
    } else {
        let marked = uppercase_segment_starts(path);
        let (directory, segment) = split_directory(&marked)?;
        (directory.to_string(), segment.to_string())
    };

    let raw = format!(
        "{namespace}{SEPARATOR}{base}{SEPARATOR}{directory}{SEPARATOR}{segment}{postfix}",
        namespace = config.namespace,
        base = config.base_directory,
        postfix = config.class_postfix,
    );
    Some(normalize_identifier(&raw))
}

/// Resolve `path` to a registered handler.
pub fn resolve(
    path: &str,
    config: &RouterConfig,
    registry: &HandlerRegistry,
) -> Option<Arc<HandlerDescriptor>> {
    let name = controller_name(path, config)?;
    tracing::trace!(path = %path, handler = %name, "Derived handler identifier");
    registry.get(&name).cloned()
}

/// Turn `/` into the identifier separator and collapse empty segments.
pub fn normalize_identifier(raw: &str) -> String {
    raw.split(['/', SEPARATOR])
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Uppercase the character following each `/`.
///
/// Matches are non-overlapping: a `/` that directly follows another `/` is
/// itself the "following character", so the letter after it is untouched.
fn uppercase_segment_starts(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut after_slash = false;
    for c in path.chars() {
        if after_slash {
            out.push(c.to_ascii_uppercase());
            after_slash = false;
        } else {
            after_slash = c == '/';
            out.push(c);
        }
    }
    out
}

/// Split `dir/segment[/]` into `("dir", "segment")`.
fn split_directory(path: &str) -> Option<(&str, &str)> {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    let (directory, segment) = trimmed.rsplit_once('/')?;
    if segment.is_empty() {
        return None;
    }
    Some((directory, segment))
}
