//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty or path-traversing naming segments
//! - Validate addresses and timeouts
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system; the router core itself
//!   never re-checks its configuration

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{AppConfig, RouterConfig};

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} contains a path traversal segment: {value:?}")]
    PathTraversal { field: &'static str, value: String },

    #[error("{field} is not a valid socket address: {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

/// Validate a full application config, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = validate_router(&config.router);

    check_address(&mut errors, "server.bind_address", &config.server.bind_address);
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "server.request_timeout_secs",
        });
    }
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check the naming segments of a router config.
pub fn validate_router(config: &RouterConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (field, value) in [
        ("router.base_directory", &config.base_directory),
        ("router.class_postfix", &config.class_postfix),
        ("router.namespace", &config.namespace),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::Empty { field });
        } else if value.split(['/', '\\']).any(|segment| segment == "..") {
            errors.push(ValidationError::PathTraversal {
                field,
                value: value.clone(),
            });
        }
    }
    errors
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
