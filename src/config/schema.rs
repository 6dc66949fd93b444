//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the router service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Listener settings.
    pub server: ServerConfig,

    /// Naming conventions used to derive handler identifiers from paths.
    pub router: RouterConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Naming conventions for path-to-handler resolution.
///
/// Never mutated in place: every `with_*` method returns a fresh copy with
/// exactly one field changed.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct RouterConfig {
    /// Directory segment inserted after the namespace (default `Controller`).
    pub base_directory: String,

    /// Suffix appended to the last path segment (default `Controller`).
    pub class_postfix: String,

    /// Leading namespace segment (default `App`).
    pub namespace: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_directory: "Controller".to_string(),
            class_postfix: "Controller".to_string(),
            namespace: "App".to_string(),
        }
    }
}

impl RouterConfig {
    pub fn with_base_directory(&self, directory: impl Into<String>) -> Self {
        Self {
            base_directory: directory.into(),
            ..self.clone()
        }
    }

    pub fn with_class_postfix(&self, postfix: impl Into<String>) -> Self {
        Self {
            class_postfix: postfix.into(),
            ..self.clone()
        }
    }

    pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..self.clone()
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.base_directory, "Controller");
        assert_eq!(config.class_postfix, "Controller");
        assert_eq!(config.namespace, "App");
    }

    #[test]
    fn test_with_methods_copy_on_write() {
        let original = RouterConfig::default();

        let renamed = original.with_namespace("Other");
        assert_eq!(renamed.namespace, "Other");
        assert_eq!(renamed.base_directory, "Controller");
        assert_eq!(original.namespace, "App");

        let postfixed = original.with_class_postfix("Action");
        assert_eq!(postfixed.class_postfix, "Action");
        assert_eq!(postfixed.namespace, "App");

        let moved = original.with_base_directory("Http");
        assert_eq!(moved.base_directory, "Http");
        assert_eq!(original, RouterConfig::default());
    }
}
