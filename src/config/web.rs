//! # HTTP and CORS Configuration
//!
//! Defines basic configuration structures for the HTTP listener and
//! CORS (Cross-Origin Resource Sharing) behavior.
//!
//! These are typically included within [`AppConfig`](crate::config::app::AppConfig).
//!
//! # Examples
//! ```rust
//! use randpic_web::config::web::{HttpConfig, CorsConfig};
//!
//! let http = HttpConfig { addr: "127.0.0.1:3000".into() };
//! let cors = CorsConfig { env: "http://localhost:5173".into() };
//!
//! assert!(http.addr.ends_with(":3000"));
//! assert_eq!(cors.env, "http://localhost:5173");
//! ```

/// Address the server binds to when `HTTP_ADDR` is unset.
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

/// HTTP listener configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpConfig {
    /// `host:port` to bind.
    pub addr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_HTTP_ADDR.into(),
        }
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration.
///
/// `env` holds a comma-separated origin list; an empty list allows any origin.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CorsConfig {
    pub env: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_defaults_to_port_8080() {
        assert_eq!(HttpConfig::default().addr, "0.0.0.0:8080");
    }

    #[test]
    fn cors_config_holds_values() {
        let cfg = CorsConfig {
            env: "http://localhost:5173".into(),
        };
        assert_eq!(cfg.env, "http://localhost:5173");
        assert!(CorsConfig::default().env.is_empty());
    }

    #[test]
    fn http_and_cors_configs_are_clone_and_debug() {
        let http_cfg = HttpConfig {
            addr: "127.0.0.1:1".into(),
        };
        assert_eq!(http_cfg, http_cfg.clone());

        let cors_cfg = CorsConfig { env: "dev".into() };
        assert_eq!(cors_cfg, cors_cfg.clone());
        assert!(format!("{:?}", cors_cfg).contains("dev"));
    }
}
