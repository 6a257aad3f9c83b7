//! Runtime configuration.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ConfigError;

/// Maximum number of history entries kept per session.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// URL shown in the form on a fresh page.
pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the web UI listens on
    pub bind: SocketAddr,

    /// History entries retained per session
    pub history_limit: usize,

    /// Overall timeout for one outbound request, redirects included
    pub request_timeout: Duration,

    /// Redirect hops followed before giving up
    pub max_redirects: usize,

    /// Value of the `User-Agent` header on outbound requests
    pub user_agent: String,

    /// Idle time after which a session and its history are dropped
    pub session_ttl: Duration,

    /// Prefilled URL for a blank form
    pub default_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            history_limit: DEFAULT_HISTORY_LIMIT,
            request_timeout: Duration::from_secs(30),
            max_redirects: 5,
            user_agent: format!("reqdesk/{}", env!("CARGO_PKG_VERSION")),
            session_ttl: Duration::from_secs(30 * 60),
            default_url: DEFAULT_URL.to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "history_limit",
                reason: "must be at least 1".into(),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                field: "request_timeout",
                reason: "must be greater than zero".into(),
            });
        }
        if self.session_ttl.is_zero() {
            return Err(ConfigError::Invalid {
                field: "session_ttl",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
