mod config;
mod error;
mod history;
mod http;
mod server;
mod session;
#[cfg(test)]
mod testing;
mod ui;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use config::{Config, DEFAULT_HISTORY_LIMIT, DEFAULT_URL};

/// Browser-based ad-hoc HTTP request tool
#[derive(Parser, Debug)]
#[command(name = "reqdesk", version, about, long_about = None)]
struct Cli {
    /// Address to serve the web UI on
    #[arg(long, default_value = "127.0.0.1:8080", env = "REQDESK_BIND")]
    bind: SocketAddr,

    /// History entries kept per session
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT, env = "REQDESK_HISTORY_LIMIT")]
    history_limit: usize,

    /// Overall timeout for one outbound request, in seconds
    #[arg(long, default_value_t = 30, env = "REQDESK_TIMEOUT_SECS")]
    timeout_secs: u64,

    /// Redirect hops to follow
    #[arg(long, default_value_t = 5, env = "REQDESK_MAX_REDIRECTS")]
    max_redirects: usize,

    /// User-Agent sent on outbound requests
    #[arg(long, env = "REQDESK_USER_AGENT")]
    user_agent: Option<String>,

    /// Idle seconds before a session and its history are dropped
    #[arg(long, default_value_t = 1800, env = "REQDESK_SESSION_TTL_SECS")]
    session_ttl_secs: u64,

    /// URL prefilled in a blank form
    #[arg(long, default_value = DEFAULT_URL, env = "REQDESK_DEFAULT_URL")]
    default_url: String,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info", env = "REQDESK_LOG_LEVEL")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            bind: self.bind,
            history_limit: self.history_limit,
            request_timeout: Duration::from_secs(self.timeout_secs),
            max_redirects: self.max_redirects,
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            session_ttl: Duration::from_secs(self.session_ttl_secs),
            default_url: self.default_url,
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = cli.into_config();
    config.validate().context("Invalid configuration")?;

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    server::run(listener, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_config_defaults() {
        let config = Cli::parse_from(["reqdesk"]).into_config();
        let defaults = Config::default();
        assert_eq!(config.bind, defaults.bind);
        assert_eq!(config.history_limit, defaults.history_limit);
        assert_eq!(config.request_timeout, defaults.request_timeout);
        assert_eq!(config.max_redirects, defaults.max_redirects);
        assert_eq!(config.user_agent, defaults.user_agent);
        assert_eq!(config.session_ttl, defaults.session_ttl);
        assert_eq!(config.default_url, defaults.default_url);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Cli::parse_from([
            "reqdesk",
            "--bind",
            "0.0.0.0:9000",
            "--history-limit",
            "3",
            "--timeout-secs",
            "5",
            "--user-agent",
            "probe/1",
        ])
        .into_config();
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "probe/1");
    }
}
