use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for the server and the acquirer, loaded from
/// `PULSE_*` environment variables. Every field has a default so the
/// service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Per-request timeout for outbound fetches, in seconds.
    pub request_timeout_secs: u64,
    /// Browser-like User-Agent sent with every outbound request.
    pub user_agent: String,
    /// Jittered pre-request delay bounds, in milliseconds.
    pub fetch_delay_min_ms: u64,
    pub fetch_delay_max_ms: u64,
    /// When set, raw response bodies are dumped here for debugging.
    pub dump_dir: Option<PathBuf>,
}
