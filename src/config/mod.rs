use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::error;

pub mod defaults;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ENV: &str = "development";
const DEFAULT_FLAGS_INIT_DELAY_MS: u64 = 1000;
const DEFAULT_FEATURES_PASSWORD: &str = "123456";

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

// ─── TOML config file ─────────────────────────────────────────────────────────

/// `{data_dir}/config.toml` — all fields are optional overrides.
/// Priority: CLI / env var  >  TOML  >  built-in default.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// HTTP server port (default: 3000).
    port: Option<u16>,
    /// Bind address (default: "127.0.0.1"; use "0.0.0.0" for LAN access).
    bind_address: Option<String>,
    /// Log level filter string, e.g. "debug", "info,portald=trace" (default: "info").
    log: Option<String>,
    /// Log output format: "pretty" (default, human-readable) | "json" (structured for log aggregators).
    log_format: Option<String>,
    /// Environment label echoed by /api/ping (default: "development").
    env: Option<String>,
    /// Base URL of the upstream flag service. Omit to run on local defaults only.
    flags_url: Option<String>,
    /// Artificial delay before the first flag fetch, in milliseconds (default: 1000).
    flags_init_delay_ms: Option<u64>,
    /// Credential for the /features pages. A demo gate, not auth (default: "123456").
    features_password: Option<String>,
}

fn load_toml(data_dir: &Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let contents = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
            None
        }
    }
}

// ─── ServerConfig ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub log: String,
    /// "pretty" (default) | "json" (PORTALD_LOG_FORMAT env var).
    pub log_format: String,
    /// Bind address for the HTTP server (PORTALD_BIND env var, default: "127.0.0.1").
    pub bind_address: String,
    /// Environment label (PORTALD_ENV env var, default: "development").
    pub env: String,
    /// Upstream flag service base URL (PORTALD_FLAGS_URL env var).
    /// None means no fetch is ever attempted — local defaults stay in force.
    pub flags_url: Option<String>,
    /// Delay before the first flag fetch (PORTALD_FLAGS_INIT_DELAY_MS env var).
    pub flags_init_delay_ms: u64,
    /// Expected value of the `password` cookie on /features pages
    /// (PORTALD_FEATURES_PASSWORD env var). Placeholder credential.
    pub features_password: String,
}

impl ServerConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file at `{data_dir}/config.toml`
    ///   3. Built-in defaults
    pub fn new(
        port: Option<u16>,
        data_dir: Option<PathBuf>,
        log: Option<String>,
        bind_address: Option<String>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);

        // Load TOML as the lowest-priority override layer
        let toml = load_toml(&data_dir).unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);
        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        let bind_address = bind_address
            .or(std::env::var("PORTALD_BIND").ok().filter(|s| !s.is_empty()))
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);

        let log_format = std::env::var("PORTALD_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let env = std::env::var("PORTALD_ENV")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.env)
            .unwrap_or_else(|| DEFAULT_ENV.to_string());

        let flags_url = std::env::var("PORTALD_FLAGS_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.flags_url);

        let flags_init_delay_ms = std::env::var("PORTALD_FLAGS_INIT_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .or(toml.flags_init_delay_ms)
            .unwrap_or(DEFAULT_FLAGS_INIT_DELAY_MS);

        let features_password = std::env::var("PORTALD_FEATURES_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.features_password)
            .unwrap_or_else(|| DEFAULT_FEATURES_PASSWORD.to_string());

        Self {
            port,
            data_dir,
            log,
            log_format,
            bind_address,
            env,
            flags_url,
            flags_init_delay_ms,
            features_password,
        }
    }
}

fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/portald
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("portald");
        }
    }
    #[cfg(target_os = "linux")]
    {
        // $XDG_DATA_HOME/portald or ~/.local/share/portald
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("portald");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("portald");
        }
    }
    #[cfg(target_os = "windows")]
    {
        // %APPDATA%\portald
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("portald");
        }
    }
    // Fallback
    PathBuf::from(".portald")
}
