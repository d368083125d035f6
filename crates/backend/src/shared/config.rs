use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub admin: AdminSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminSection {
    /// JSON-описание панели (страницы, методы, поля)
    pub config_path: String,
    /// Собранный фронтенд (trunk dist)
    pub static_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[admin]
config_path = "config.json"
static_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}:{}: {e}", self.server.host, self.server.port))?;
        Ok(addr)
    }

    pub fn admin_config_path(&self) -> PathBuf {
        resolve_path(&self.admin.config_path, exe_dir().as_deref())
    }

    pub fn static_dir(&self) -> PathBuf {
        resolve_path(&self.admin.static_dir, exe_dir().as_deref())
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Absolute paths as is; relative ones next to the executable when present
/// there, otherwise relative to the working directory
fn resolve_path(path_str: &str, exe_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(path_str);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Some(dir) = exe_dir {
        let candidate = dir.join(path);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(path_str)
}
