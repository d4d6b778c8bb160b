use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDR_VAR: &str = "TRIAGE_BIND_ADDR";
pub const DATA_DIR_VAR: &str = "TRIAGE_DATA_DIR";
pub const LOG_FORMAT_VAR: &str = "TRIAGE_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding the patient file.
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup. Unset or empty
    /// variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("{BIND_ADDR_VAR}={bind_addr:?} is not a socket address: {e}"))?;

        let data_dir = var(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let log_format = match var(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(eyre::eyre!(
                    "{LOG_FORMAT_VAR}={other:?} is not supported (expected \"pretty\" or \"json\")"
                ));
            }
        };

        Ok(Self {
            bind_addr,
            data_dir,
            log_format,
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|base| base.join("triage"))
        .unwrap_or_else(|| PathBuf::from("data"))
}
