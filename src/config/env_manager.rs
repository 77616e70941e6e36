use std::path::PathBuf;
use crate::error::{AnalyzerError, Result};
use super::Config;

/// Port the HTTP server listens on
pub const PORT_VAR: &str = "PORT";
/// Interface the HTTP server binds to
pub const HOST_VAR: &str = "PROJECTBRIEF_HOST";
/// Directory uploads are spooled into
pub const UPLOAD_DIR_VAR: &str = "PROJECTBRIEF_UPLOAD_DIR";
/// Root under which per-analysis workspaces are created
pub const WORK_DIR_VAR: &str = "PROJECTBRIEF_WORK_DIR";
/// Log level / filter
pub const LOG_VAR: &str = "RUST_LOG";

/// Settings read from the process environment, applied on top of the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    /// Listening port
    pub port: Option<u16>,
    /// Bind address
    pub host: Option<String>,
    /// Upload spool directory
    pub upload_dir: Option<PathBuf>,
    /// Workspace root
    pub work_dir: Option<PathBuf>,
    /// Log level
    pub log_level: Option<String>,
}

impl EnvOverrides {
    /// Reads overrides from the real environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(get_env_value)
    }

    /// Reads overrides through an arbitrary lookup, so tests never touch the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_VAR) {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|e| {
                AnalyzerError::Config(format!("{} must be a port number, got '{}': {}", PORT_VAR, raw, e))
            })?),
            None => None,
        };

        Ok(Self {
            port,
            host: lookup(HOST_VAR),
            upload_dir: lookup(UPLOAD_DIR_VAR).map(PathBuf::from),
            work_dir: lookup(WORK_DIR_VAR).map(PathBuf::from),
            log_level: lookup(LOG_VAR),
        })
    }

    /// Writes every present override into the configuration
    pub fn apply(self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(dir) = self.upload_dir {
            config.upload_dir = dir;
        }
        if let Some(dir) = self.work_dir {
            config.analysis.work_dir = dir;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }
}

/// Returns the value of an environment variable, treating empty values as unset
pub fn get_env_value(key: &str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
