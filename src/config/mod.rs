mod env_manager;

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::{AnalyzerError, Result};
use std::fs;

pub use env_manager::{get_env_value, EnvOverrides};

/// Default folder-structure depth
pub const DEFAULT_MAX_DEPTH: usize = 6;
/// Default number of README lines kept in the excerpt
pub const DEFAULT_README_LINES: usize = 6;
/// Default listening port of the HTTP server
pub const DEFAULT_PORT: u16 = 8080;
/// Default request body limit for uploads (64 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Main configuration struct for the application
///
/// Holds the HTTP server settings, the analysis knobs and the directories
/// uploads and workspaces live in. Every section falls back to its defaults,
/// so a config file only needs the keys it wants to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Directory uploaded archives are spooled into before analysis
    pub upload_dir: PathBuf,
    /// HTTP server settings
    pub server: ServerConfig,
    /// Analysis pipeline settings
    pub analysis: AnalysisConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Largest accepted request body
    pub max_upload_bytes: usize,
}

/// Settings of the archive analysis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Deepest directory level rendered in the folder structure
    pub max_depth: usize,
    /// Number of non-blank README lines kept
    pub readme_lines: usize,
    /// Root under which each analysis creates its own workspace
    pub work_dir: PathBuf,
}

impl Config {
    /// Loads configuration from `path`, or from the default config file location
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        EnvOverrides::from_env()?.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AnalyzerError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| AnalyzerError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// `<config_dir>/projectbrief/config.toml`, when the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("projectbrief").join("config.toml"))
    }

    /// Rejects settings the analyzer or server cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.analysis.readme_lines == 0 {
            return Err(AnalyzerError::Config("analysis.readme_lines must be at least 1".into()));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(AnalyzerError::Config("server.max_upload_bytes must be positive".into()));
        }
        Ok(())
    }

    /// Ensures the upload and workspace directories exist
    pub async fn ensure_directories_exist(&self) -> Result<()> {
        for dir in [&self.upload_dir, &self.analysis.work_dir] {
            if !tokio::fs::try_exists(dir).await? {
                tokio::fs::create_dir_all(dir).await?;
            }
        }
        Ok(())
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            upload_dir: std::env::temp_dir(),
            server: ServerConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            readme_lines: DEFAULT_README_LINES,
            work_dir: std::env::temp_dir(),
        }
    }
}
