//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::mst::RemovePolicy;
use crate::pool::PoolMode;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Incremental-edit settings.
    #[serde(default)]
    pub edit: EditConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.threads == 0 {
            return Err(ConfigError::ValidationError {
                message: "server.threads must be at least 1".to_string(),
            });
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError {
                message: "server.port must be non-zero".to_string(),
            });
        }
        if PoolMode::from_str_loose(&self.server.mode).is_none() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid pool mode '{}'. Must be one of: LF, PL",
                    self.server.mode
                ),
            });
        }
        if RemovePolicy::from_str_loose(&self.edit.remove_policy).is_none() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid remove policy '{}'. Must be one of: strict, rebuild",
                    self.edit.remove_policy
                ),
            });
        }
        Ok(())
    }

    /// The configured pool mode.
    ///
    /// Call after [`Config::validate`]; falls back to the default mode if
    /// the string never went through validation.
    #[must_use]
    pub fn pool_mode(&self) -> PoolMode {
        PoolMode::from_str_loose(&self.server.mode).unwrap_or_default()
    }

    /// The configured incremental-remove policy.
    #[must_use]
    pub fn remove_policy(&self) -> RemovePolicy {
        RemovePolicy::from_str_loose(&self.edit.remove_policy).unwrap_or_default()
    }
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// TCP port the server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads in the pool.
    #[serde(default = "default_threads")]
    pub threads: usize,

    /// Pool discipline: "LF" (Leader/Followers) or "PL" (Active-Object).
    #[serde(default = "default_mode")]
    pub mode: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            threads: default_threads(),
            mode: default_mode(),
        }
    }
}

const fn default_port() -> u16 {
    8080
}

const fn default_threads() -> usize {
    4
}

fn default_mode() -> String {
    "LF".to_string()
}

/// Incremental-edit configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditConfig {
    /// Replacement policy for `remove` on the incremental editor:
    /// "strict" (replace only on strict weight improvement) or "rebuild"
    /// (drop the edge and rebuild whenever connectivity survives).
    #[serde(default = "default_remove_policy")]
    pub remove_policy: String,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            remove_policy: default_remove_policy(),
        }
    }
}

fn default_remove_policy() -> String {
    "strict".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
