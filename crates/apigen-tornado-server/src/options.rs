//! Profile options the host can override per generation run.

use apigen_core::ProfileError;
use serde::Deserialize;

/// Tunable settings for the Tornado server profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TornadoOptions {
    /// Version string stamped into the generated server.
    pub api_version: String,
    /// Port the generated `run.py` listens on.
    pub server_port: u16,
    /// Name of the generated project.
    pub project_name: String,
    /// Root directory generated files are written under.
    pub output_folder: String,
}

impl Default for TornadoOptions {
    fn default() -> Self {
        Self {
            api_version: "1.0.0".to_string(),
            server_port: 8080,
            project_name: "swagger-server".to_string(),
            output_folder: "generated-code/tornado-rest".to_string(),
        }
    }
}

impl TornadoOptions {
    /// Parse options from the host's free-form profile configuration.
    /// Missing fields keep their defaults.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ProfileError> {
        let options = serde_json::from_value(value.clone())?;
        Ok(options)
    }
}
