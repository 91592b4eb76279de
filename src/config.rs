//! Server properties file support.
//!
//! The installer writes `server_properties.json` next to the report; it holds
//! the server address and request tuning. The file is parsed as YAML, which
//! accepts the JSON the installer writes as well as hand-written YAML.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::shared::error::ReportError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;

pub const PROPERTIES_FILENAME: &str = "server_properties.json";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";

/// Server properties file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ServerProperties {
    #[serde(rename = "core.server.url")]
    pub server_url: Option<String>,
    #[serde(rename = "core.server.certificate")]
    pub certificate: Option<PathBuf>,
    #[serde(rename = "request.timeout.seconds")]
    pub timeout_seconds: Option<u64>,
    #[serde(rename = "request.max.retries")]
    pub max_retries: Option<u32>,
    /// Captures unknown keys for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ServerProperties {
    /// Certificate path, treating the installer's empty string as unset.
    pub fn certificate_path(&self) -> Option<&Path> {
        self.certificate
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

/// Load properties from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ServerProperties> {
    validate_regular_file(path, "server properties").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let properties: ServerProperties = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains a valid JSON or YAML mapping.",
            path.display()
        )
    })?;

    validate_config(&properties)?;
    warn_unknown_fields(&properties);

    Ok(properties)
}

/// Auto-discover the properties file in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ServerProperties>> {
    let config_path = dir.join(PROPERTIES_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let properties = load_config_from_path(&config_path)?;
    Ok(Some(properties))
}

/// Base URL precedence: command line, then properties file, then the local default.
pub fn resolve_base_url(cli_value: Option<&str>, properties: Option<&ServerProperties>) -> String {
    cli_value
        .map(str::to_string)
        .or_else(|| properties.and_then(|p| p.server_url.clone()))
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn validate_config(properties: &ServerProperties) -> Result<()> {
    if let Some(url) = &properties.server_url {
        let url = url.trim();
        if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ReportError::InvalidConfiguration {
                message: format!(
                    "core.server.url '{}' must start with http:// or https://",
                    url
                ),
                hint: "Use the full server address, e.g. \"https://codeinsight.example.com:8888\""
                    .to_string(),
            }
            .into());
        }
    }

    if properties.timeout_seconds == Some(0) {
        return Err(ReportError::InvalidConfiguration {
            message: "request.timeout.seconds must be greater than 0".to_string(),
            hint: "Remove the key to use the default of 30 seconds".to_string(),
        }
        .into());
    }

    Ok(())
}

fn warn_unknown_fields(properties: &ServerProperties) {
    for key in properties.unknown_fields.keys() {
        warn!(key = %key, "Unknown server properties key will be ignored");
        eprintln!(
            "⚠️  Warning: Unknown server properties key '{}' will be ignored.",
            key
        );
    }
}
