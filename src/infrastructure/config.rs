// Importer configuration sourced from GRAFANA_* environment variables
use crate::infrastructure::error::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

const ENV_PREFIX: &str = "GRAFANA";
const DEFAULT_FOLDER_ID: &str = "0";

#[derive(Clone)]
pub struct ImporterConfig {
    pub api_key: String,
    pub base_url: String,
    pub folder_id: i64,
}

// Keeps the API key out of logs
impl fmt::Debug for ImporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImporterConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("folder_id", &self.folder_id)
            .finish()
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawSettings {
    api_key: Option<String>,
    cloud_url: Option<String>,
    folder_id: Option<String>,
}

pub fn load_importer_config() -> Result<ImporterConfig, ConfigError> {
    load_importer_config_from(None)
}

/// Load configuration from an explicit variable map instead of the process
/// environment when `source` is `Some`
pub fn load_importer_config_from(
    source: Option<HashMap<String, String>>,
) -> Result<ImporterConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::Environment::with_prefix(ENV_PREFIX).source(source))
        .build()?;

    let raw: RawSettings = settings.try_deserialize()?;

    let api_key = raw.api_key.ok_or(ConfigError::Missing("GRAFANA_API_KEY"))?;
    let base_url = raw
        .cloud_url
        .ok_or(ConfigError::Missing("GRAFANA_CLOUD_URL"))?;
    let folder_id = parse_folder_id(raw.folder_id.as_deref().unwrap_or(DEFAULT_FOLDER_ID))?;

    Ok(ImporterConfig {
        api_key,
        base_url: base_url.trim_end_matches('/').to_string(),
        folder_id,
    })
}

fn parse_folder_id(value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidFolderId(value.to_string()))
}
