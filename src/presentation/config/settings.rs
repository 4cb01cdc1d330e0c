use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

const SETTINGS_DIR: &str = "settings";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub classifier: ClassifierSettings,
    pub transcription: TranscriptionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSettings {
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    #[serde(default)]
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    Disabled,
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

fn default_api_version() -> String {
    "2024-06-01".to_string()
}

impl Settings {
    /// Layers `settings/base.yaml`, `settings/<environment>.yaml` and `APP__*` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(SETTINGS_DIR, environment)
    }

    pub fn load_from(dir: &str, environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&format!("{}/base", dir)).required(false))
            .add_source(
                File::with_name(&format!("{}/{}", dir, environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
