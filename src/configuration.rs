use std::path::PathBuf;

use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::booking_client::BookingClient;
use crate::domain::ApiBaseUrl;
use crate::storage::FileStore;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub booking_api: BookingApiSettings,
    pub storage: StorageSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BookingApiSettings {
    pub base_url: ApiBaseUrl,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_millis: u64,
}

impl BookingApiSettings {
    pub fn client(self) -> anyhow::Result<BookingClient> {
        BookingClient::new(self)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct StorageSettings {
    pub path: PathBuf,
}

impl StorageSettings {
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.path)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    pub enabled: bool,
    pub endpoint: String,
    pub api_key_header: String,
    pub api_key: Secret<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| config::ConfigError::Foreign(e.into()))?;
    get_configuration_from(base_path.join("configuration"))
}

/// Layers `base.yaml`, the `APP_ENVIRONMENT` file and `APP_`-prefixed variables.
pub fn get_configuration_from(
    configuration_directory: PathBuf,
) -> Result<Settings, config::ConfigError> {
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
