// © https://github.com/LukeMathWalker/zero-to-production

use std::{
    convert::{TryFrom, TryInto},
    time::Duration,
};

use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

///
/// Location of the wire backend whose REST API feeds the profile page.
///
#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_milliseconds: u64,
}

impl BackendSettings {
    ///
    /// Base url without a trailing slash, ready to have endpoint paths appended.
    ///
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

///
/// Available settings environments
///
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
    Testing,
}

impl Environment {
    ///
    /// Get the string representation for an enum.
    /// This can be used to load the settings files.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
            Environment::Testing => "testing",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            "testing" => Ok(Self::Testing),
            other => Err(format!("Unknown environment {:?}!", other)),
        }
    }
}

///
/// Get an instance of the settings.
///
/// This uses the current `APP_ENV` to determine the settings file to load.
///
pub fn get_settings() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().expect("Error while getting current directory");
    let settings_directory = base_path.join("settings");

    let environment: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    Config::builder()
        .add_source(config::File::from(settings_directory.join("base")).required(true))
        .add_source(
            config::File::from(settings_directory.join(environment.as_str())).required(true),
        )
        .add_source(config::Environment::with_prefix("app").separator("__"))
        .build()?
        .try_deserialize()
}
