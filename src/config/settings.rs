use std::env;
use config::{Config, File, ConfigError};
use dotenv::dotenv;
use chrono_tz::Tz;
use secrecy::SecretString;

use crate::config::content::ContentSettings;
use crate::config::poll::PollSettings;
use crate::config::redis::RedisSettings;

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub content: ContentSettings,
    pub club: ClubSettings,
    pub poll: PollSettings,
    #[serde(default)]
    pub redis: Option<RedisSettings>,
}

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    pub log_level: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ClubSettings {
    pub name: String,
    /// IANA name, e.g. "Europe/London". Naive CMS dates are read in this zone.
    pub timezone: String,
}

/// Club settings with the timezone already parsed, shared with handlers.
#[derive(Debug, Clone)]
pub struct ClubContext {
    pub name: String,
    pub timezone: Tz,
}

impl ClubSettings {
    pub fn context(&self) -> Result<ClubContext, String> {
        let timezone = self
            .timezone
            .parse::<Tz>()
            .map_err(|e| format!("Invalid club timezone '{}': {}", self.timezone, e))?;
        Ok(ClubContext {
            name: self.name.clone(),
            timezone,
        })
    }
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    dotenv().ok();

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let env_filename = format!("{}.yml", environment.as_str());
    let config = Config::builder()
        .add_source(File::from(configuration_directory.join("base.yml")))
        .add_source(File::from(configuration_directory.join(env_filename)))
        .add_source(
            config::Environment::default()
                .prefix("APP")
                .prefix_separator("__")
                .separator("__")
        )
        .build()?;

    let mut settings = config.try_deserialize::<Settings>()?;

    // Hosting providers usually expose the delivery token as a plain secret
    if let Ok(token) = env::var("CONTENT_ACCESS_TOKEN") {
        settings.content.access_token = SecretString::new(token.into_boxed_str());
    }

    Ok(settings)
}

#[derive(Debug, PartialEq)]
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
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_case_insensitively() {
        let env: Environment = "Production".to_string().try_into().unwrap();
        assert_eq!(env.as_str(), "production");
        let env: Environment = "local".to_string().try_into().unwrap();
        assert_eq!(env.as_str(), "local");
    }

    #[test]
    fn club_context_parses_timezone() {
        let club = ClubSettings {
            name: "Harbour Town FC".into(),
            timezone: "Europe/London".into(),
        };
        let context = club.context().unwrap();
        assert_eq!(context.timezone, chrono_tz::Europe::London);
        assert_eq!(context.name, "Harbour Town FC");
    }

    #[test]
    fn club_context_rejects_unknown_timezone() {
        let club = ClubSettings {
            name: "Harbour Town FC".into(),
            timezone: "Europe/Atlantis".into(),
        };
        assert!(club.context().unwrap_err().contains("Europe/Atlantis"));
    }

    #[test]
    fn environment_converts_from_config_string() {
        assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let result: Result<Environment, String> = "staging".to_string().try_into();
        assert!(result.unwrap_err().contains("staging"));
    }
}
