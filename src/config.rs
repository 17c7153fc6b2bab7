use crate::error::{Error, Result};
use crate::services::formatter::Locale;
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub answer_api_base_url: String,
    pub answer_api_token: Option<String>,
    pub submit_timeout_secs: u64,
    pub display_locale: Locale,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 30;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            answer_api_base_url: get_env("ANSWER_API_BASE_URL")?,
            answer_api_token: env::var("ANSWER_API_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            submit_timeout_secs: get_env_parse_or("SUBMIT_TIMEOUT_SECS", DEFAULT_SUBMIT_TIMEOUT_SECS)?,
            display_locale: get_env_parse_or("DISPLAY_LOCALE", Locale::En)?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
