use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub questions_file: Option<String>,
    pub cors_allowed_origins: Vec<String>,
    pub log_json: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string()),
            questions_file: env::var("QUESTIONS_FILE").ok().filter(|p| !p.trim().is_empty()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
            log_json: get_env_parse_or("LOG_JSON", false)?,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
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

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_skips_blank_entries() {
        let origins = split_list(" http://localhost:5173, ,https://quiz.example.com ,");
        assert_eq!(
            origins,
            vec!["http://localhost:5173", "https://quiz.example.com"]
        );
    }

    #[test]
    fn parse_or_rejects_malformed_values() {
        env::set_var("QUIZ_TEST_BAD_BOOL", "sometimes");
        let err = get_env_parse_or("QUIZ_TEST_BAD_BOOL", false).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        env::remove_var("QUIZ_TEST_MISSING_BOOL");
        assert!(get_env_parse_or("QUIZ_TEST_MISSING_BOOL", true).unwrap());
    }
}
