use std::net::SocketAddr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Which answer-scoring strategy the engine uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScorerProvider {
    Keyword,
    Ollama,
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub scorer: ScorerProvider,
    pub ollama_url: String,
    pub ollama_model: String,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let scorer_str = std::env::var("SCORER").unwrap_or_else(|_| "keyword".to_string());
        let scorer = match scorer_str.to_lowercase().as_str() {
            "ollama" => ScorerProvider::Ollama,
            _ => ScorerProvider::Keyword,
        };

        let ollama_url =
            std::env::var("OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".to_string());
        let ollama_model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string());

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            bind_address,
            scorer,
            ollama_url,
            ollama_model,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tracing::Level;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("BIND_ADDRESS");
            env::remove_var("SCORER");
            env::remove_var("OLLAMA_URL");
            env::remove_var("OLLAMA_MODEL");
            env::remove_var("RUST_LOG");
        }
    }

    #[test]
    fn test_config_error_display() {
        let invalid_value =
            ConfigError::InvalidValue("TEST_VAR".to_string(), "bad_value".to_string());
        assert_eq!(
            format!("{}", invalid_value),
            "Invalid value for environment variable TEST_VAR: bad_value"
        );
    }

    #[test]
    fn test_scorer_provider_debug_and_clone() {
        let keyword = ScorerProvider::Keyword;
        let ollama = ScorerProvider::Ollama;

        assert!(format!("{:?}", keyword).contains("Keyword"));
        assert!(format!("{:?}", ollama).contains("Ollama"));

        let cloned = keyword.clone();
        assert_eq!(keyword, cloned);
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        clear_env_vars();

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.bind_address.to_string(), "0.0.0.0:8000");
        assert_eq!(config.scorer, ScorerProvider::Keyword);
        assert_eq!(config.ollama_url, "http://localhost:11434");
        assert_eq!(config.ollama_model, "llama3");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    #[serial]
    fn test_config_from_env_custom_values() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
            env::set_var("SCORER", "ollama");
            env::set_var("OLLAMA_URL", "http://ollama.internal:11434");
            env::set_var("OLLAMA_MODEL", "mistral");
            env::set_var("RUST_LOG", "debug");
        }

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.scorer, ScorerProvider::Ollama);
        assert_eq!(config.ollama_url, "http://ollama.internal:11434");
        assert_eq!(config.ollama_model, "mistral");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    #[serial]
    fn test_unknown_scorer_falls_back_to_keyword() {
        clear_env_vars();
        unsafe {
            env::set_var("SCORER", "something-else");
        }

        let config = Config::from_env().expect("Config should load successfully");
        assert_eq!(config.scorer, ScorerProvider::Keyword);
    }

    #[test]
    #[serial]
    fn test_config_invalid_bind_address() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "not-a-valid-address");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "BIND_ADDRESS"),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        clear_env_vars();
        unsafe {
            env::set_var("RUST_LOG", "not-a-level");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "RUST_LOG"),
        }
    }
}
