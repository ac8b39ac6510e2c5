use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "PEXELS_API_KEY";

/// Process-wide configuration, built once at startup and passed by
/// reference into every client.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Reads the Pexels API key from the environment. A missing or empty
    /// key is fatal at startup, never a per-request error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(API_KEY_VAR)
    }

    fn from_env_var(name: &'static str) -> Result<Self, ConfigError> {
        let api_key = std::env::var(name).map_err(|_| ConfigError::MissingVar(name))?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::EmptyVar(name));
        }
        Ok(Self::new(api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_names_it_in_the_error() {
        let err = Config::from_env_var("STOCK_GALLERY_TEST_UNSET_KEY").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(_)));
        assert!(
            err.to_string().contains("STOCK_GALLERY_TEST_UNSET_KEY"),
            "error should name the variable: {err}"
        );
    }

    #[test]
    fn empty_variable_is_rejected() {
        std::env::set_var("STOCK_GALLERY_TEST_EMPTY_KEY", "   ");
        let err = Config::from_env_var("STOCK_GALLERY_TEST_EMPTY_KEY").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyVar(_)));
    }

    #[test]
    fn present_variable_is_loaded() {
        std::env::set_var("STOCK_GALLERY_TEST_SET_KEY", "abc123");
        let config = Config::from_env_var("STOCK_GALLERY_TEST_SET_KEY").unwrap();
        assert_eq!(config.api_key, "abc123");
    }
}
