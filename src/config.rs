use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_CONTAINER_NAME: &str = "videos";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:8080";

/// Lowercase letters, digits and single hyphens; must start and end alphanumeric
static CONTAINER_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9](?:[a-z0-9]|-[a-z0-9])*$").unwrap());

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` leaves the service running but both video routes answer 500
    pub storage_connection_string: Option<String>,
    pub container_name: String,
    pub listen_addr: String,
    pub storage_request_timeout_secs: u64,
    pub allowed_origins: Vec<String>,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_connection_string: None,
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            storage_request_timeout_secs: 300,
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            storage_connection_string: var("AZURE_STORAGE_CONNECTION_STRING"),
            container_name: var("AZURE_STORAGE_CONTAINER_NAME")
                .unwrap_or(defaults.container_name),
            listen_addr: var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            storage_request_timeout_secs: var("STORAGE_REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.storage_request_timeout_secs),
            allowed_origins: var("ALLOWED_ORIGINS")
                .map(|s| parse_origins(&s))
                .unwrap_or(defaults.allowed_origins),
            environment: var("ENVIRONMENT")
                .map(|s| s.to_lowercase())
                .unwrap_or(defaults.environment),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn storage_configured(&self) -> bool {
        self.storage_connection_string.is_some()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let name = &self.container_name;
        if name.len() < 3 || name.len() > 63 || !CONTAINER_NAME_REGEX.is_match(name) {
            return Err(format!(
                "AZURE_STORAGE_CONTAINER_NAME '{}' must be 3-63 characters of lowercase letters, digits and single hyphens",
                name
            ));
        }

        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        if self.storage_request_timeout_secs == 0 {
            return Err("STORAGE_REQUEST_TIMEOUT_SECS must be at least 1 second".to_string());
        }

        Ok(())
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert!(config.storage_connection_string.is_none());
        assert!(!config.storage_configured());
        assert_eq!(config.container_name, "videos");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.storage_request_timeout_secs, 300);
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(config.is_development());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_variables() {
        let config = config_from(&[
            ("AZURE_STORAGE_CONNECTION_STRING", "AccountName=a;AccountKey=a2V5"),
            ("AZURE_STORAGE_CONTAINER_NAME", "clips-2024"),
            ("LISTEN_ADDR", "127.0.0.1:3001"),
            ("STORAGE_REQUEST_TIMEOUT_SECS", "30"),
            ("ALLOWED_ORIGINS", " https://a.example , https://b.example ,"),
            ("ENVIRONMENT", "Production"),
        ]);

        assert!(config.storage_configured());
        assert_eq!(config.container_name, "clips-2024");
        assert_eq!(config.listen_addr, "127.0.0.1:3001");
        assert_eq!(config.storage_request_timeout_secs, 30);
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert!(!config.is_development());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_connection_string_is_unset() {
        let config = config_from(&[("AZURE_STORAGE_CONNECTION_STRING", "   ")]);
        assert!(!config.storage_configured());
    }

    #[test]
    fn test_unparseable_timeout_falls_back() {
        let config = config_from(&[("STORAGE_REQUEST_TIMEOUT_SECS", "soon")]);
        assert_eq!(config.storage_request_timeout_secs, 300);
    }

    #[test]
    fn test_invalid_container_names() {
        for name in ["ab", "Videos", "my--videos", "-videos", "videos-", "vid_eos"] {
            let config = Config {
                container_name: name.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{} should be rejected", name);
        }

        let long = Config {
            container_name: "a".repeat(64),
            ..Default::default()
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            storage_request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
