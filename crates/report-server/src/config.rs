//! Environment-provided configuration

/// Application configuration read from the environment.
///
/// A missing credential is not fatal at startup: the server comes up, logs a
/// warning, and re-checks per request so the key can be provided without a
/// code change to the deployment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Groq API credential (`GROQ_API_KEY`), if present.
    pub groq_api_key: Option<String>,
    /// Listening port (`PORT`, default 5000).
    pub port: u16,
    /// Environment mode flag (`APP_ENV`, default "development").
    pub environment: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let groq_api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(5000);

        let environment =
            std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Self {
            groq_api_key,
            port,
            environment,
        }
    }

    /// Whether the completion credential is configured.
    pub fn groq_configured(&self) -> bool {
        self.groq_api_key.is_some()
    }

    /// Whether the server runs in development mode.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation lives in a single test so parallel tests in this
    // binary never race on the variables.
    #[test]
    fn test_from_env() {
        unsafe {
            std::env::set_var("GROQ_API_KEY", "gsk-test");
            std::env::set_var("PORT", "8123");
            std::env::set_var("APP_ENV", "production");
        }

        let config = AppConfig::from_env();
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk-test"));
        assert_eq!(config.port, 8123);
        assert!(!config.is_development());
        assert!(config.groq_configured());

        unsafe {
            std::env::set_var("GROQ_API_KEY", "   ");
            std::env::set_var("PORT", "not-a-port");
            std::env::remove_var("APP_ENV");
        }

        let config = AppConfig::from_env();
        // Blank credential counts as absent; unparsable port falls back.
        assert!(!config.groq_configured());
        assert_eq!(config.port, 5000);
        assert!(config.is_development());

        unsafe {
            std::env::remove_var("GROQ_API_KEY");
            std::env::remove_var("PORT");
        }
    }
}
