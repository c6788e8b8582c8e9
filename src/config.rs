use serde::{Deserialize, Serialize};

/// Compile-time application configuration.
/// Values come from the environment (or `.env` via build.rs) at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url_development: String,
    pub api_base_url_production: String,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url_development: "http://localhost:5000".to_string(),
            api_base_url_production: "https://api.siteplus.vn".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url_development: option_env!("API_BASE_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:5000")
                .to_string(),
            api_base_url_production: option_env!("API_BASE_URL_PRODUCTION")
                .unwrap_or("https://api.siteplus.vn")
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
        }
    }

    /// Base URL of the REST backend for the current environment
    pub fn api_base_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_base_url_production,
            _ => &self.api_base_url_development,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
