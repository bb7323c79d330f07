use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
const DEFAULT_STATUS_RESET_MS: u32 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub token_storage_key: String,
    /// Retardo antes de que iconos de estado por fila y avisos de éxito vuelvan a idle.
    pub status_reset_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            status_reset_ms: DEFAULT_STATUS_RESET_MS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación (ver build.rs)
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("TOKEN_STORAGE_KEY"),
            option_env!("STATUS_RESET_MS"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        token_storage_key: Option<&str>,
        status_reset_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            token_storage_key: token_storage_key
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.token_storage_key),
            status_reset_ms: status_reset_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.status_reset_ms),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
