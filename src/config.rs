use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Intervalo del sondeo del contador de alertas, en segundos.
    pub alert_poll_seconds: u32,
    /// Ventana por defecto de "próximos a vencer" en el dashboard.
    pub proximos_vencer_dias: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:8080/api".to_string(),
            backend_url_production: "https://api.repotrack.example.com/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            alert_poll_seconds: 60,
            proximos_vencer_dias: 7,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:8080/api")
                .to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.repotrack.example.com/api")
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            alert_poll_seconds: option_env!("ALERT_POLL_SECONDS")
                .unwrap_or("60")
                .parse()
                .unwrap_or(60),
            proximos_vencer_dias: option_env!("PROXIMOS_VENCER_DIAS")
                .unwrap_or("7")
                .parse()
                .unwrap_or(7),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
