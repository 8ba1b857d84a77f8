pub mod alerta_service;
pub mod api_client;
pub mod auth_service;
pub mod entidad_service;
pub mod estadisticas_service;
pub mod instancia_service;
pub mod rol_service;
pub mod usuario_service;

pub use api_client::{ApiClient, ApiError};
