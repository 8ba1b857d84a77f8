use crate::models::Rol;
use crate::services::api_client::{ApiClient, ApiError};

pub async fn listar(client: &ApiClient) -> Result<Vec<Rol>, ApiError> {
    client.get("/roles").await
}
