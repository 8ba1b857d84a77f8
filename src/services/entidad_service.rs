use crate::models::Entidad;
use crate::services::api_client::{ApiClient, ApiError};

pub async fn listar(client: &ApiClient) -> Result<Vec<Entidad>, ApiError> {
    client.get("/entidades").await
}

pub async fn crear(client: &ApiClient, entidad: &Entidad) -> Result<Entidad, ApiError> {
    client.post("/entidades", entidad).await
}

pub async fn actualizar(client: &ApiClient, id: i64, entidad: &Entidad) -> Result<Entidad, ApiError> {
    client.put(&format!("/entidades/{}", id), entidad).await
}

pub async fn eliminar(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/entidades/{}", id)).await
}
