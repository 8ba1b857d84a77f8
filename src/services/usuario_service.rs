use crate::models::{Usuario, UsuarioRequest};
use crate::services::api_client::{ApiClient, ApiError};

pub async fn listar(client: &ApiClient) -> Result<Vec<Usuario>, ApiError> {
    client.get("/usuarios").await
}

pub async fn crear(client: &ApiClient, usuario: &UsuarioRequest) -> Result<Usuario, ApiError> {
    client.post("/usuarios", usuario).await
}

pub async fn actualizar(
    client: &ApiClient,
    id: i64,
    usuario: &UsuarioRequest,
) -> Result<Usuario, ApiError> {
    client.put(&format!("/usuarios/{}", id), usuario).await
}

pub async fn eliminar(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/usuarios/{}", id)).await
}
