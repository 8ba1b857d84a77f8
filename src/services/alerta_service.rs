use crate::models::{Alerta, ContadorAlertas, MarcarTodasResponse};
use crate::services::api_client::{ApiClient, ApiError};

pub async fn listar_mis_alertas(client: &ApiClient) -> Result<Vec<Alerta>, ApiError> {
    client.get("/alertas/mis-alertas").await
}

pub async fn listar_mis_alertas_no_leidas(client: &ApiClient) -> Result<Vec<Alerta>, ApiError> {
    client.get("/alertas/mis-alertas/no-leidas").await
}

pub async fn contar_no_leidas(client: &ApiClient) -> Result<u32, ApiError> {
    let contador: ContadorAlertas = client.get("/alertas/mis-alertas/contador").await?;
    Ok(contador.no_leidas)
}

pub async fn marcar_como_leida(client: &ApiClient, id: i64) -> Result<Alerta, ApiError> {
    client.patch(&format!("/alertas/{}/marcar-leida", id)).await
}

pub async fn marcar_todas_como_leidas(client: &ApiClient) -> Result<MarcarTodasResponse, ApiError> {
    client.patch("/alertas/mis-alertas/marcar-todas-leidas").await
}
