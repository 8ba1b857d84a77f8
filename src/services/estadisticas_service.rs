use crate::models::{Estadisticas, ProximosVencer, Vencidos};
use crate::services::api_client::{ApiClient, ApiError};

// ============ ADMIN - Ve todo el sistema ============

pub async fn obtener_dashboard(client: &ApiClient) -> Result<Estadisticas, ApiError> {
    client.get("/estadisticas/dashboard").await
}

pub async fn obtener_proximos_vencer(
    client: &ApiClient,
    dias: u32,
) -> Result<ProximosVencer, ApiError> {
    client
        .get(&format!("/estadisticas/proximos-vencer?dias={}", dias))
        .await
}

pub async fn obtener_vencidos(client: &ApiClient) -> Result<Vencidos, ApiError> {
    client.get("/estadisticas/vencidos").await
}

// ============ SUPERVISOR - Solo su equipo ============
// Si el endpoint específico no existe todavía en el backend, cae al
// endpoint general.

pub async fn obtener_dashboard_supervisor(
    client: &ApiClient,
    supervisor_id: i64,
) -> Result<Estadisticas, ApiError> {
    match client
        .get(&format!("/estadisticas/dashboard/supervisor/{}", supervisor_id))
        .await
    {
        Ok(stats) => Ok(stats),
        Err(e) => {
            log::warn!("⚠️ Endpoint de supervisor no disponible ({}), usando el general", e);
            obtener_dashboard(client).await
        }
    }
}

pub async fn obtener_proximos_vencer_supervisor(
    client: &ApiClient,
    supervisor_id: i64,
    dias: u32,
) -> Result<ProximosVencer, ApiError> {
    match client
        .get(&format!(
            "/estadisticas/proximos-vencer/supervisor/{}?dias={}",
            supervisor_id, dias
        ))
        .await
    {
        Ok(proximos) => Ok(proximos),
        Err(_) => obtener_proximos_vencer(client, dias).await,
    }
}

pub async fn obtener_vencidos_supervisor(
    client: &ApiClient,
    supervisor_id: i64,
) -> Result<Vencidos, ApiError> {
    match client
        .get(&format!("/estadisticas/vencidos/supervisor/{}", supervisor_id))
        .await
    {
        Ok(vencidos) => Ok(vencidos),
        Err(_) => obtener_vencidos(client).await,
    }
}

// ============ RESPONSABLE - Solo sus reportes ============

pub async fn obtener_dashboard_responsable(
    client: &ApiClient,
    responsable_id: i64,
) -> Result<Estadisticas, ApiError> {
    match client
        .get(&format!("/estadisticas/dashboard/responsable/{}", responsable_id))
        .await
    {
        Ok(stats) => Ok(stats),
        Err(e) => {
            log::warn!("⚠️ Endpoint de responsable no disponible ({}), usando el general", e);
            obtener_dashboard(client).await
        }
    }
}

pub async fn obtener_proximos_vencer_responsable(
    client: &ApiClient,
    responsable_id: i64,
    dias: u32,
) -> Result<ProximosVencer, ApiError> {
    match client
        .get(&format!(
            "/estadisticas/proximos-vencer/responsable/{}?dias={}",
            responsable_id, dias
        ))
        .await
    {
        Ok(proximos) => Ok(proximos),
        Err(_) => obtener_proximos_vencer(client, dias).await,
    }
}
