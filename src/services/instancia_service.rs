use web_sys::FormData;

use crate::models::{FiltrosHistorico, InstanciaReporte};
use crate::services::api_client::{ApiClient, ApiError};

fn encode(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

pub async fn listar(client: &ApiClient) -> Result<Vec<InstanciaReporte>, ApiError> {
    client.get("/instancias").await
}

pub async fn listar_pendientes(client: &ApiClient) -> Result<Vec<InstanciaReporte>, ApiError> {
    client.get("/instancias/pendientes").await
}

pub async fn listar_vencidos(client: &ApiClient) -> Result<Vec<InstanciaReporte>, ApiError> {
    client.get("/instancias/vencidos").await
}

pub async fn listar_historico(
    client: &ApiClient,
    filtros: FiltrosHistorico,
) -> Result<Vec<InstanciaReporte>, ApiError> {
    let mut params: Vec<String> = Vec::new();
    if let Some(entidad_id) = filtros.entidad_id {
        params.push(format!("entidadId={}", entidad_id));
    }
    if let Some(year) = filtros.year {
        params.push(format!("year={}", year));
    }
    if let Some(mes) = filtros.mes {
        params.push(format!("mes={}", mes));
    }

    let path = if params.is_empty() {
        "/instancias/historico".to_string()
    } else {
        format!("/instancias/historico?{}", params.join("&"))
    };
    client.get(&path).await
}

/// Envía el reporte con archivo adjunto (multipart).
pub async fn enviar_reporte(
    client: &ApiClient,
    instancia_id: i64,
    archivo: web_sys::File,
    observaciones: Option<&str>,
    link_evidencia: Option<&str>,
) -> Result<InstanciaReporte, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Parse("FormData".into()))?;
    form.append_with_blob_and_filename("archivo", &archivo, &archivo.name())
        .map_err(|_| ApiError::Parse("FormData".into()))?;
    if let Some(obs) = observaciones {
        let _ = form.append_with_str("observaciones", obs);
    }
    if let Some(link) = link_evidencia {
        let _ = form.append_with_str("linkEvidenciaEnvio", link);
    }

    client
        .post_form(&format!("/instancias/{}/enviar", instancia_id), form)
        .await
}

/// Envía el reporte referenciando un link en lugar de un archivo.
pub async fn enviar_reporte_con_link(
    client: &ApiClient,
    instancia_id: i64,
    link_reporte: &str,
    observaciones: Option<&str>,
    link_evidencia: Option<&str>,
) -> Result<InstanciaReporte, ApiError> {
    let mut params = vec![format!("linkReporteFinal={}", encode(link_reporte))];
    if let Some(obs) = observaciones {
        params.push(format!("observaciones={}", encode(obs)));
    }
    if let Some(link) = link_evidencia {
        params.push(format!("linkEvidenciaEnvio={}", encode(link)));
    }

    client
        .post_empty(&format!(
            "/instancias/{}/enviar-link?{}",
            instancia_id,
            params.join("&")
        ))
        .await
}

/// Decisión del supervisor: aprobar el reporte enviado.
pub async fn aprobar(
    client: &ApiClient,
    instancia_id: i64,
    observacion: &str,
) -> Result<InstanciaReporte, ApiError> {
    client
        .patch(&format!(
            "/instancias/{}/aprobar?observacion={}",
            instancia_id,
            encode(observacion)
        ))
        .await
}

/// Decisión del supervisor: devolver para corrección. El motivo es
/// obligatorio; la vista lo valida antes de llamar.
pub async fn rechazar(
    client: &ApiClient,
    instancia_id: i64,
    observacion: &str,
) -> Result<InstanciaReporte, ApiError> {
    client
        .patch(&format!(
            "/instancias/{}/rechazar?observacion={}",
            instancia_id,
            encode(observacion)
        ))
        .await
}
