use serde::{Deserialize, Serialize};

/// Una ocurrencia programada de una obligación de reporte recurrente.
/// El backend es la copia autoritativa; el cliente solo lee y dispara
/// transiciones (enviar, aprobar, rechazar) de forma remota.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanciaReporte {
    pub id: i64,
    pub reporte_id: String,
    pub reporte_nombre: String,
    pub entidad_nombre: String,
    pub periodo_reportado: String,
    pub fecha_vencimiento_calculada: String,
    #[serde(default)]
    pub fecha_envio_real: Option<String>,
    pub estado: String,
    pub prioridad: String,
    pub dias_hasta_vencimiento: i64,
    #[serde(default)]
    pub dias_desviacion: Option<i64>,
    pub enviado: bool,
    pub vencido: bool,
    pub responsable_elaboracion: String,
    pub responsable_supervision: String,
    #[serde(default)]
    pub responsable_supervision_id: Option<i64>,
    pub frecuencia: String,
    #[serde(default)]
    pub formato_requerido: Option<String>,
    #[serde(default)]
    pub base_legal: Option<String>,
    #[serde(default)]
    pub link_reporte_final: Option<String>,
    #[serde(default)]
    pub link_evidencia_envio: Option<String>,
    #[serde(default)]
    pub nombre_archivo: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub enviado_por_nombre: Option<String>,
}

/// Filtros del histórico; los ausentes no viajan en la query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FiltrosHistorico {
    pub entidad_id: Option<i64>,
    pub year: Option<i32>,
    pub mes: Option<u32>,
}
