use serde::{Deserialize, Serialize};

/// Agregados ya calculados por el backend para las tarjetas del dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estadisticas {
    pub total_obligaciones: u32,
    pub total_enviados_a_tiempo: u32,
    pub total_vencidos: u32,
    pub total_pendientes: u32,
    pub porcentaje_cumplimiento_a_tiempo: f64,
    pub reportes_proximos_vencer7_dias: u32,
    #[serde(default)]
    pub entidad_mayor_incumplimiento: Option<String>,
    #[serde(default)]
    pub incumplimientos_entidad_problema: Option<u32>,
    #[serde(default)]
    pub responsable_mayor_incumplimiento: Option<String>,
    #[serde(default)]
    pub incumplimientos_responsable_problema: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteProximo {
    pub id: i64,
    pub reporte_nombre: String,
    pub entidad_nombre: String,
    pub periodo_reportado: String,
    pub fecha_vencimiento: String,
    pub dias_restantes: i64,
    pub responsable: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximosVencer {
    pub reportes: Vec<ReporteProximo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteVencido {
    pub id: i64,
    pub reporte_nombre: String,
    pub entidad_nombre: String,
    pub periodo_reportado: String,
    pub fecha_vencimiento: String,
    pub dias_vencido: i64,
    pub responsable: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vencidos {
    pub reportes: Vec<ReporteVencido>,
}
