use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alerta {
    pub id: i64,
    #[serde(default)]
    pub instancia_id: Option<i64>,
    #[serde(default)]
    pub reporte_nombre: Option<String>,
    #[serde(default)]
    pub periodo_reportado: Option<String>,
    #[serde(default)]
    pub tipo_alerta_id: Option<i64>,
    #[serde(default)]
    pub tipo_alerta_nombre: Option<String>,
    #[serde(default)]
    pub tipo_alerta_color: Option<String>,
    #[serde(default)]
    pub usuario_destino_id: Option<i64>,
    #[serde(default)]
    pub usuario_destino_nombre: Option<String>,
    pub fecha_programada: String,
    #[serde(default)]
    pub fecha_enviada: Option<String>,
    pub enviada: bool,
    #[serde(default)]
    pub mensaje: Option<String>,
    pub leida: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContadorAlertas {
    pub no_leidas: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarcarTodasResponse {
    pub mensaje: String,
    pub cantidad: u32,
}
