use serde::{Deserialize, Serialize};

/// Organización regulada externa dueña de obligaciones de reporte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entidad {
    #[serde(default)]
    pub id: Option<i64>,
    pub nit: String,
    pub razon_social: String,
    #[serde(default)]
    pub sigla: Option<String>,
    pub tipo_entidad: String,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub activo: bool,
}
