use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rol {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    #[serde(default)]
    pub id: Option<i64>,
    pub cedula: String,
    pub nombre_completo: String,
    pub correo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
    pub proceso: String,
    pub cargo: String,
    #[serde(default)]
    pub telefono: Option<String>,
    pub rol: Rol,
    pub activo: bool,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
    #[serde(default)]
    pub fecha_actualizacion: Option<String>,
}

/// Cuerpo de creación/actualización. El rol viaja solo como referencia
/// por id y la contraseña se omite cuando no se cambia.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioRequest {
    pub cedula: String,
    pub nombre_completo: String,
    pub correo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
    pub proceso: String,
    pub cargo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    pub rol: RolRef,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RolRef {
    pub id: i64,
}
