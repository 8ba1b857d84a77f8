use serde::{Deserialize, Serialize};

/// Roles reconocidos por el frontend. Enumeración cerrada: toda cadena
/// de rol del backend se normaliza a exactamente uno de estos valores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrador,
    Supervisor,
    Responsable,
    Auditor,
}

impl Role {
    /// Normaliza la etiqueta de rol que entrega el backend.
    ///
    /// Primero un match explícito sobre las etiquetas conocidas; si llega
    /// una variante nueva se resuelve por contención de palabra clave en
    /// orden de prioridad admin → supervisor → responsable → auditor.
    /// El valor por defecto documentado es `Responsable`.
    pub fn from_backend_label(raw: &str) -> Self {
        match raw {
            "ROLE_ADMINISTRADOR" | "Administrador" | "administrador" => return Role::Administrador,
            "ROLE_SUPERVISOR" | "Supervisor" | "supervisor" => return Role::Supervisor,
            "ROLE_RESPONSABLE" | "Responsable" | "responsable" => return Role::Responsable,
            "ROLE_AUDITOR" | "Auditor" | "auditor" => return Role::Auditor,
            _ => {}
        }

        let lower = raw.to_lowercase();
        if lower.contains("admin") {
            Role::Administrador
        } else if lower.contains("supervis") {
            Role::Supervisor
        } else if lower.contains("responsa") {
            Role::Responsable
        } else if lower.contains("audit") {
            Role::Auditor
        } else {
            Role::Responsable
        }
    }

    /// Nombre para mostrar en la cabecera.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Administrador => "Administrador",
            Role::Supervisor => "Supervisor",
            Role::Responsable => "Responsable",
            Role::Auditor => "Auditor",
        }
    }
}

/// Sesión activa del usuario. Una sola por contexto de navegador;
/// la crea el login y la destruye el logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub raw_backend_role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub correo: String,
    pub contrasena: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub id: i64,
    pub nombre: String,
    pub rol: String,
}

/// Registro de usuario persistido en localStorage junto al token.
/// Guarda la etiqueta cruda del backend para re-normalizar al restaurar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub id: i64,
    pub email: String,
    pub nombre: String,
    pub rol: String,
}

impl StoredUser {
    pub fn into_session(self) -> Session {
        Session {
            role: Role::from_backend_label(&self.rol),
            user_id: self.id,
            email: self.email,
            display_name: self.nombre,
            raw_backend_role: self.rol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etiquetas_conocidas() {
        assert_eq!(Role::from_backend_label("ROLE_ADMINISTRADOR"), Role::Administrador);
        assert_eq!(Role::from_backend_label("Administrador"), Role::Administrador);
        assert_eq!(Role::from_backend_label("ROLE_SUPERVISOR"), Role::Supervisor);
        assert_eq!(Role::from_backend_label("Responsable"), Role::Responsable);
        assert_eq!(Role::from_backend_label("ROLE_AUDITOR"), Role::Auditor);
    }

    #[test]
    fn contencion_de_palabra_clave() {
        assert_eq!(Role::from_backend_label("SYS_ADMIN"), Role::Administrador);
        assert_eq!(Role::from_backend_label("supervisora regional"), Role::Supervisor);
        assert_eq!(Role::from_backend_label("Auditoría Externa"), Role::Auditor);
    }

    #[test]
    fn prioridad_admin_sobre_el_resto() {
        // Una etiqueta que contiene varias palabras clave resuelve por prioridad.
        assert_eq!(Role::from_backend_label("admin-supervisor"), Role::Administrador);
        assert_eq!(Role::from_backend_label("supervisor auditor"), Role::Supervisor);
    }

    #[test]
    fn normalizacion_total_con_default() {
        // Toda entrada produce un rol; el default documentado es Responsable.
        for raw in ["", "???", "GERENTE", "usuario básico", "öäü"] {
            assert_eq!(Role::from_backend_label(raw), Role::Responsable);
        }
    }

    #[test]
    fn stored_user_a_sesion() {
        let stored = StoredUser {
            id: 7,
            email: "ana@acme.co".into(),
            nombre: "Ana".into(),
            rol: "ROLE_SUPERVISOR".into(),
        };
        let session = stored.into_session();
        assert_eq!(session.user_id, 7);
        assert_eq!(session.role, Role::Supervisor);
        assert_eq!(session.raw_backend_role, "ROLE_SUPERVISOR");
    }
}
