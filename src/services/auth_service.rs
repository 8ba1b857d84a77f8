use crate::models::{LoginRequest, LoginResponse};
use crate::services::api_client::{ApiClient, ApiError};

/// Envía las credenciales al endpoint de autenticación. El cliente se
/// construye sin token: el login es la única llamada no autenticada.
pub async fn login(correo: &str, contrasena: &str) -> Result<LoginResponse, ApiError> {
    let client = ApiClient::new(None);
    let request = LoginRequest {
        correo: correo.to_string(),
        contrasena: contrasena.to_string(),
    };

    log::info!("🔐 Iniciando sesión para: {}", correo);
    client.post("/auth/login", &request).await
}

/// Clasifica un fallo de login en el mensaje que ve el usuario.
/// 401 → credenciales, 403 → cuenta inactiva, 404 → usuario desconocido;
/// el resto usa el mensaje del backend si llegó, o uno genérico.
pub fn classify_login_error(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 401, .. } => {
            "Credenciales incorrectas. Verifique su correo y contraseña.".to_string()
        }
        ApiError::Status { status: 403, .. } => {
            "Usuario inactivo o sin permisos de acceso.".to_string()
        }
        ApiError::Status { status: 404, .. } => "Usuario no encontrado.".to_string(),
        ApiError::Status { message: Some(m), .. } => m.clone(),
        ApiError::Status { .. } => {
            "Error al iniciar sesión. Intente nuevamente.".to_string()
        }
        ApiError::Network(_) => {
            "No se puede conectar con el servidor. Verifique que el backend esté ejecutándose."
                .to_string()
        }
        ApiError::Parse(_) => "Error inesperado. Intente nuevamente.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> ApiError {
        ApiError::Status { status: code, message: None }
    }

    #[test]
    fn clasifica_por_estado_http() {
        assert!(classify_login_error(&status(401)).contains("Credenciales incorrectas"));
        assert!(classify_login_error(&status(403)).contains("inactivo"));
        assert_eq!(classify_login_error(&status(404)), "Usuario no encontrado.");
        assert!(classify_login_error(&status(500)).contains("Intente nuevamente"));
    }

    #[test]
    fn mensaje_del_backend_para_estados_no_mapeados() {
        let err = ApiError::Status {
            status: 422,
            message: Some("Cuenta bloqueada".into()),
        };
        assert_eq!(classify_login_error(&err), "Cuenta bloqueada");
    }

    #[test]
    fn red_inalcanzable_se_distingue_de_http() {
        let msg = classify_login_error(&ApiError::Network("timeout".into()));
        assert!(msg.contains("No se puede conectar"));
        let msg = classify_login_error(&ApiError::Parse("eof".into()));
        assert!(msg.contains("inesperado"));
    }
}
