// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP con el token de
// la sesión que se le inyecta al construirlo.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::CONFIG;

/// Taxonomía de fallos de la capa HTTP. Un fallo de red (sin respuesta)
/// se distingue de una respuesta HTTP de error y de un cuerpo imparseable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("No se puede conectar con el servidor")]
    Network(String),
    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },
    #[error("Respuesta inválida del servidor: {0}")]
    Parse(String),
}

impl ApiError {
    /// Mensaje para mostrar al usuario en alertas bloqueantes de CRUD:
    /// el del backend cuando existe, uno genérico en caso contrario.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "No se puede conectar con el servidor. Verifique que el backend esté ejecutándose."
                    .to_string()
            }
            ApiError::Status { message: Some(m), .. } => m.clone(),
            ApiError::Status { status, .. } => format!("Error del servidor ({})", status),
            ApiError::Parse(_) => "Respuesta inválida del servidor.".to_string(),
        }
    }
}

/// Extrae el mensaje de error que algunos endpoints devuelven en el
/// cuerpo como `{"message": ...}` o `{"error": ...}`.
pub fn extract_backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .or_else(|| value.get("error").and_then(|m| m.as_str()))
        .map(|s| s.to_string())
}

/// Cliente API. La sesión es una dependencia explícita: cada vista lo
/// construye a partir del token de la sesión actual.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn status_error(response: Response) -> ApiError {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) => extract_backend_message(&body),
            Err(_) => None,
        };
        ApiError::Status { status, message }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .auth(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .auth(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// POST sin cuerpo (los parámetros viajan en la query).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .auth(Request::post(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// POST multipart para el envío de reportes con archivo adjunto.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let response = self
            .auth(Request::post(&self.url(path)))
            .body(JsValue::from(form))
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .auth(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .auth(Request::patch(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .auth(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensaje_del_backend_en_message_o_error() {
        assert_eq!(
            extract_backend_message(r#"{"message":"Cédula duplicada"}"#),
            Some("Cédula duplicada".to_string())
        );
        assert_eq!(
            extract_backend_message(r#"{"error":"No autorizado"}"#),
            Some("No autorizado".to_string())
        );
        assert_eq!(extract_backend_message(r#"{"otro":"campo"}"#), None);
        assert_eq!(extract_backend_message("<html>500</html>"), None);
    }

    #[test]
    fn user_message_prefiere_el_del_backend() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Cédula duplicada".into()),
        };
        assert_eq!(err.user_message(), "Cédula duplicada");

        let err = ApiError::Status { status: 500, message: None };
        assert_eq!(err.user_message(), "Error del servidor (500)");
    }

    #[test]
    fn fallo_de_red_tiene_copy_propio() {
        let err = ApiError::Network("fetch failed".into());
        assert!(err.user_message().contains("No se puede conectar"));
    }
}
