// ============================================================================
// SESSION STORE - estado de sesión compartido vía Context
// ============================================================================
// Fuente de verdad de "hay alguien autenticado". Lo muta únicamente el
// hook de autenticación; el resto de la app solo lo lee.
// ============================================================================

use crate::models::{Role, Session};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    pub session: Option<Session>,
    pub token: Option<String>,
    /// Restauración desde localStorage en curso (arranque de la app).
    pub restoring: bool,
    /// Login en curso (deshabilita el formulario).
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            session: None,
            token: None,
            restoring: true,
            loading: false,
            error: None,
        }
    }
}

impl SessionStore {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some() && self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }
}
