/// Claves de localStorage. Se escriben juntas en el login y se
/// limpian juntas en el logout o al detectar datos corruptos.
pub const STORAGE_KEY_TOKEN: &str = "repotrack_token";
pub const STORAGE_KEY_USER: &str = "repotrack_user";

/// Ruta solicitada antes de redirigir a /signin, para volver tras el login.
pub const STORAGE_KEY_REDIRECT: &str = "repotrack_redirect";
