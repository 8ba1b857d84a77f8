pub mod alerta;
pub mod auth;
pub mod entidad;
pub mod estadisticas;
pub mod instancia;
pub mod usuario;

pub use alerta::{Alerta, ContadorAlertas, MarcarTodasResponse};
pub use auth::{LoginRequest, LoginResponse, Role, Session, StoredUser};
pub use entidad::Entidad;
pub use estadisticas::{Estadisticas, ProximosVencer, ReporteProximo, ReporteVencido, Vencidos};
pub use instancia::{FiltrosHistorico, InstanciaReporte};
pub use usuario::{Rol, RolRef, Usuario, UsuarioRequest};
