pub mod header;
pub mod instancia_detalle;
pub mod notification_dropdown;
pub mod pagination;
pub mod route_guard;

pub use header::AppHeader;
pub use notification_dropdown::NotificationDropdown;
pub use pagination::Pagination;
pub use route_guard::{PublicRoute, RequireAuth, RoleRoute};
