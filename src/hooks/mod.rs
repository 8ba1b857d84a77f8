pub mod use_auth;
pub mod use_pagination;

pub use use_auth::{use_auth, AuthContextProvider, UseAuthHandle};
pub use use_pagination::{use_pagination, UsePaginationHandle};
