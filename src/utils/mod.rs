// Utils compartidos

pub mod constants;
pub mod date;
pub mod storage;

pub use constants::*;
pub use storage::*;
