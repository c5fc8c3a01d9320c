//! Role-aware navigation menu

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
