//! Read-only clinic screens over the demo dataset

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
