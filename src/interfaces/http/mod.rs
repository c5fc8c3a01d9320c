//! HTTP REST API interfaces
//!
//! - `common`: response envelope and validated JSON extractor
//! - `middleware`: session guard for the clinic views
//! - `modules`: request handlers grouped by resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

pub use router::create_api_router;
pub use state::AppState;
