//! # Hospital ERP
//!
//! Session handling and role-based navigation for a hospital ERP demo,
//! served over a small REST API.
//!
//! ## Architecture
//!
//! - **domain**: identities, roles, the capability table and clinic records
//! - **application**: the session store and read-only view queries
//! - **infrastructure**: session slot backends and the demo fixtures
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: startup, tracing and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use interfaces::http::create_api_router;
