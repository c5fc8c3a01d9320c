pub mod auth;
pub mod clinic;
pub mod health;
pub mod metrics;
pub mod navigation;
