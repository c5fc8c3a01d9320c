//! Session management
//!
//! - `store`: the single signed-in identity, its login/logout lifecycle and
//!   its persisted copy

pub mod store;

pub use store::{SessionStore, SharedSessionStore, DEFAULT_LOGIN_LATENCY, SESSION_KEY};
