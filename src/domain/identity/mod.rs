//! Identity aggregate
//!
//! The signed-in user record, the closed role set and the directory
//! interface used to resolve logins.

pub mod directory;
pub mod model;

pub use directory::IdentityDirectory;
pub use model::{initials, Identity, Role};
