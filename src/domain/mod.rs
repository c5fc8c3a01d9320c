pub mod clinic;
pub mod identity;
pub mod navigation;

// Re-export commonly used types
pub use clinic::ClinicDataset;
pub use identity::{Identity, IdentityDirectory, Role};
pub use navigation::{
    capabilities_for, navigation_for, resolve_destination, CapabilityEntry, Destination, Icon,
};

// Re-export errors from shared for convenience
pub use crate::shared::errors::AuthError;
