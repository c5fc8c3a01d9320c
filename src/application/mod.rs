pub mod session;
pub mod views;

// Re-export key types for convenience
pub use session::{SessionStore, SharedSessionStore, SESSION_KEY};
pub use views::{
    appointments_on, billing_overview, dashboard_summary, inventory_overview, search_encounters,
    search_patients,
};
