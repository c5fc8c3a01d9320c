//! Read-only view queries
//!
//! One module per screen. Each query is a pure function over the
//! [`ClinicDataset`](crate::domain::ClinicDataset): filter, search, sort
//! and sum. Nothing here mutates records.

pub mod appointments;
pub mod billing;
pub mod dashboard;
pub mod encounters;
pub mod inventory;
pub mod patients;

pub use appointments::{appointments_on, AppointmentRow};
pub use billing::{billing_overview, BillingOverview, BillingSummary, InvoiceRow};
pub use dashboard::{dashboard_summary, DashboardSummary, UPCOMING_LIMIT};
pub use encounters::{search_encounters, EncounterRow};
pub use inventory::{inventory_overview, InventoryFilter, InventoryOverview, InventoryRow};
pub use patients::search_patients;

/// Lower-cased search term; `None` when the term is blank and every
/// record matches.
fn normalize(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        None
    } else {
        Some(term.to_lowercase())
    }
}

/// Case-insensitive substring test against an already lower-cased needle.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_terms_match_everything() {
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(" Doe "), Some("doe".to_string()));
    }

    #[test]
    fn substring_ignores_case() {
        assert!(contains_ci("John Doe", "doe"));
        assert!(!contains_ci("John Doe", "smith"));
    }
}
