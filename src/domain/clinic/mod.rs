//! Clinic records
//!
//! Immutable value records consumed by the view queries. Invariants such
//! as invoice totals are assumed true of the data, never enforced here.

pub mod appointment;
pub mod audit;
pub mod encounter;
pub mod inventory;
pub mod invoice;
pub mod patient;

pub use appointment::{Appointment, AppointmentStatus};
pub use audit::AuditLog;
pub use encounter::{Diagnosis, Encounter, EncounterStatus, Medication, VisitType, Vitals};
pub use inventory::{Batch, InventoryItem, StockStatus};
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus, Payment, PaymentMethod};
pub use patient::{Address, EmergencyContact, Gender, InsuranceInfo, Patient};

/// Name shown when a record points at a patient that does not exist.
pub const UNKNOWN_PATIENT: &str = "Unknown Patient";

/// Every collection the screens read from.
#[derive(Debug, Clone, Default)]
pub struct ClinicDataset {
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub encounters: Vec<Encounter>,
    pub invoices: Vec<Invoice>,
    pub inventory: Vec<InventoryItem>,
}

impl ClinicDataset {
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Full name of the patient, or an empty string when unknown.
    pub fn patient_name(&self, id: &str) -> String {
        self.patient(id).map(Patient::full_name).unwrap_or_default()
    }
}
