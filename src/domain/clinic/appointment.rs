use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    CheckedIn,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub hospital_id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub scheduled_at: DateTime<Utc>,
    /// Length of the slot in minutes
    pub duration: u32,
    pub status: AppointmentStatus,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Calendar day of the appointment, in UTC.
    pub fn scheduled_date(&self) -> NaiveDate {
        self.scheduled_at.date_naive()
    }
}
