use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::clinic::{Appointment, AppointmentStatus, ClinicDataset, UNKNOWN_PATIENT};

/// An appointment joined with the patient's display name.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AppointmentRow {
    pub appointment: Appointment,
    pub patient_name: String,
}

impl AppointmentRow {
    pub(crate) fn from_appointment(data: &ClinicDataset, appointment: &Appointment) -> Self {
        let patient_name = data
            .patient(&appointment.patient_id)
            .map(|p| p.full_name())
            .unwrap_or_else(|| UNKNOWN_PATIENT.to_string());
        Self {
            appointment: appointment.clone(),
            patient_name,
        }
    }
}

/// The day's schedule in time order, optionally narrowed to one status.
pub fn appointments_on(
    data: &ClinicDataset,
    date: NaiveDate,
    status: Option<AppointmentStatus>,
) -> Vec<AppointmentRow> {
    let mut day: Vec<&Appointment> = data
        .appointments
        .iter()
        .filter(|a| a.scheduled_date() == date)
        .filter(|a| status.map_or(true, |s| a.status == s))
        .collect();
    day.sort_by_key(|a| a.scheduled_at);

    day.into_iter()
        .map(|a| AppointmentRow::from_appointment(data, a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clinic_dataset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn schedule_is_sorted_and_named() {
        let mut data = clinic_dataset();
        data.appointments.reverse();

        let rows = appointments_on(&data, date(2024, 12, 27), None);
        let ids: Vec<_> = rows.iter().map(|r| r.appointment.id.as_str()).collect();
        assert_eq!(ids, vec!["apt1", "apt2", "apt3"]);
        assert_eq!(rows[1].patient_name, "Sarah Smith");
    }

    #[test]
    fn other_days_are_empty() {
        let data = clinic_dataset();
        assert!(appointments_on(&data, date(2024, 12, 28), None).is_empty());
    }

    #[test]
    fn status_filter() {
        let data = clinic_dataset();
        let rows = appointments_on(&data, date(2024, 12, 27), Some(AppointmentStatus::CheckedIn));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].appointment.id, "apt2");
    }

    #[test]
    fn missing_patient_is_labelled() {
        let mut data = clinic_dataset();
        data.patients.clear();
        let rows = appointments_on(&data, date(2024, 12, 27), None);
        assert!(rows.iter().all(|r| r.patient_name == UNKNOWN_PATIENT));
    }
}
