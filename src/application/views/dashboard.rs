use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::appointments::AppointmentRow;
use super::inventory::low_stock;
use crate::domain::clinic::{ClinicDataset, InventoryItem, InvoiceStatus};

/// How many upcoming appointments the dashboard lists.
pub const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub total_patients: usize,
    pub todays_appointments: usize,
    /// Invoices not yet paid, whatever their other status
    pub pending_invoices: usize,
    pub low_stock_items: usize,
    pub upcoming_appointments: Vec<AppointmentRow>,
    pub low_stock: Vec<InventoryItem>,
}

/// Headline numbers as of `now`.
pub fn dashboard_summary(data: &ClinicDataset, now: DateTime<Utc>) -> DashboardSummary {
    let today = now.date_naive();

    let todays_appointments = data
        .appointments
        .iter()
        .filter(|a| a.scheduled_date() == today)
        .count();

    let mut upcoming: Vec<_> = data
        .appointments
        .iter()
        .filter(|a| a.scheduled_at >= now)
        .collect();
    upcoming.sort_by_key(|a| a.scheduled_at);
    upcoming.truncate(UPCOMING_LIMIT);

    let low_stock: Vec<InventoryItem> = low_stock(data).cloned().collect();

    DashboardSummary {
        total_patients: data.patients.len(),
        todays_appointments,
        pending_invoices: data
            .invoices
            .iter()
            .filter(|inv| inv.status != InvoiceStatus::Paid)
            .count(),
        low_stock_items: low_stock.len(),
        upcoming_appointments: upcoming
            .into_iter()
            .map(|a| AppointmentRow::from_appointment(data, a))
            .collect(),
        low_stock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clinic_dataset;
    use chrono::TimeZone;

    #[test]
    fn morning_of_the_clinic_day() {
        let data = clinic_dataset();
        let now = Utc.with_ymd_and_hms(2024, 12, 27, 10, 15, 0).unwrap();

        let summary = dashboard_summary(&data, now);
        assert_eq!(summary.total_patients, 3);
        assert_eq!(summary.todays_appointments, 3);
        assert_eq!(summary.pending_invoices, 1);
        assert_eq!(summary.low_stock_items, 0);

        let upcoming: Vec<_> = summary
            .upcoming_appointments
            .iter()
            .map(|row| row.appointment.id.as_str())
            .collect();
        assert_eq!(upcoming, vec!["apt2", "apt3"]);
    }

    #[test]
    fn upcoming_is_capped() {
        let mut data = clinic_dataset();
        let template = data.appointments[0].clone();
        for i in 0..10 {
            let mut extra = template.clone();
            extra.id = format!("extra{}", i);
            extra.scheduled_at = template.scheduled_at + chrono::Duration::days(i + 1);
            data.appointments.push(extra);
        }
        let now = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();

        let summary = dashboard_summary(&data, now);
        assert_eq!(summary.upcoming_appointments.len(), UPCOMING_LIMIT);
        assert_eq!(summary.upcoming_appointments[0].appointment.id, "apt1");
        assert_eq!(summary.todays_appointments, 0);
    }
}
