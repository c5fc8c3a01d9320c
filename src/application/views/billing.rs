use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::{contains_ci, normalize};
use crate::domain::clinic::{ClinicDataset, Invoice, InvoiceStatus, UNKNOWN_PATIENT};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvoiceRow {
    pub invoice: Invoice,
    pub patient_name: String,
    pub balance_due: Decimal,
}

/// Totals over every invoice, independent of the current filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BillingSummary {
    /// Sum of paid invoice totals
    pub total_revenue: Decimal,
    /// Sum of sent and overdue invoice totals
    pub pending_amount: Decimal,
    pub overdue_count: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BillingOverview {
    pub invoices: Vec<InvoiceRow>,
    pub summary: BillingSummary,
}

impl BillingSummary {
    pub fn from_invoices(invoices: &[Invoice]) -> Self {
        let total_revenue = invoices
            .iter()
            .filter(|inv| inv.status == InvoiceStatus::Paid)
            .map(|inv| inv.total)
            .sum();
        let pending_amount = invoices
            .iter()
            .filter(|inv| inv.status.is_pending())
            .map(|inv| inv.total)
            .sum();
        let overdue_count = invoices
            .iter()
            .filter(|inv| inv.status == InvoiceStatus::Overdue)
            .count();

        Self {
            total_revenue,
            pending_amount,
            overdue_count,
        }
    }
}

/// Invoices matching the term on patient name or invoice number, with
/// `status = None` meaning every status.
pub fn billing_overview(
    data: &ClinicDataset,
    term: &str,
    status: Option<InvoiceStatus>,
) -> BillingOverview {
    let needle = normalize(term);

    let invoices = data
        .invoices
        .iter()
        .filter(|inv| status.map_or(true, |s| inv.status == s))
        .filter_map(|invoice| {
            let patient_name = data.patient_name(&invoice.patient_id);
            let matched = match &needle {
                None => true,
                Some(needle) => {
                    contains_ci(&patient_name, needle)
                        || contains_ci(&invoice.invoice_number, needle)
                }
            };
            matched.then(|| InvoiceRow {
                invoice: invoice.clone(),
                patient_name: if patient_name.is_empty() {
                    UNKNOWN_PATIENT.to_string()
                } else {
                    patient_name
                },
                balance_due: invoice.balance_due(),
            })
        })
        .collect();

    BillingOverview {
        invoices,
        summary: BillingSummary::from_invoices(&data.invoices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clinic_dataset;

    fn numbers(overview: &BillingOverview) -> Vec<&str> {
        overview
            .invoices
            .iter()
            .map(|row| row.invoice.invoice_number.as_str())
            .collect()
    }

    #[test]
    fn summary_over_fixture_invoices() {
        let data = clinic_dataset();
        let overview = billing_overview(&data, "", None);
        assert_eq!(overview.summary.total_revenue, Decimal::new(196, 0));
        assert_eq!(overview.summary.pending_amount, Decimal::new(189, 0));
        assert_eq!(overview.summary.overdue_count, 0);
    }

    #[test]
    fn status_and_search_filters() {
        let data = clinic_dataset();
        assert_eq!(
            numbers(&billing_overview(&data, "", Some(InvoiceStatus::Paid))),
            vec!["INV-2024-002"]
        );
        assert_eq!(numbers(&billing_overview(&data, "inv-2024-001", None)), vec!["INV-2024-001"]);
        assert_eq!(numbers(&billing_overview(&data, "doe", None)), vec!["INV-2024-002"]);
        assert!(billing_overview(&data, "doe", Some(InvoiceStatus::Sent)).invoices.is_empty());
    }

    #[test]
    fn summary_ignores_filter() {
        let data = clinic_dataset();
        let overview = billing_overview(&data, "nothing matches", None);
        assert!(overview.invoices.is_empty());
        assert_eq!(overview.summary.total_revenue, Decimal::new(196, 0));
    }

    #[test]
    fn overdue_counts_as_pending() {
        let mut data = clinic_dataset();
        data.invoices[0].status = InvoiceStatus::Overdue;
        let summary = BillingSummary::from_invoices(&data.invoices);
        assert_eq!(summary.overdue_count, 1);
        assert_eq!(summary.pending_amount, Decimal::new(189, 0));
    }
}
