//! Sample clinic records served by the views

use rust_decimal::Decimal;

use super::{at, day};
use crate::domain::clinic::*;

/// The demo hospital: three patients, a morning of appointments, one
/// signed encounter, two invoices and three stock lines.
pub fn clinic_dataset() -> ClinicDataset {
    ClinicDataset {
        patients: patients(),
        appointments: appointments(),
        encounters: encounters(),
        invoices: invoices(),
        inventory: inventory(),
    }
}

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "pat1".into(),
            hospital_id: "hosp1".into(),
            mrn: "MRN001".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            dob: day(1980, 5, 15),
            gender: Gender::Male,
            phone: "+1-555-0123".into(),
            email: "john.doe@email.com".into(),
            address: Address {
                street: "123 Main St".into(),
                city: "New York".into(),
                state: "NY".into(),
                zip_code: "10001".into(),
            },
            emergency_contact: EmergencyContact {
                name: "Jane Doe".into(),
                relationship: "Spouse".into(),
                phone: "+1-555-0124".into(),
            },
            insurance_info: Some(InsuranceInfo {
                provider: "BlueCross BlueShield".into(),
                policy_number: "BC123456789".into(),
                group_number: "GRP001".into(),
            }),
            created_at: at(2024, 1, 15, 10, 0),
            updated_at: at(2024, 1, 15, 10, 0),
        },
        Patient {
            id: "pat2".into(),
            hospital_id: "hosp1".into(),
            mrn: "MRN002".into(),
            first_name: "Sarah".into(),
            last_name: "Smith".into(),
            dob: day(1975, 8, 22),
            gender: Gender::Female,
            phone: "+1-555-0125".into(),
            email: "sarah.smith@email.com".into(),
            address: Address {
                street: "456 Oak Ave".into(),
                city: "Brooklyn".into(),
                state: "NY".into(),
                zip_code: "11201".into(),
            },
            emergency_contact: EmergencyContact {
                name: "Michael Smith".into(),
                relationship: "Husband".into(),
                phone: "+1-555-0126".into(),
            },
            insurance_info: None,
            created_at: at(2024, 1, 16, 9, 30),
            updated_at: at(2024, 1, 16, 9, 30),
        },
        Patient {
            id: "pat3".into(),
            hospital_id: "hosp1".into(),
            mrn: "MRN003".into(),
            first_name: "Robert".into(),
            last_name: "Johnson".into(),
            dob: day(1990, 12, 10),
            gender: Gender::Male,
            phone: "+1-555-0127".into(),
            email: "robert.johnson@email.com".into(),
            address: Address {
                street: "789 Pine Rd".into(),
                city: "Queens".into(),
                state: "NY".into(),
                zip_code: "11101".into(),
            },
            emergency_contact: EmergencyContact {
                name: "Linda Johnson".into(),
                relationship: "Mother".into(),
                phone: "+1-555-0128".into(),
            },
            insurance_info: None,
            created_at: at(2024, 1, 17, 14, 15),
            updated_at: at(2024, 1, 17, 14, 15),
        },
    ]
}

fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "apt1".into(),
            hospital_id: "hosp1".into(),
            patient_id: "pat1".into(),
            doctor_id: "1".into(),
            scheduled_at: at(2024, 12, 27, 10, 0),
            duration: 30,
            status: AppointmentStatus::Scheduled,
            reason: "Annual checkup".into(),
            notes: None,
            created_by: "3".into(),
            created_at: at(2024, 12, 26, 15, 0),
        },
        Appointment {
            id: "apt2".into(),
            hospital_id: "hosp1".into(),
            patient_id: "pat2".into(),
            doctor_id: "1".into(),
            scheduled_at: at(2024, 12, 27, 10, 30),
            duration: 45,
            status: AppointmentStatus::CheckedIn,
            reason: "Follow-up consultation".into(),
            notes: Some("Patient has been experiencing headaches".into()),
            created_by: "3".into(),
            created_at: at(2024, 12, 26, 16, 30),
        },
        Appointment {
            id: "apt3".into(),
            hospital_id: "hosp1".into(),
            patient_id: "pat3".into(),
            doctor_id: "1".into(),
            scheduled_at: at(2024, 12, 27, 11, 15),
            duration: 30,
            status: AppointmentStatus::Scheduled,
            reason: "Vaccination".into(),
            notes: None,
            created_by: "3".into(),
            created_at: at(2024, 12, 26, 14, 20),
        },
    ]
}

fn encounters() -> Vec<Encounter> {
    vec![Encounter {
        id: "enc1".into(),
        patient_id: "pat2".into(),
        appointment_id: Some("apt2".into()),
        provider_id: "1".into(),
        visit_type: VisitType::FollowUp,
        chief_complaint: "Recurring headaches for the past week".into(),
        vitals: Vitals {
            temperature: Some(98.6),
            blood_pressure: Some("120/80".into()),
            heart_rate: Some(72),
            respiratory_rate: Some(16),
            weight: Some(150.0),
            height: Some(65.0),
            oxygen_saturation: Some(99),
        },
        assessment: "Tension headaches likely due to stress and poor sleep habits".into(),
        plan: "Recommend stress management techniques, regular sleep schedule, and follow-up in 2 weeks".into(),
        diagnoses: vec![Diagnosis {
            code: "G44.209".into(),
            description: "Tension-type headache, unspecified, not intractable".into(),
        }],
        medications: vec![Medication {
            name: "Ibuprofen".into(),
            dosage: "200mg".into(),
            frequency: "Every 6-8 hours as needed".into(),
            duration: "1 week".into(),
        }],
        status: EncounterStatus::Signed,
        created_at: at(2024, 12, 27, 10, 35),
        updated_at: at(2024, 12, 27, 11, 15),
    }]
}

fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "inv1".into(),
            patient_id: "pat2".into(),
            encounter_id: Some("enc1".into()),
            invoice_number: "INV-2024-001".into(),
            items: vec![
                InvoiceItem {
                    code: "99213".into(),
                    description: "Office visit - established patient".into(),
                    quantity: 1,
                    unit_price: money(15000),
                    total: money(15000),
                },
                InvoiceItem {
                    code: "LAB001".into(),
                    description: "Blood pressure check".into(),
                    quantity: 1,
                    unit_price: money(2500),
                    total: money(2500),
                },
            ],
            subtotal: money(17500),
            tax: money(1400),
            discount: money(0),
            total: money(18900),
            status: InvoiceStatus::Sent,
            payments: Vec::new(),
            due_date: at(2025, 1, 26, 0, 0),
            created_at: at(2024, 12, 27, 11, 20),
            updated_at: at(2024, 12, 27, 11, 20),
        },
        Invoice {
            id: "inv2".into(),
            patient_id: "pat1".into(),
            encounter_id: None,
            invoice_number: "INV-2024-002".into(),
            items: vec![InvoiceItem {
                code: "99395".into(),
                description: "Annual physical exam".into(),
                quantity: 1,
                unit_price: money(20000),
                total: money(20000),
            }],
            subtotal: money(20000),
            tax: money(1600),
            discount: money(2000),
            total: money(19600),
            status: InvoiceStatus::Paid,
            payments: vec![Payment {
                id: "pay1".into(),
                amount: money(19600),
                method: PaymentMethod::Card,
                date: at(2024, 12, 26, 14, 0),
                reference: Some("CC-789123".into()),
            }],
            due_date: at(2025, 1, 25, 0, 0),
            created_at: at(2024, 12, 26, 13, 0),
            updated_at: at(2024, 12, 26, 14, 0),
        },
    ]
}

fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "inv_item1".into(),
            sku: "MED001".into(),
            name: "Ibuprofen 200mg".into(),
            description: "Pain reliever and anti-inflammatory".into(),
            category: "Medication".into(),
            quantity_on_hand: 500,
            reorder_level: 100,
            unit_price: money(15),
            batch_info: Some(vec![
                Batch {
                    batch_number: "BATCH001".into(),
                    expiry_date: day(2025, 6, 30),
                    quantity: 300,
                },
                Batch {
                    batch_number: "BATCH002".into(),
                    expiry_date: day(2025, 8, 15),
                    quantity: 200,
                },
            ]),
            location: "Pharmacy - A1".into(),
            supplier: "MedSupply Inc.".into(),
            last_restocked: at(2024, 12, 20, 0, 0),
            created_at: at(2024, 1, 15, 0, 0),
            updated_at: at(2024, 12, 20, 0, 0),
        },
        InventoryItem {
            id: "inv_item2".into(),
            sku: "SUP001".into(),
            name: "Disposable Gloves (Box)".into(),
            description: "Latex-free examination gloves, size M".into(),
            category: "Medical Supplies".into(),
            quantity_on_hand: 50,
            reorder_level: 20,
            unit_price: money(1250),
            batch_info: None,
            location: "Supply Room - B2".into(),
            supplier: "Medical Supply Co.".into(),
            last_restocked: at(2024, 12, 15, 0, 0),
            created_at: at(2024, 1, 15, 0, 0),
            updated_at: at(2024, 12, 15, 0, 0),
        },
        InventoryItem {
            id: "inv_item3".into(),
            sku: "EQP001".into(),
            name: "Digital Thermometer".into(),
            description: "Non-contact infrared thermometer".into(),
            category: "Equipment".into(),
            quantity_on_hand: 15,
            reorder_level: 5,
            unit_price: money(4599),
            batch_info: None,
            location: "Equipment Room - C1".into(),
            supplier: "MedTech Solutions".into(),
            last_restocked: at(2024, 12, 10, 0, 0),
            created_at: at(2024, 1, 15, 0, 0),
            updated_at: at(2024, 12, 10, 0, 0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_totals_are_consistent() {
        for invoice in clinic_dataset().invoices {
            assert_eq!(
                invoice.total,
                invoice.subtotal + invoice.tax - invoice.discount,
                "{}",
                invoice.invoice_number
            );
        }
    }

    #[test]
    fn references_resolve() {
        let data = clinic_dataset();
        for appointment in &data.appointments {
            assert!(data.patient(&appointment.patient_id).is_some());
        }
        for invoice in &data.invoices {
            assert!(data.patient(&invoice.patient_id).is_some());
        }
    }

    #[test]
    fn paid_invoice_has_no_balance() {
        let data = clinic_dataset();
        let paid = data.invoices.iter().find(|i| i.id == "inv2").unwrap();
        assert_eq!(paid.balance_due(), Decimal::ZERO);
        let sent = data.invoices.iter().find(|i| i.id == "inv1").unwrap();
        assert_eq!(sent.balance_due(), money(18900));
    }
}
