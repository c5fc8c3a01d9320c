//! Role-to-capability mapping
//!
//! Every role sees the dashboard first, followed by a fixed, ordered list
//! of destinations. The order is the menu order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::identity::{Identity, Role};

/// A navigable screen. Several menu labels may point at the same screen
/// ("Supplies" and "Pharmacy" both open inventory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Dashboard,
    Patients,
    Appointments,
    Encounters,
    Billing,
    Inventory,
    Reports,
    Settings,
}

impl Destination {
    pub fn key(&self) -> &'static str {
        match self {
            Destination::Dashboard => "dashboard",
            Destination::Patients => "patients",
            Destination::Appointments => "appointments",
            Destination::Encounters => "encounters",
            Destination::Billing => "billing",
            Destination::Inventory => "inventory",
            Destination::Reports => "reports",
            Destination::Settings => "settings",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Destination::Dashboard),
            "patients" => Ok(Destination::Patients),
            "appointments" => Ok(Destination::Appointments),
            "encounters" => Ok(Destination::Encounters),
            "billing" => Ok(Destination::Billing),
            "inventory" => Ok(Destination::Inventory),
            "reports" => Ok(Destination::Reports),
            "settings" => Ok(Destination::Settings),
            other => Err(format!("Unknown destination: {}", other)),
        }
    }
}

/// Icon reference understood by the front end's icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[serde(rename = "bar-chart-3")]
    BarChart3,
    Users,
    Calendar,
    FileText,
    DollarSign,
    Package,
    Settings,
    Stethoscope,
    ClipboardList,
    CreditCard,
}

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilityEntry {
    pub destination: Destination,
    pub label: &'static str,
    pub icon: Icon,
}

const fn entry(destination: Destination, label: &'static str, icon: Icon) -> CapabilityEntry {
    CapabilityEntry {
        destination,
        label,
        icon,
    }
}

const DASHBOARD: CapabilityEntry = entry(Destination::Dashboard, "Dashboard", Icon::BarChart3);

const ADMIN: &[CapabilityEntry] = &[
    entry(Destination::Patients, "Patients", Icon::Users),
    entry(Destination::Appointments, "Appointments", Icon::Calendar),
    entry(Destination::Encounters, "Medical Records", Icon::FileText),
    entry(Destination::Billing, "Billing", Icon::DollarSign),
    entry(Destination::Inventory, "Inventory", Icon::Package),
    entry(Destination::Reports, "Reports", Icon::BarChart3),
    entry(Destination::Settings, "Settings", Icon::Settings),
];

const DOCTOR: &[CapabilityEntry] = &[
    entry(Destination::Appointments, "Appointments", Icon::Calendar),
    entry(Destination::Encounters, "Patient Records", Icon::Stethoscope),
    entry(Destination::Patients, "Patients", Icon::Users),
];

const NURSE: &[CapabilityEntry] = &[
    entry(Destination::Appointments, "Appointments", Icon::Calendar),
    entry(Destination::Encounters, "Patient Care", Icon::ClipboardList),
    entry(Destination::Patients, "Patients", Icon::Users),
    entry(Destination::Inventory, "Supplies", Icon::Package),
];

const RECEPTIONIST: &[CapabilityEntry] = &[
    entry(Destination::Appointments, "Appointments", Icon::Calendar),
    entry(Destination::Patients, "Patients", Icon::Users),
    entry(Destination::Billing, "Billing", Icon::DollarSign),
];

const CASHIER: &[CapabilityEntry] = &[
    entry(Destination::Billing, "Billing", Icon::CreditCard),
    entry(Destination::Patients, "Patients", Icon::Users),
    entry(Destination::Reports, "Financial Reports", Icon::BarChart3),
];

const LAB_TECH: &[CapabilityEntry] = &[
    entry(Destination::Patients, "Patients", Icon::Users),
    entry(Destination::Inventory, "Lab Supplies", Icon::Package),
];

const PHARMACIST: &[CapabilityEntry] = &[
    entry(Destination::Inventory, "Pharmacy", Icon::Package),
    entry(Destination::Patients, "Patients", Icon::Users),
];

const PATIENT: &[CapabilityEntry] = &[
    entry(Destination::Appointments, "My Appointments", Icon::Calendar),
    entry(Destination::Encounters, "My Records", Icon::FileText),
    entry(Destination::Billing, "My Bills", Icon::DollarSign),
];

fn role_entries(role: Role) -> &'static [CapabilityEntry] {
    match role {
        Role::SuperAdmin | Role::HospitalAdmin => ADMIN,
        Role::Doctor => DOCTOR,
        Role::Nurse => NURSE,
        Role::Receptionist => RECEPTIONIST,
        Role::Cashier => CASHIER,
        Role::LabTech => LAB_TECH,
        Role::Pharmacist => PHARMACIST,
        Role::Patient => PATIENT,
    }
}

/// Ordered menu for a role, dashboard first.
pub fn capabilities_for(role: Role) -> Vec<CapabilityEntry> {
    let specific = role_entries(role);
    let mut items = Vec::with_capacity(specific.len() + 1);
    items.push(DASHBOARD);
    items.extend_from_slice(specific);
    items
}

/// Menu for whoever is signed in; dashboard only when nobody is.
pub fn navigation_for(identity: Option<&Identity>) -> Vec<CapabilityEntry> {
    match identity {
        Some(identity) => capabilities_for(identity.role),
        None => vec![DASHBOARD],
    }
}

/// The screen a request lands on. Unknown keys and destinations outside
/// the role's menu fall back to the dashboard.
pub fn resolve_destination(role: Role, requested: Option<&str>) -> Destination {
    let Some(requested) = requested else {
        return Destination::Dashboard;
    };
    match requested.parse::<Destination>() {
        Ok(destination)
            if capabilities_for(role)
                .iter()
                .any(|item| item.destination == destination) =>
        {
            destination
        }
        _ => Destination::Dashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Role) -> Vec<&'static str> {
        capabilities_for(role).iter().map(|item| item.label).collect()
    }

    #[test]
    fn every_role_starts_with_dashboard() {
        for role in Role::ALL {
            let items = capabilities_for(role);
            assert!(items.len() > 1, "{} has no role specific entries", role);
            assert_eq!(items[0], DASHBOARD);
        }
    }

    #[test]
    fn menu_order_per_role() {
        let admin = vec![
            "Dashboard",
            "Patients",
            "Appointments",
            "Medical Records",
            "Billing",
            "Inventory",
            "Reports",
            "Settings",
        ];
        assert_eq!(labels(Role::SuperAdmin), admin);
        assert_eq!(labels(Role::HospitalAdmin), admin);
        assert_eq!(
            labels(Role::Doctor),
            vec!["Dashboard", "Appointments", "Patient Records", "Patients"]
        );
        assert_eq!(
            labels(Role::Nurse),
            vec!["Dashboard", "Appointments", "Patient Care", "Patients", "Supplies"]
        );
        assert_eq!(
            labels(Role::Receptionist),
            vec!["Dashboard", "Appointments", "Patients", "Billing"]
        );
        assert_eq!(
            labels(Role::Cashier),
            vec!["Dashboard", "Billing", "Patients", "Financial Reports"]
        );
        assert_eq!(labels(Role::LabTech), vec!["Dashboard", "Patients", "Lab Supplies"]);
        assert_eq!(labels(Role::Pharmacist), vec!["Dashboard", "Pharmacy", "Patients"]);
        assert_eq!(
            labels(Role::Patient),
            vec!["Dashboard", "My Appointments", "My Records", "My Bills"]
        );
    }

    #[test]
    fn aliased_labels_point_at_shared_screens() {
        let pharmacy = capabilities_for(Role::Pharmacist)[1];
        assert_eq!(pharmacy.destination, Destination::Inventory);
        let bills = capabilities_for(Role::Patient)[3];
        assert_eq!(bills.destination, Destination::Billing);
        let reports = capabilities_for(Role::Cashier)[3];
        assert_eq!(reports.destination, Destination::Reports);
        assert_eq!(reports.icon, Icon::BarChart3);
    }

    #[test]
    fn anonymous_navigation_is_dashboard_only() {
        assert_eq!(navigation_for(None), vec![DASHBOARD]);
    }

    #[test]
    fn resolve_falls_back_to_dashboard() {
        assert_eq!(
            resolve_destination(Role::Cashier, Some("billing")),
            Destination::Billing
        );
        assert_eq!(
            resolve_destination(Role::Cashier, Some("inventory")),
            Destination::Dashboard
        );
        assert_eq!(
            resolve_destination(Role::Cashier, Some("nowhere")),
            Destination::Dashboard
        );
        assert_eq!(resolve_destination(Role::Nurse, None), Destination::Dashboard);
    }

    #[test]
    fn icons_serialize_as_kebab_case() {
        assert_eq!(
            serde_json::to_value(Icon::BarChart3).unwrap(),
            serde_json::json!("bar-chart-3")
        );
        assert_eq!(
            serde_json::to_value(Icon::ClipboardList).unwrap(),
            serde_json::json!("clipboard-list")
        );
    }
}
