use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Staff or patient role. The set is closed; navigation and portal titles
/// are derived from it with exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    HospitalAdmin,
    Doctor,
    Nurse,
    Receptionist,
    Cashier,
    LabTech,
    Pharmacist,
    Patient,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::SuperAdmin,
        Role::HospitalAdmin,
        Role::Doctor,
        Role::Nurse,
        Role::Receptionist,
        Role::Cashier,
        Role::LabTech,
        Role::Pharmacist,
        Role::Patient,
    ];

    /// Wire form, as stored in the persisted session record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::HospitalAdmin => "hospital_admin",
            Role::Doctor => "doctor",
            Role::Nurse => "nurse",
            Role::Receptionist => "receptionist",
            Role::Cashier => "cashier",
            Role::LabTech => "lab_tech",
            Role::Pharmacist => "pharmacist",
            Role::Patient => "patient",
        }
    }

    /// Human form shown next to the user's name, e.g. `Hospital Admin`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::HospitalAdmin => "Hospital Admin",
            Role::Doctor => "Doctor",
            Role::Nurse => "Nurse",
            Role::Receptionist => "Receptionist",
            Role::Cashier => "Cashier",
            Role::LabTech => "Lab Tech",
            Role::Pharmacist => "Pharmacist",
            Role::Patient => "Patient",
        }
    }

    /// Heading of the page header for this role.
    pub fn portal_title(&self) -> &'static str {
        match self {
            Role::Doctor => "Doctor Portal",
            Role::Nurse => "Nursing Station",
            Role::Receptionist => "Reception Desk",
            Role::Cashier => "Billing Department",
            Role::HospitalAdmin => "Hospital Administration",
            Role::SuperAdmin | Role::LabTech | Role::Pharmacist | Role::Patient => "Dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown role: {}", s))
    }
}

/// The authenticated user record.
///
/// Field names follow the persisted JSON layout (`hospitalId`, `isActive`,
/// `createdAt`) so a stored session written by an earlier run reads back
/// field-for-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub hospital_id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Avatar initials: the first letter of every word of the name.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_identity() -> Identity {
        Identity {
            id: "3".into(),
            name: "John Smith".into(),
            email: "receptionist@hospital.com".into(),
            role: Role::Receptionist,
            hospital_id: "hosp1".into(),
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn role_parses_its_own_wire_form() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("janitor".parse::<Role>().is_err());
    }

    #[test]
    fn identity_serializes_with_persisted_field_names() {
        let json = serde_json::to_value(sample_identity()).unwrap();
        assert_eq!(json["hospitalId"], "hosp1");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["role"], "receptionist");
        assert_eq!(json["createdAt"], "2024-01-15T00:00:00Z");
    }

    #[test]
    fn identity_reads_back_browser_record() {
        let raw = r#"{"id":"3","name":"John Smith","email":"receptionist@hospital.com",
            "role":"receptionist","hospitalId":"hosp1","isActive":true,
            "createdAt":"2024-01-15T00:00:00Z"}"#;
        let parsed: Identity = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, sample_identity());
    }

    #[test]
    fn portal_titles() {
        assert_eq!(Role::Doctor.portal_title(), "Doctor Portal");
        assert_eq!(Role::HospitalAdmin.portal_title(), "Hospital Administration");
        assert_eq!(Role::Pharmacist.portal_title(), "Dashboard");
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(initials("Dr. Sarah Johnson"), "DSJ");
        assert_eq!(sample_identity().initials(), "JS");
        assert_eq!(initials(""), "");
    }
}
