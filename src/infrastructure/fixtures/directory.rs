//! Pre-seeded sign-in directory

use async_trait::async_trait;

use super::at;
use crate::domain::{Identity, IdentityDirectory, Role};

/// Fixed directory of demo staff accounts.
#[derive(Debug, Clone)]
pub struct FixtureDirectory {
    identities: Vec<Identity>,
}

impl FixtureDirectory {
    pub fn new() -> Self {
        Self::from_identities(seed_identities())
    }

    pub fn from_identities(identities: Vec<Identity>) -> Self {
        Self { identities }
    }
}

impl Default for FixtureDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityDirectory for FixtureDirectory {
    async fn find_by_email(&self, email: &str) -> Option<Identity> {
        self.identities.iter().find(|i| i.email == email).cloned()
    }

    async fn list(&self) -> Vec<Identity> {
        self.identities.clone()
    }
}

fn staff(id: &str, name: &str, email: &str, role: Role) -> Identity {
    Identity {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        hospital_id: "hosp1".to_string(),
        is_active: true,
        created_at: at(2024, 1, 15, 0, 0),
    }
}

fn seed_identities() -> Vec<Identity> {
    vec![
        staff("1", "Dr. Sarah Johnson", "doctor@hospital.com", Role::Doctor),
        staff("2", "Mary Wilson", "nurse@hospital.com", Role::Nurse),
        staff("3", "John Smith", "receptionist@hospital.com", Role::Receptionist),
        staff("4", "Emily Davis", "cashier@hospital.com", Role::Cashier),
        staff("5", "Admin User", "admin@hospital.com", Role::HospitalAdmin),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_is_exact() {
        let directory = FixtureDirectory::new();
        let doctor = directory.find_by_email("doctor@hospital.com").await.unwrap();
        assert_eq!(doctor.role, Role::Doctor);
        assert_eq!(doctor.name, "Dr. Sarah Johnson");

        assert!(directory.find_by_email("Doctor@hospital.com").await.is_none());
        assert!(directory.find_by_email("nobody@x.com").await.is_none());
        assert_eq!(directory.list().await.len(), 5);
    }
}
