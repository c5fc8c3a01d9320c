use async_trait::async_trait;

use super::Identity;

/// Read-only lookup of the identities allowed to sign in.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Exact, case-sensitive email match.
    async fn find_by_email(&self, email: &str) -> Option<Identity>;

    async fn list(&self) -> Vec<Identity>;
}
