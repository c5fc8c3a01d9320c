//! Session store: the single "who is signed in" slot
//!
//! Holds at most one identity. Login and logout are the only mutations;
//! each one writes or removes exactly one persisted record.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::domain::{Identity, IdentityDirectory};
use crate::infrastructure::storage::SessionSlot;
use crate::shared::errors::{AuthError, SessionError, StorageError};

/// Key of the persisted identity record.
pub const SESSION_KEY: &str = "hospital_user";

/// Simulated round-trip of the login call.
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(1000);

pub type SharedSessionStore = Arc<SessionStore>;

pub struct SessionStore {
    slot: Arc<dyn SessionSlot>,
    directory: Arc<dyn IdentityDirectory>,
    current: RwLock<Option<Identity>>,
    login_latency: Duration,
}

impl SessionStore {
    /// Empty store; does not look at the slot.
    pub fn new(slot: Arc<dyn SessionSlot>, directory: Arc<dyn IdentityDirectory>) -> Self {
        Self {
            slot,
            directory,
            current: RwLock::new(None),
            login_latency: DEFAULT_LOGIN_LATENCY,
        }
    }

    /// Store seeded from the persisted record, if one is present and
    /// still matches the directory. Anything else is removed.
    pub async fn restore(
        slot: Arc<dyn SessionSlot>,
        directory: Arc<dyn IdentityDirectory>,
    ) -> Self {
        let restored = load_persisted(slot.as_ref(), directory.as_ref()).await;
        if let Some(identity) = &restored {
            info!("Restored session for {} ({})", identity.email, identity.role);
        }
        let store = Self::new(slot, directory);
        *store.current.write() = restored;
        store
    }

    pub fn with_login_latency(mut self, latency: Duration) -> Self {
        self.login_latency = latency;
        self
    }

    /// The signed-in identity, if any.
    pub fn current(&self) -> Option<Identity> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Sign in by email.
    ///
    /// The password is accepted but never checked: the directory is demo
    /// data and carries no credentials. On failure the current identity is
    /// left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, SessionError> {
        if !self.login_latency.is_zero() {
            tokio::time::sleep(self.login_latency).await;
        }

        if !password.is_empty() {
            debug!("Password for {} ignored by the demo directory", email);
        }

        let Some(identity) = self.directory.find_by_email(email).await else {
            warn!("Login rejected: no account for {}", email);
            metrics::counter!("auth_logins_total", "outcome" => "invalid_credentials")
                .increment(1);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !identity.is_active {
            warn!("Login rejected: account {} is disabled", email);
            metrics::counter!("auth_logins_total", "outcome" => "disabled").increment(1);
            return Err(AuthError::AccountDisabled.into());
        }

        let record = serde_json::to_string(&identity).map_err(StorageError::from)?;
        self.slot.set(SESSION_KEY, &record).await?;
        *self.current.write() = Some(identity.clone());

        info!("User {} signed in as {}", identity.email, identity.role);
        metrics::counter!("auth_logins_total", "outcome" => "success").increment(1);
        Ok(identity)
    }

    /// Sign out. Never fails; a persisted record that cannot be removed is
    /// logged and left for the next restore to revalidate.
    pub async fn logout(&self) {
        let previous = self.current.write().take();
        if let Err(e) = self.slot.remove(SESSION_KEY).await {
            warn!("Failed to remove persisted session: {}", e);
        }
        if let Some(identity) = previous {
            info!("User {} signed out", identity.email);
            metrics::counter!("auth_logouts_total").increment(1);
        }
    }
}

async fn load_persisted(
    slot: &dyn SessionSlot,
    directory: &dyn IdentityDirectory,
) -> Option<Identity> {
    let raw = match slot.get(SESSION_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Failed to read persisted session: {}", e);
            return None;
        }
    };

    let reason = match serde_json::from_str::<Identity>(&raw) {
        Err(e) => format!("malformed record: {}", e),
        Ok(stored) => match directory.find_by_email(&stored.email).await {
            None => format!("{} is not in the directory", stored.email),
            Some(live) if live != stored => format!("record for {} is stale", stored.email),
            Some(live) if !live.is_active => format!("account {} is disabled", live.email),
            Some(live) => return Some(live),
        },
    };

    warn!("Discarding persisted session: {}", reason);
    if let Err(e) = slot.remove(SESSION_KEY).await {
        warn!("Failed to remove persisted session: {}", e);
    }
    None
}
