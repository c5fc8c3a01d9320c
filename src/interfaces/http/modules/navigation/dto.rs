use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CapabilityEntry, Destination, Icon, Identity};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NavigationQuery {
    /// Requested destination key, e.g. `billing`
    pub active: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NavItem {
    pub key: Destination,
    pub label: String,
    pub icon: Icon,
}

impl From<CapabilityEntry> for NavItem {
    fn from(entry: CapabilityEntry) -> Self {
        Self {
            key: entry.destination,
            label: entry.label.to_string(),
            icon: entry.icon,
        }
    }
}

/// Everything the page shell needs to draw the header and sidebar.
#[derive(Debug, Serialize, ToSchema)]
pub struct NavigationResponse {
    pub portal_title: String,
    pub user: Option<Identity>,
    pub initials: Option<String>,
    pub items: Vec<NavItem>,
    /// The screen actually shown after fallback
    pub active: Destination,
}
