//! Query parameters of the clinic screens

use chrono::NaiveDate;
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

use crate::application::views::InventoryFilter;
use crate::domain::clinic::{AppointmentStatus, InvoiceStatus};

/// `all` and blank select no filter.
fn all_or<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => {
            T::deserialize(IntoDeserializer::<D::Error>::into_deserializer(value)).map(Some)
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring; blank matches everything
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppointmentQuery {
    /// Day to list (`YYYY-MM-DD`, UTC). Defaults to today.
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "all_or")]
    pub status: Option<AppointmentStatus>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InvoiceQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "all_or")]
    pub status: Option<InvoiceStatus>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryQuery {
    #[serde(default)]
    pub search: String,
    pub category: Option<String>,
    #[serde(default)]
    pub low_stock: bool,
}

impl From<InventoryQuery> for InventoryFilter {
    fn from(query: InventoryQuery) -> Self {
        Self {
            search: query.search,
            category: query
                .category
                .filter(|c| !c.trim().is_empty() && c != "all"),
            low_stock_only: query.low_stock,
        }
    }
}
