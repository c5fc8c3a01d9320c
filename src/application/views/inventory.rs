use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::{contains_ci, normalize};
use crate::domain::clinic::{ClinicDataset, InventoryItem, StockStatus};

#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    pub search: String,
    /// `None` means every category.
    pub category: Option<String>,
    pub low_stock_only: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryRow {
    pub item: InventoryItem,
    pub stock_status: StockStatus,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryOverview {
    pub items: Vec<InventoryRow>,
    /// Distinct categories in first-seen order.
    pub categories: Vec<String>,
    pub low_stock: Vec<InventoryItem>,
    pub total_value: Decimal,
}

pub fn inventory_overview(data: &ClinicDataset, filter: &InventoryFilter) -> InventoryOverview {
    let needle = normalize(&filter.search);

    let items = data
        .inventory
        .iter()
        .filter(|item| match &needle {
            None => true,
            Some(needle) => {
                contains_ci(&item.name, needle)
                    || contains_ci(&item.sku, needle)
                    || contains_ci(&item.description, needle)
            }
        })
        .filter(|item| {
            filter
                .category
                .as_deref()
                .map_or(true, |category| item.category == category)
        })
        .filter(|item| !filter.low_stock_only || item.needs_reorder())
        .map(|item| InventoryRow {
            item: item.clone(),
            stock_status: item.stock_status(),
        })
        .collect();

    let mut categories: Vec<String> = Vec::new();
    for item in &data.inventory {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }

    InventoryOverview {
        items,
        categories,
        low_stock: low_stock(data).cloned().collect(),
        total_value: data.inventory.iter().map(InventoryItem::stock_value).sum(),
    }
}

pub(crate) fn low_stock(data: &ClinicDataset) -> impl Iterator<Item = &InventoryItem> {
    data.inventory.iter().filter(|item| item.needs_reorder())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clinic_dataset;

    fn skus(overview: &InventoryOverview) -> Vec<&str> {
        overview.items.iter().map(|row| row.item.sku.as_str()).collect()
    }

    #[test]
    fn unfiltered_overview() {
        let data = clinic_dataset();
        let overview = inventory_overview(&data, &InventoryFilter::default());
        assert_eq!(skus(&overview), vec!["MED001", "SUP001", "EQP001"]);
        assert_eq!(
            overview.categories,
            vec!["Medication", "Medical Supplies", "Equipment"]
        );
        assert!(overview.low_stock.is_empty());
        // 500 * 0.15 + 50 * 12.50 + 15 * 45.99
        assert_eq!(overview.total_value, Decimal::new(138985, 2));
    }

    #[test]
    fn search_and_category() {
        let data = clinic_dataset();
        let by_description = InventoryFilter {
            search: "infrared".into(),
            ..Default::default()
        };
        assert_eq!(skus(&inventory_overview(&data, &by_description)), vec!["EQP001"]);

        let by_category = InventoryFilter {
            category: Some("Medication".into()),
            ..Default::default()
        };
        assert_eq!(skus(&inventory_overview(&data, &by_category)), vec!["MED001"]);
    }

    #[test]
    fn low_stock_only() {
        let mut data = clinic_dataset();
        data.inventory[1].quantity_on_hand = 20;
        data.inventory[2].quantity_on_hand = 0;

        let filter = InventoryFilter {
            low_stock_only: true,
            ..Default::default()
        };
        let overview = inventory_overview(&data, &filter);
        assert_eq!(skus(&overview), vec!["SUP001", "EQP001"]);
        assert_eq!(overview.items[0].stock_status, StockStatus::LowStock);
        assert_eq!(overview.items[1].stock_status, StockStatus::OutOfStock);
        assert_eq!(overview.low_stock.len(), 2);
    }
}
