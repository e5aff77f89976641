//! Inventory screen — stock items filtered by category tab, with value
//! totals, low-stock alerts, and stock-level bars.

use serde::{Deserialize, Serialize};

use dineops_core::DineOpsResult;
use dineops_reporting::aggregate;
use dineops_segmentation::{Segment, SegmentSetBuilder, SegmentedView};

use crate::badge::{self, BadgeStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Proteins,
    Vegetables,
    Dairy,
    Pantry,
    Beverages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Critical,
    Low,
    Good,
}

impl StockStatus {
    pub fn as_key(&self) -> &'static str {
        match self {
            StockStatus::Critical => "critical",
            StockStatus::Low => "low",
            StockStatus::Good => "good",
        }
    }

    pub fn badge(&self) -> &'static BadgeStyle {
        badge::stock_badge(self.as_key())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub category: Category,
    pub current_stock: f64,
    pub minimum_stock: f64,
    pub unit: String,
    pub cost_per_unit: f64,
    pub supplier: String,
    pub last_updated: String,
    pub status: StockStatus,
}

impl InventoryItem {
    /// Value on hand at full precision.
    pub fn value(&self) -> f64 {
        self.current_stock * self.cost_per_unit
    }

    /// Stock level against the minimum, unclamped, for the "167%" label.
    pub fn stock_ratio_pct(&self) -> f64 {
        aggregate::stock_ratio_pct(self.current_stock, self.minimum_stock)
    }

    /// Stock level clamped to [0, 100] for the bar width.
    pub fn stock_bar_width_pct(&self) -> f64 {
        aggregate::stock_bar_width_pct(self.current_stock, self.minimum_stock)
    }

    pub fn needs_reorder(&self) -> bool {
        matches!(self.status, StockStatus::Low | StockStatus::Critical)
    }
}

/// The category tabs of the inventory screen.
pub fn category_segments() -> Vec<Segment<InventoryItem>> {
    SegmentSetBuilder::new()
        .all("All Items")
        .segment("proteins", "Proteins", |i: &InventoryItem| {
            i.category == Category::Proteins
        })
        .segment("vegetables", "Vegetables", |i: &InventoryItem| {
            i.category == Category::Vegetables
        })
        .segment("dairy", "Dairy", |i: &InventoryItem| {
            i.category == Category::Dairy
        })
        .segment("pantry", "Pantry", |i: &InventoryItem| {
            i.category == Category::Pantry
        })
        .segment("beverages", "Beverages", |i: &InventoryItem| {
            i.category == Category::Beverages
        })
        .build()
}

pub fn inventory_view(
    items: Vec<InventoryItem>,
) -> DineOpsResult<SegmentedView<InventoryItem>> {
    SegmentedView::new(items, category_segments(), "all")
}

/// Summary card: total value on hand, summed at full precision and
/// displayed as whole dollars.
pub fn total_value(items: &[&InventoryItem]) -> f64 {
    items.iter().map(|i| i.value()).sum()
}

/// Summary card: items at or below reorder level.
pub fn low_stock_count(items: &[&InventoryItem]) -> usize {
    items.iter().filter(|i| i.needs_reorder()).count()
}

pub fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            name: "Chicken Breast".to_string(),
            category: Category::Proteins,
            current_stock: 12.0,
            minimum_stock: 20.0,
            unit: "lbs".to_string(),
            cost_per_unit: 4.50,
            supplier: "Fresh Foods Co".to_string(),
            last_updated: "2 hours ago".to_string(),
            status: StockStatus::Low,
        },
        InventoryItem {
            name: "Salmon Fillet".to_string(),
            category: Category::Proteins,
            current_stock: 25.0,
            minimum_stock: 15.0,
            unit: "lbs".to_string(),
            cost_per_unit: 12.99,
            supplier: "Ocean Fresh".to_string(),
            last_updated: "4 hours ago".to_string(),
            status: StockStatus::Good,
        },
        InventoryItem {
            name: "Tomatoes".to_string(),
            category: Category::Vegetables,
            current_stock: 8.0,
            minimum_stock: 15.0,
            unit: "lbs".to_string(),
            cost_per_unit: 2.49,
            supplier: "Local Farms".to_string(),
            last_updated: "1 hour ago".to_string(),
            status: StockStatus::Low,
        },
        InventoryItem {
            name: "Olive Oil".to_string(),
            category: Category::Pantry,
            current_stock: 2.0,
            minimum_stock: 5.0,
            unit: "bottles".to_string(),
            cost_per_unit: 8.99,
            supplier: "Mediterranean Imports".to_string(),
            last_updated: "6 hours ago".to_string(),
            status: StockStatus::Critical,
        },
        InventoryItem {
            name: "Mozzarella Cheese".to_string(),
            category: Category::Dairy,
            current_stock: 18.0,
            minimum_stock: 10.0,
            unit: "lbs".to_string(),
            cost_per_unit: 6.75,
            supplier: "Dairy Best".to_string(),
            last_updated: "3 hours ago".to_string(),
            status: StockStatus::Good,
        },
        InventoryItem {
            name: "Ground Beef".to_string(),
            category: Category::Proteins,
            current_stock: 35.0,
            minimum_stock: 25.0,
            unit: "lbs".to_string(),
            cost_per_unit: 5.99,
            supplier: "Premium Meats".to_string(),
            last_updated: "5 hours ago".to_string(),
            status: StockStatus::Good,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dineops_reporting::format;
    use dineops_segmentation::AggregateScope;

    #[test]
    fn test_category_counts() {
        let view = inventory_view(sample_inventory()).unwrap();
        assert_eq!(
            view.segment_counts(),
            vec![
                ("all", 6),
                ("proteins", 3),
                ("vegetables", 1),
                ("dairy", 1),
                ("pantry", 1),
                ("beverages", 0),
            ]
        );
    }

    #[test]
    fn test_summary_aggregates() {
        let view = inventory_view(sample_inventory()).unwrap();
        let value = view.aggregate(AggregateScope::All, |items| total_value(items));
        assert_eq!(format::usd_whole(value), "$748");

        let low = view.aggregate(AggregateScope::All, |items| low_stock_count(items));
        assert_eq!(low, 3);
    }

    #[test]
    fn test_summary_independent_of_active_tab() {
        let mut view = inventory_view(sample_inventory()).unwrap();
        view.select_segment("dairy").unwrap();
        // Full-collection scope ignores the active category.
        let low = view.aggregate(AggregateScope::All, |items| low_stock_count(items));
        assert_eq!(low, 3);
        // Active scope sees only dairy.
        let dairy_value = view.aggregate(AggregateScope::Active, |items| total_value(items));
        assert!((dairy_value - 18.0 * 6.75).abs() < 1e-9);
    }

    #[test]
    fn test_stock_ratio_label_and_bar() {
        let salmon = &sample_inventory()[1];
        // 25 against a minimum of 15: label shows 167%, bar caps at 100.
        assert_eq!(format::pct(salmon.stock_ratio_pct()), "167%");
        assert!((salmon.stock_bar_width_pct() - 100.0).abs() < f64::EPSILON);

        let chicken = &sample_inventory()[0];
        assert_eq!(format::pct(chicken.stock_ratio_pct()), "60%");
        assert!((chicken.stock_bar_width_pct() - 60.0).abs() < 0.001);
    }
}
