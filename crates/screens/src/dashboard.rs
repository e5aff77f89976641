//! Dashboard screen — today's headline metrics, recent orders, and
//! low-stock alerts, assembled from the orders and inventory data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dineops_reporting::{format, ChangeDirection, Metric};

use crate::inventory::InventoryItem;
use crate::orders::{Order, OrderStatus, OrderType};

/// A condensed order row for the recent-orders card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: String,
    pub origin: String,
    pub items: usize,
    pub total: String,
    pub status: OrderStatus,
    pub placed_at: String,
}

/// An inventory item that has fallen below its minimum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub item: String,
    pub current: f64,
    pub minimum: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub metrics: Vec<Metric>,
    pub recent_orders: Vec<RecentOrder>,
    pub low_stock: Vec<LowStockAlert>,
    pub generated_at: DateTime<Utc>,
}

/// Build the dashboard from the current orders and inventory. Recomputed
/// on every call; nothing here is cached.
pub fn overview(
    orders: &[Order],
    inventory: &[InventoryItem],
    tables_occupied: u32,
    tables_total: u32,
) -> DashboardOverview {
    let revenue: f64 = orders.iter().map(|o| o.total()).sum();
    let occupancy_pct = if tables_total > 0 {
        f64::from(tables_occupied) / f64::from(tables_total) * 100.0
    } else {
        0.0
    };

    let metrics = vec![
        Metric::new("Daily Revenue", format::usd(revenue)),
        Metric::new("Orders", orders.len().to_string()),
        Metric::new(
            "Tables Occupied",
            format!("{tables_occupied}/{tables_total}"),
        )
        .with_change(format::pct(occupancy_pct), ChangeDirection::Neutral),
    ];

    let recent_orders = orders
        .iter()
        .map(|o| RecentOrder {
            id: o.id.clone(),
            origin: match (&o.order_type, &o.table) {
                (_, Some(table)) => table.clone(),
                (OrderType::Delivery, None) => "Delivery".to_string(),
                (_, None) => "Online".to_string(),
            },
            items: o.items.len(),
            total: format::usd(o.total()),
            status: o.status,
            placed_at: o.placed_at.clone(),
        })
        .collect();

    let low_stock = inventory
        .iter()
        .filter(|i| i.current_stock < i.minimum_stock)
        .map(|i| LowStockAlert {
            item: i.name.clone(),
            current: i.current_stock,
            minimum: i.minimum_stock,
            unit: i.unit.clone(),
        })
        .collect();

    DashboardOverview {
        metrics,
        recent_orders,
        low_stock,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::sample_inventory;
    use crate::orders::sample_orders;

    #[test]
    fn test_overview_metrics() {
        let overview = overview(&sample_orders(), &sample_inventory(), 18, 24);
        assert_eq!(overview.metrics[1].value, "3");
        assert_eq!(overview.metrics[2].value, "18/24");
        assert_eq!(overview.metrics[2].change.as_deref(), Some("75%"));
        // 46.48 + 40.97 + 28.97
        assert_eq!(overview.metrics[0].value, "$116.42");
    }

    #[test]
    fn test_low_stock_alerts() {
        let overview = overview(&sample_orders(), &sample_inventory(), 18, 24);
        let names: Vec<&str> = overview.low_stock.iter().map(|a| a.item.as_str()).collect();
        assert_eq!(names, vec!["Chicken Breast", "Tomatoes", "Olive Oil"]);
    }

    #[test]
    fn test_recent_order_origins() {
        let overview = overview(&sample_orders(), &sample_inventory(), 0, 24);
        assert_eq!(overview.recent_orders[0].origin, "Table 5");
        assert_eq!(overview.recent_orders[1].origin, "Online");
        assert_eq!(overview.recent_orders[2].origin, "Delivery");
        assert_eq!(overview.recent_orders[1].total, "$40.97");
    }

    #[test]
    fn test_zero_tables_guard() {
        let overview = overview(&[], &[], 0, 0);
        assert_eq!(overview.metrics[2].change.as_deref(), Some("0%"));
    }
}
