//! Orders screen — active orders filtered by status tab.

use serde::{Deserialize, Serialize};

use dineops_core::DineOpsResult;
use dineops_reporting::aggregate;
use dineops_segmentation::{Segment, SegmentSetBuilder, SegmentedView};

use crate::badge::{self, BadgeStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_key(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn badge(&self) -> &'static BadgeStyle {
        badge::status_badge(self.as_key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    DineIn,
    Takeout,
    Delivery,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub phone: String,
    pub order_type: OrderType,
    pub table: Option<String>,
    pub address: Option<String>,
    pub items: Vec<LineItem>,
    pub status: OrderStatus,
    pub placed_at: String,
    pub notes: Option<String>,
}

impl Order {
    /// Monetary total: summed at full precision, rounded only at display.
    pub fn total(&self) -> f64 {
        aggregate::items_total(self.items.iter().map(|i| (i.quantity, i.unit_price)))
    }
}

/// The status tabs of the orders screen.
pub fn order_segments() -> Vec<Segment<Order>> {
    SegmentSetBuilder::new()
        .all("All Orders")
        .segment("pending", "Pending", |o: &Order| {
            o.status == OrderStatus::Pending
        })
        .segment("preparing", "Preparing", |o: &Order| {
            o.status == OrderStatus::Preparing
        })
        .segment("ready", "Ready", |o: &Order| o.status == OrderStatus::Ready)
        .build()
}

pub fn orders_view(orders: Vec<Order>) -> DineOpsResult<SegmentedView<Order>> {
    SegmentedView::new(orders, order_segments(), "all")
}

/// The active orders the original screen renders.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "#1247".to_string(),
            customer: "John Smith".to_string(),
            phone: "+1 234-567-8900".to_string(),
            order_type: OrderType::DineIn,
            table: Some("Table 5".to_string()),
            address: None,
            items: vec![
                LineItem::new("Grilled Salmon", 1, 24.99),
                LineItem::new("Caesar Salad", 1, 12.50),
                LineItem::new("Lemon Cake", 1, 8.99),
            ],
            status: OrderStatus::Ready,
            placed_at: "12:34 PM".to_string(),
            notes: Some("Extra lemon on the side".to_string()),
        },
        Order {
            id: "#1246".to_string(),
            customer: "Sarah Johnson".to_string(),
            phone: "+1 234-567-8901".to_string(),
            order_type: OrderType::Takeout,
            table: None,
            address: None,
            items: vec![
                LineItem::new("Margherita Pizza", 2, 16.99),
                LineItem::new("Garlic Bread", 1, 6.99),
            ],
            status: OrderStatus::Preparing,
            placed_at: "12:28 PM".to_string(),
            notes: Some("No olives please".to_string()),
        },
        Order {
            id: "#1245".to_string(),
            customer: "Mike Wilson".to_string(),
            phone: "+1 234-567-8902".to_string(),
            order_type: OrderType::Delivery,
            table: None,
            address: Some("123 Oak Street, Apt 4B".to_string()),
            items: vec![
                LineItem::new("Beef Burger", 1, 14.99),
                LineItem::new("Sweet Potato Fries", 1, 7.99),
                LineItem::new("Chocolate Shake", 1, 5.99),
            ],
            status: OrderStatus::Pending,
            placed_at: "12:25 PM".to_string(),
            notes: Some("Ring doorbell twice".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dineops_reporting::format;

    #[test]
    fn test_sample_segment_counts() {
        let view = orders_view(sample_orders()).unwrap();
        assert_eq!(
            view.segment_counts(),
            vec![("all", 3), ("pending", 1), ("preparing", 1), ("ready", 1)]
        );
    }

    #[test]
    fn test_pending_filter() {
        let mut view = orders_view(sample_orders()).unwrap();
        view.select_segment("pending").unwrap();
        let pending = view.filtered_view();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "#1245");
        assert_eq!(pending[0].customer, "Mike Wilson");
    }

    #[test]
    fn test_order_total_display() {
        let takeout = &sample_orders()[1];
        assert_eq!(takeout.id, "#1246");
        // 2 x 16.99 + 1 x 6.99
        assert_eq!(format::usd(takeout.total()), "$40.97");
    }

    #[test]
    fn test_status_badge_wiring() {
        assert_eq!(OrderStatus::Preparing.badge().label, "Preparing");
        assert_eq!(OrderStatus::Cancelled.badge().label, "Cancelled");
    }
}
