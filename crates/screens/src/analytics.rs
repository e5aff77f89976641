//! Analytics screen — sales summaries by period tab, ranked dish bars,
//! hourly order chart, and customer insight cards.

use serde::{Deserialize, Serialize};

use dineops_core::DineOpsResult;
use dineops_reporting::aggregate;
use dineops_reporting::{ChangeDirection, Metric};
use dineops_segmentation::{Segment, SegmentedView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Today,
    Week,
    Month,
    Year,
}

impl Period {
    pub fn as_key(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::Week => "This Week",
            Period::Month => "This Month",
            Period::Year => "This Year",
        }
    }
}

/// Headline sales figures for one reporting period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    pub period: Period,
    pub revenue: f64,
    pub revenue_change: String,
    pub orders: u32,
    pub order_change: String,
    pub avg_order: f64,
    pub avg_change: String,
    pub customers: u32,
    pub customer_change: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySample {
    pub hour: String,
    pub orders: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishPerformance {
    pub name: String,
    pub orders: u32,
    pub revenue: f64,
    /// Share of all menu orders, as the source reports it.
    pub menu_share_pct: u8,
}

/// Period tabs. No catch-all here: each tab selects one period's summary.
pub fn period_segments() -> Vec<Segment<SalesSummary>> {
    [Period::Today, Period::Week, Period::Month, Period::Year]
        .into_iter()
        .map(|period| {
            Segment::new(period.as_key(), period.label(), move |s: &SalesSummary| {
                s.period == period
            })
        })
        .collect()
}

pub fn analytics_view(
    summaries: Vec<SalesSummary>,
) -> DineOpsResult<SegmentedView<SalesSummary>> {
    SegmentedView::new(summaries, period_segments(), "week")
}

/// Bar widths for the ranked dish list, relative to the busiest dish.
pub fn dish_bar_widths(dishes: &[DishPerformance]) -> Vec<u8> {
    let orders: Vec<f64> = dishes.iter().map(|d| f64::from(d.orders)).collect();
    aggregate::percent_of_max(&orders)
}

/// Bar heights for the hourly chart, relative to the busiest hour.
pub fn hourly_bar_heights(samples: &[HourlySample]) -> Vec<u8> {
    let orders: Vec<f64> = samples.iter().map(|s| f64::from(s.orders)).collect();
    aggregate::percent_of_max(&orders)
}

/// The hour with the most orders.
pub fn peak_hour(samples: &[HourlySample]) -> Option<&str> {
    samples
        .iter()
        .max_by_key(|s| s.orders)
        .map(|s| s.hour.as_str())
}

/// Only the current week has sample figures, as in the original screen.
pub fn sample_summaries() -> Vec<SalesSummary> {
    vec![SalesSummary {
        period: Period::Week,
        revenue: 18_749.0,
        revenue_change: "+12.5%".to_string(),
        orders: 324,
        order_change: "+18".to_string(),
        avg_order: 57.87,
        avg_change: "+$3.42".to_string(),
        customers: 287,
        customer_change: "+23".to_string(),
    }]
}

pub fn sample_hourly() -> Vec<HourlySample> {
    let rows = [
        ("11 AM", 8, 456.0),
        ("12 PM", 15, 875.0),
        ("1 PM", 22, 1240.0),
        ("2 PM", 18, 1020.0),
        ("3 PM", 12, 680.0),
        ("4 PM", 9, 510.0),
        ("5 PM", 16, 920.0),
        ("6 PM", 25, 1450.0),
        ("7 PM", 30, 1750.0),
        ("8 PM", 28, 1620.0),
        ("9 PM", 20, 1150.0),
        ("10 PM", 14, 820.0),
    ];
    rows.into_iter()
        .map(|(hour, orders, revenue)| HourlySample {
            hour: hour.to_string(),
            orders,
            revenue,
        })
        .collect()
}

pub fn sample_dishes() -> Vec<DishPerformance> {
    let rows = [
        ("Grilled Salmon", 45, 1125.0, 18),
        ("Margherita Pizza", 38, 646.0, 15),
        ("Caesar Salad", 32, 400.0, 12),
        ("Beef Burger", 28, 420.0, 10),
        ("Chicken Parmesan", 24, 480.0, 9),
    ];
    rows.into_iter()
        .map(|(name, orders, revenue, menu_share_pct)| DishPerformance {
            name: name.to_string(),
            orders,
            revenue,
            menu_share_pct,
        })
        .collect()
}

pub fn customer_insights() -> Vec<Metric> {
    vec![
        Metric::new("New Customers", "23").with_change("+15%", ChangeDirection::Positive),
        Metric::new("Returning Customers", "264").with_change("+8%", ChangeDirection::Positive),
        Metric::new("Average Rating", "4.8").with_change("+0.2", ChangeDirection::Positive),
        Metric::new("Customer Satisfaction", "94%").with_change("+3%", ChangeDirection::Positive),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_tab_selects_week_summary() {
        let view = analytics_view(sample_summaries()).unwrap();
        assert_eq!(view.active_segment_key(), "week");
        let active = view.filtered_view();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].orders, 324);
    }

    #[test]
    fn test_empty_periods_filter_to_nothing() {
        let mut view = analytics_view(sample_summaries()).unwrap();
        view.select_segment("month").unwrap();
        assert!(view.filtered_view().is_empty());
        assert_eq!(
            view.segment_counts(),
            vec![("today", 0), ("week", 1), ("month", 0), ("year", 0)]
        );
    }

    #[test]
    fn test_dish_bars_percent_of_max() {
        let widths = dish_bar_widths(&sample_dishes());
        assert_eq!(widths, vec![100, 84, 71, 62, 53]);
    }

    #[test]
    fn test_hourly_peak() {
        let samples = sample_hourly();
        assert_eq!(peak_hour(&samples), Some("7 PM"));
        let heights = hourly_bar_heights(&samples);
        assert_eq!(heights[8], 100);
        assert_eq!(heights.len(), 12);
    }

    #[test]
    fn test_peak_hour_empty() {
        assert_eq!(peak_hour(&[]), None);
        assert!(hourly_bar_heights(&[]).is_empty());
    }
}
