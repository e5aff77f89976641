//! Integration test walking every screen's view-model end to end over the
//! bundled sample data: tab counts stay consistent with filtered lengths,
//! and the serialized views round-trip through serde_json.

use dineops_screens::{analytics, dashboard, inventory, orders, reservations, staff};

#[test]
fn test_every_screen_counts_match_filtered_lengths() {
    let mut orders_view = orders::orders_view(orders::sample_orders()).unwrap();
    let mut inventory_view = inventory::inventory_view(inventory::sample_inventory()).unwrap();
    let mut reservations_view =
        reservations::reservations_view(reservations::sample_reservations()).unwrap();
    let mut staff_view = staff::staff_view(staff::sample_staff()).unwrap();
    let mut analytics_view = analytics::analytics_view(analytics::sample_summaries()).unwrap();

    macro_rules! check_counts {
        ($view:expr) => {
            let keys: Vec<String> = $view.segments().map(|(k, _)| k.to_string()).collect();
            for key in keys {
                let expected = $view.count_for(&key).unwrap();
                $view.select_segment(&key).unwrap();
                assert_eq!($view.filtered_view().len(), expected, "segment {key}");
            }
        };
    }

    check_counts!(orders_view);
    check_counts!(inventory_view);
    check_counts!(reservations_view);
    check_counts!(staff_view);
    check_counts!(analytics_view);
}

#[test]
fn test_selection_survives_failed_switch() {
    let mut view = orders::orders_view(orders::sample_orders()).unwrap();
    view.select_segment("ready").unwrap();
    assert!(view.select_segment("delivered").is_err());
    assert_eq!(view.active_segment_key(), "ready");
    assert_eq!(view.filtered_view().len(), 1);
}

#[test]
fn test_filtered_views_serialize() {
    let mut view = orders::orders_view(orders::sample_orders()).unwrap();
    view.select_segment("preparing").unwrap();
    let json = serde_json::to_value(view.filtered_view()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], "#1246");
    assert_eq!(json[0]["status"], "preparing");
}

#[test]
fn test_dashboard_overview_serializes() {
    let overview = dashboard::overview(
        &orders::sample_orders(),
        &inventory::sample_inventory(),
        18,
        24,
    );
    let json = serde_json::to_value(&overview).unwrap();
    assert_eq!(json["low_stock"].as_array().unwrap().len(), 3);
    assert_eq!(json["metrics"][0]["title"], "Daily Revenue");
}
