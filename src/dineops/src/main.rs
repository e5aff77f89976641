//! DineOps — restaurant management console.
//!
//! Renders any screen's view-model to stdout, standing in for the mobile
//! presentation layer.

use anyhow::bail;
use clap::Parser;
use tracing::{info, warn};

use dineops_core::AppConfig;
use dineops_reporting::format;
use dineops_screens::{analytics, dashboard, inventory, orders, reservations, staff};
use dineops_segmentation::{AggregateScope, SegmentedView};

#[derive(Parser, Debug)]
#[command(name = "dineops")]
#[command(about = "Restaurant management console")]
#[command(version)]
struct Cli {
    /// Screen to render: dashboard, orders, reservations, inventory,
    /// staff, or analytics (overrides config)
    #[arg(long, env = "DINEOPS__SCREEN")]
    screen: Option<String>,

    /// Filter tab to select on the screen
    #[arg(long)]
    segment: Option<String>,

    /// Emit JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dineops=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    let screen = cli
        .screen
        .unwrap_or_else(|| config.default_screen.clone());
    info!(restaurant = %config.restaurant_name, screen = %screen, "rendering screen");

    match screen.as_str() {
        "dashboard" => render_dashboard(&config, cli.json),
        "orders" => render_orders(cli.segment.as_deref(), cli.json),
        "reservations" => render_reservations(cli.segment.as_deref(), cli.json),
        "inventory" => render_inventory(cli.segment.as_deref(), cli.json),
        "staff" => render_staff(cli.segment.as_deref(), cli.json),
        "analytics" => render_analytics(cli.segment.as_deref(), cli.json),
        other => bail!("unknown screen: {other}"),
    }
}

fn print_tabs<R>(view: &SegmentedView<R>) {
    let tabs: Vec<String> = view
        .segments()
        .zip(view.segment_counts())
        .map(|((key, label), (_, count))| {
            let marker = if key == view.active_segment_key() {
                "*"
            } else {
                " "
            };
            format!("[{marker}] {label} ({count})")
        })
        .collect();
    println!("{}", tabs.join("  "));
}

fn render_dashboard(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let overview = dashboard::overview(
        &orders::sample_orders(),
        &inventory::sample_inventory(),
        18,
        config.tables.total,
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
        return Ok(());
    }

    println!("{} — Dashboard", config.restaurant_name);
    for metric in &overview.metrics {
        match &metric.change {
            Some(change) => println!("  {}: {} ({})", metric.title, metric.value, change),
            None => println!("  {}: {}", metric.title, metric.value),
        }
    }
    println!("Recent Orders:");
    for order in &overview.recent_orders {
        println!(
            "  {} {} • {} items • {} [{}]",
            order.id,
            order.origin,
            order.items,
            order.total,
            order.status.badge().label
        );
    }
    println!("Low Stock:");
    for alert in &overview.low_stock {
        println!(
            "  {} — {} {} remaining (min: {})",
            alert.item, alert.current, alert.unit, alert.minimum
        );
    }
    Ok(())
}

fn render_orders(segment: Option<&str>, json: bool) -> anyhow::Result<()> {
    let mut view = orders::orders_view(orders::sample_orders())?;
    if let Some(key) = segment {
        view.select_segment(key)?;
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&view.filtered_view())?);
        return Ok(());
    }

    println!("Orders — {} active", view.len());
    print_tabs(&view);
    for order in view.filtered_view() {
        println!(
            "{} {} • {} • {} [{}]",
            order.id,
            order.customer,
            order.placed_at,
            format::usd(order.total()),
            order.status.badge().label
        );
        for item in &order.items {
            println!(
                "    {}x {} {}",
                item.quantity,
                item.name,
                format::usd(item.unit_price)
            );
        }
        if let Some(notes) = &order.notes {
            println!("    Notes: {notes}");
        }
    }
    Ok(())
}

fn render_reservations(segment: Option<&str>, json: bool) -> anyhow::Result<()> {
    let tables = reservations::sample_tables();
    let mut view = reservations::reservations_view(reservations::sample_reservations())?;
    if let Some(key) = segment {
        view.select_segment(key)?;
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&view.filtered_view())?);
        return Ok(());
    }

    println!(
        "Table Management — {} tables available",
        reservations::available_tables(&tables)
    );
    for table in &tables {
        println!(
            "  Table {} ({} seats) [{}]",
            table.number,
            table.seats,
            table.status.badge().label
        );
    }
    print_tabs(&view);
    for r in view.filtered_view() {
        let table = r
            .table
            .map(|n| format!("Table {n}"))
            .unwrap_or_else(|| "Unassigned".to_string());
        println!(
            "{} {} • {} • {} guests • {} [{}]",
            r.id,
            r.customer_name,
            r.time,
            r.guests,
            table,
            r.status.badge().label
        );
    }
    Ok(())
}

fn render_inventory(segment: Option<&str>, json: bool) -> anyhow::Result<()> {
    let mut view = inventory::inventory_view(inventory::sample_inventory())?;
    if let Some(key) = segment {
        view.select_segment(key)?;
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&view.filtered_view())?);
        return Ok(());
    }

    let value = view.aggregate(AggregateScope::All, |items| inventory::total_value(items));
    let low = view.aggregate(AggregateScope::All, |items| {
        inventory::low_stock_count(items)
    });
    println!("Inventory — {} items tracked", view.len());
    println!(
        "  Total Value: {}  Low Stock: {}",
        format::usd_whole(value),
        low
    );
    print_tabs(&view);
    for item in view.filtered_view() {
        println!(
            "{} ({}) [{}] — {} {} on hand, min {} • {}",
            item.name,
            item.supplier,
            item.status.badge().label,
            item.current_stock,
            item.unit,
            item.minimum_stock,
            format::pct(item.stock_ratio_pct())
        );
    }
    Ok(())
}

fn render_staff(segment: Option<&str>, json: bool) -> anyhow::Result<()> {
    let mut view = staff::staff_view(staff::sample_staff())?;
    if let Some(key) = segment {
        view.select_segment(key)?;
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&view.filtered_view())?);
        return Ok(());
    }

    let clocked_in = view.aggregate(AggregateScope::All, |s| staff::clocked_in_count(s));
    println!("Staff — {} clocked in", clocked_in);
    print_tabs(&view);
    match view.active_segment_key() {
        "performance" => {
            for row in staff::sample_performance() {
                println!(
                    "  {} ★ {} — {} orders, avg {}",
                    row.name, row.rating, row.orders_completed, row.avg_time
                );
            }
        }
        "timecard" => {
            for member in view.filtered_view() {
                let clock = member
                    .clock_in_time
                    .as_deref()
                    .unwrap_or("not clocked in");
                println!(
                    "  {} ({}) — {}h this week • {}",
                    member.name, member.role, member.hours_this_week, clock
                );
            }
        }
        _ => {
            for slot in staff::sample_schedule() {
                println!("  {} — {}", slot.time, slot.staff.join(", "));
            }
        }
    }
    Ok(())
}

fn render_analytics(segment: Option<&str>, json: bool) -> anyhow::Result<()> {
    let mut view = analytics::analytics_view(analytics::sample_summaries())?;
    if let Some(key) = segment {
        view.select_segment(key)?;
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&view.filtered_view())?);
        return Ok(());
    }

    println!("Analytics — business insights");
    print_tabs(&view);
    for summary in view.filtered_view() {
        println!(
            "  Revenue {} ({})  Orders {} ({})  Avg {} ({})  Customers {} ({})",
            format::usd_whole(summary.revenue),
            summary.revenue_change,
            summary.orders,
            summary.order_change,
            format::usd(summary.avg_order),
            summary.avg_change,
            summary.customers,
            summary.customer_change
        );
    }

    let dishes = analytics::sample_dishes();
    let widths = analytics::dish_bar_widths(&dishes);
    println!("Top Performing Dishes:");
    for (dish, width) in dishes.iter().zip(widths) {
        println!(
            "  {} — {} orders • {} • bar {}%  share {}%",
            dish.name,
            dish.orders,
            format::usd_whole(dish.revenue),
            width,
            dish.menu_share_pct
        );
    }

    let hourly = analytics::sample_hourly();
    if let Some(peak) = analytics::peak_hour(&hourly) {
        println!("Peak Hour: {peak}");
    }
    for insight in analytics::customer_insights() {
        println!(
            "  {}: {} ({})",
            insight.title,
            insight.value,
            insight.change.as_deref().unwrap_or("—")
        );
    }
    Ok(())
}
