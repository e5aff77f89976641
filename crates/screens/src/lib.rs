//! Screen view-models for the restaurant console: dashboard, orders,
//! reservations, inventory, staff, and analytics. Each screen instantiates
//! the shared `SegmentedView` over its own record shape and ships the
//! sample data the original screens render.

pub mod analytics;
pub mod badge;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod reservations;
pub mod staff;
pub mod theme;

pub use dashboard::DashboardOverview;
