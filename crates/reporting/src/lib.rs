//! Derived-value reporting — the aggregate math and display formatting
//! behind the metric cards, stock bars, and performance rankings.

pub mod aggregate;
pub mod format;
pub mod metrics;

pub use metrics::{ChangeDirection, Metric};
