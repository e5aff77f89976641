//! Segmented collection views — the filter-tab view-model shared by every
//! screen: named predicate segments over an ordered record collection, with
//! per-segment badge counts and on-demand aggregates.

pub mod builder;
pub mod view;

pub use builder::SegmentSetBuilder;
pub use view::{AggregateScope, Segment, SegmentedView};
