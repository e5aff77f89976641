//! Core segmented view — evaluates record membership per tab selection.

use dineops_core::{DineOpsError, DineOpsResult};
use tracing::debug;

/// A named subset selector over a record collection: one filter tab.
pub struct Segment<R> {
    key: String,
    label: String,
    predicate: Box<dyn Fn(&R) -> bool + Send + Sync>,
}

impl<R> Segment<R> {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        predicate: impl Fn(&R) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            predicate: Box::new(predicate),
        }
    }

    /// An always-true segment, the conventional "all" tab.
    pub fn catch_all(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, |_| true)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn matches(&self, record: &R) -> bool {
        (self.predicate)(record)
    }
}

impl<R> std::fmt::Debug for Segment<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segment")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish()
    }
}

/// Which record set an aggregate runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateScope {
    /// The active segment's filtered view.
    Active,
    /// The full collection, regardless of the active segment.
    All,
}

/// A filtered, categorized view of a record collection driven by a selected
/// tab key. Holds no state beyond the active segment; filtered output and
/// aggregates are recomputed from the collection on every query.
pub struct SegmentedView<R> {
    records: Vec<R>,
    segments: Vec<Segment<R>>,
    active_idx: usize,
}

impl<R> SegmentedView<R> {
    /// Build a view over `records` with the given segments, starting on
    /// `default_key`. Rejects a default key that is not configured.
    pub fn new(
        records: Vec<R>,
        segments: Vec<Segment<R>>,
        default_key: &str,
    ) -> DineOpsResult<Self> {
        let active_idx = segments
            .iter()
            .position(|s| s.key == default_key)
            .ok_or_else(|| DineOpsError::UnknownSegment(default_key.to_string()))?;
        Ok(Self {
            records,
            segments,
            active_idx,
        })
    }

    /// Switch the active tab. Subsequent `filtered_view` calls reflect the
    /// new segment.
    pub fn select_segment(&mut self, key: &str) -> DineOpsResult<()> {
        let idx = self
            .segments
            .iter()
            .position(|s| s.key == key)
            .ok_or_else(|| DineOpsError::UnknownSegment(key.to_string()))?;
        debug!(segment = key, "segment selected");
        self.active_idx = idx;
        Ok(())
    }

    pub fn active_segment_key(&self) -> &str {
        &self.segments[self.active_idx].key
    }

    pub fn active_segment_label(&self) -> &str {
        &self.segments[self.active_idx].label
    }

    /// Records matching the active segment, in original collection order.
    pub fn filtered_view(&self) -> Vec<&R> {
        let segment = &self.segments[self.active_idx];
        self.records.iter().filter(|r| segment.matches(r)).collect()
    }

    /// Per-segment counts over the FULL collection, in configuration order.
    /// Badge counts stay independent of which tab is active.
    pub fn segment_counts(&self) -> Vec<(&str, usize)> {
        self.segments
            .iter()
            .map(|s| {
                let count = self.records.iter().filter(|r| s.matches(r)).count();
                (s.key.as_str(), count)
            })
            .collect()
    }

    pub fn count_for(&self, key: &str) -> Option<usize> {
        self.segments
            .iter()
            .find(|s| s.key == key)
            .map(|s| self.records.iter().filter(|r| s.matches(r)).count())
    }

    /// Apply `compute` to the active filtered view or the full collection.
    /// Pure: mutates neither the collection nor the selection.
    pub fn aggregate<T>(&self, scope: AggregateScope, compute: impl Fn(&[&R]) -> T) -> T {
        match scope {
            AggregateScope::Active => compute(&self.filtered_view()),
            AggregateScope::All => compute(&self.records.iter().collect::<Vec<_>>()),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Key/label pairs for tab rendering, in configuration order.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.segments
            .iter()
            .map(|s| (s.key.as_str(), s.label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
