//! Segment set builder — fluent construction of a screen's filter tabs.

use crate::view::Segment;

/// Builds an ordered segment list the way the screens declare their tabs:
/// usually a leading catch-all followed by predicate tabs.
pub struct SegmentSetBuilder<R> {
    segments: Vec<Segment<R>>,
}

impl<R> SegmentSetBuilder<R> {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Add the conventional always-true "all" tab.
    pub fn all(mut self, label: impl Into<String>) -> Self {
        self.segments.push(Segment::catch_all("all", label));
        self
    }

    pub fn segment(
        mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        predicate: impl Fn(&R) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.segments.push(Segment::new(key, label, predicate));
        self
    }

    /// A tab that switches presentation rather than membership.
    pub fn view_mode(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.segments.push(Segment::catch_all(key, label));
        self
    }

    pub fn build(self) -> Vec<Segment<R>> {
        self.segments
    }
}

impl<R> Default for SegmentSetBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_tab_order() {
        let segments: Vec<Segment<u32>> = SegmentSetBuilder::new()
            .all("All")
            .segment("big", "Big", |n: &u32| *n >= 10)
            .view_mode("chart", "Chart")
            .build();
        let keys: Vec<&str> = segments.iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec!["all", "big", "chart"]);
        assert!(segments[2].matches(&3));
    }
}
