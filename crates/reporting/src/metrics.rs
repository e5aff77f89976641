//! Metric cards — the headline figures rendered at the top of a screen.

use serde::{Deserialize, Serialize};

/// Whether a period-over-period change reads as good, bad, or flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Positive,
    Negative,
    Neutral,
}

/// One metric card: a titled display value with an optional change label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub title: String,
    pub value: String,
    pub change: Option<String>,
    pub direction: ChangeDirection,
}

impl Metric {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: None,
            direction: ChangeDirection::Neutral,
        }
    }

    pub fn with_change(
        mut self,
        change: impl Into<String>,
        direction: ChangeDirection,
    ) -> Self {
        self.change = Some(change.into());
        self.direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_card() {
        let metric = Metric::new("Revenue", "$18,749").with_change("+12.5%", ChangeDirection::Positive);
        assert_eq!(metric.value, "$18,749");
        assert_eq!(metric.change.as_deref(), Some("+12.5%"));
        assert_eq!(metric.direction, ChangeDirection::Positive);
    }
}
