//! Pure aggregate math over record collections.
//!
//! Every ratio guards its denominator and yields 0 for an empty or all-zero
//! input instead of propagating a division error.

/// Rounded percentage of each value relative to the set's maximum, for
/// ranked-list bars. All zeros when the set is empty or its max is not
/// positive.
pub fn percent_of_max(values: &[f64]) -> Vec<u8> {
    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    values
        .iter()
        .map(|v| share_of_max(*v, max).round() as u8)
        .collect()
}

/// Unrounded share of `max` in percent, 0.0 when `max` is not positive.
pub fn share_of_max(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max * 100.0
    } else {
        0.0
    }
}

/// Stock level relative to the minimum required, in percent, UNCLAMPED:
/// 25 on hand against a minimum of 15 reads 166.67.
pub fn stock_ratio_pct(current: f64, minimum: f64) -> f64 {
    if minimum > 0.0 {
        current / minimum * 100.0
    } else {
        0.0
    }
}

/// The same stock ratio clamped to [0, 100] for bar-width rendering.
/// Distinct from `stock_ratio_pct` on purpose: the label next to the bar
/// shows the unclamped value.
pub fn stock_bar_width_pct(current: f64, minimum: f64) -> f64 {
    stock_ratio_pct(current, minimum).clamp(0.0, 100.0)
}

/// One line's monetary value at full precision.
pub fn line_total(quantity: u32, unit_price: f64) -> f64 {
    f64::from(quantity) * unit_price
}

/// Weighted monetary total over (quantity, unit price) pairs. Summed at
/// full precision; rounding happens only at display time (sum-then-round).
pub fn items_total(items: impl IntoIterator<Item = (u32, f64)>) -> f64 {
    items
        .into_iter()
        .map(|(quantity, unit_price)| line_total(quantity, unit_price))
        .sum()
}

/// Round to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_max_ranking() {
        let percentages = percent_of_max(&[45.0, 38.0, 32.0, 28.0, 24.0]);
        assert_eq!(percentages, vec![100, 84, 71, 62, 53]);
    }

    #[test]
    fn test_percent_of_max_zero_guard() {
        assert_eq!(percent_of_max(&[0.0, 0.0, 0.0]), vec![0, 0, 0]);
        assert!(percent_of_max(&[]).is_empty());
    }

    #[test]
    fn test_stock_ratio_unclamped_vs_clamped() {
        let ratio = stock_ratio_pct(25.0, 15.0);
        assert!((ratio - 166.666_67).abs() < 0.01);
        assert_eq!(ratio.round() as i64, 167);

        assert!((stock_bar_width_pct(25.0, 15.0) - 100.0).abs() < f64::EPSILON);
        assert!((stock_bar_width_pct(12.0, 20.0) - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_stock_ratio_zero_minimum() {
        assert_eq!(stock_ratio_pct(10.0, 0.0), 0.0);
        assert_eq!(stock_bar_width_pct(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_items_total_sums_before_rounding() {
        // 2 x 16.99 + 1 x 6.99 = 40.97
        let total = items_total([(2, 16.99), (1, 6.99)]);
        assert!((round2(total) - 40.97).abs() < f64::EPSILON);
    }

    #[test]
    fn test_items_total_full_precision() {
        // Per-line rounding would drift; the raw sum must not.
        let total = items_total([(3, 0.333), (3, 0.333)]);
        assert!((total - 1.998).abs() < 1e-9);
    }
}
