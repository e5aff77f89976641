//! Display formatting for monetary amounts and percentages.

/// Dollar amount with cents: `40.97` → `"$40.97"`.
pub fn usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Dollar amount rounded to whole dollars: `747.80` → `"$748"`.
pub fn usd_whole(amount: f64) -> String {
    format!("${}", amount.round() as i64)
}

/// Rounded percentage label: `166.67` → `"167%"`.
pub fn pct(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd() {
        assert_eq!(usd(40.97), "$40.97");
        assert_eq!(usd(5.0), "$5.00");
    }

    #[test]
    fn test_usd_whole() {
        assert_eq!(usd_whole(747.8), "$748");
        assert_eq!(usd_whole(747.2), "$747");
    }

    #[test]
    fn test_pct() {
        assert_eq!(pct(166.666_67), "167%");
        assert_eq!(pct(0.0), "0%");
    }
}
