//! Ratio and percentage formatting for stats views

/// `num/den` as a percentage with one decimal, `--` when `den` is zero
pub fn percent(num: u32, den: u32) -> String {
    if den == 0 {
        return "--".to_string();
    }
    format!("{:.1}%", 100.0 * f64::from(num) / f64::from(den))
}

pub fn ratio(num: u32, den: u32) -> String {
    format!("{num}/{den}")
}

/// `num/den (pct)`
pub fn ratio_with_percent(num: u32, den: u32) -> String {
    format!("{} ({})", ratio(num, den), percent(num, den))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_is_dashes() {
        assert_eq!(percent(0, 0), "--");
        assert_eq!(percent(1, 3), "33.3%");
        assert_eq!(ratio_with_percent(3, 4), "3/4 (75.0%)");
    }
}
