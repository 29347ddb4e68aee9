use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Digit sequences with optional comma grouping and decimal part.
    /// Currency markers ("$") are skipped rather than matched.
    static ref NUMBER_RE: Regex = Regex::new(r"\d[\d,]*(?:\.\d+)?").unwrap();
}

/// A numeric range extracted from free text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// The "no information" sentinel returned when fewer than two numeric
    /// tokens are found.
    pub const EMPTY: Interval = Interval { min: 0.0, max: 0.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Interval { min, max }
    }

    /// Whether two intervals share at least one point.
    ///
    /// Written against raw min/max: a degenerate interval ("100 - 50")
    /// simply fails most overlap checks instead of being normalized.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.max >= other.min && self.min <= other.max
    }
}

/// Extracts a numeric range from a free-text budget or timeline string.
///
/// The first numeric token becomes `min` and the second `max`, in source
/// order: "100 - 50" yields `{min: 100, max: 50}` untouched. Fewer than two
/// tokens yields the `{0, 0}` sentinel. Never fails.
pub fn parse_interval(text: &str) -> Interval {
    let mut numbers = NUMBER_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().replace(',', "").parse::<f64>().ok());

    match (numbers.next(), numbers.next()) {
        (Some(min), Some(max)) => Interval::new(min, max),
        _ => Interval::EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget_range() {
        let interval = parse_interval("$25,000 - $50,000");
        assert_eq!(interval, Interval::new(25000.0, 50000.0));
    }

    #[test]
    fn test_parse_timeline_range() {
        let interval = parse_interval("3-4 months");
        assert_eq!(interval, Interval::new(3.0, 4.0));
    }

    #[test]
    fn test_parse_no_numbers_returns_sentinel() {
        assert_eq!(parse_interval("no numbers here"), Interval::EMPTY);
        assert_eq!(parse_interval(""), Interval::EMPTY);
    }

    #[test]
    fn test_parse_single_number_returns_sentinel() {
        assert_eq!(parse_interval("around 6 months"), Interval::EMPTY);
    }

    #[test]
    fn test_parse_preserves_source_order() {
        // Descending ranges are kept degenerate, not corrected
        let interval = parse_interval("100 - 50");
        assert_eq!(interval, Interval::new(100.0, 50.0));
    }

    #[test]
    fn test_parse_takes_first_two_tokens() {
        let interval = parse_interval("between 2 and 4, maybe 6 months");
        assert_eq!(interval, Interval::new(2.0, 4.0));
    }

    #[test]
    fn test_parse_decimal_timeline() {
        let interval = parse_interval("2.5 - 3.5 months");
        assert_eq!(interval, Interval::new(2.5, 3.5));
    }

    #[test]
    fn test_overlap() {
        let a = Interval::new(50000.0, 100000.0);
        let b = Interval::new(75000.0, 150000.0);
        let c = Interval::new(500000.0, 1000000.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_sentinel_overlaps_intervals_containing_zero() {
        let from_zero = Interval::new(0.0, 10.0);
        let positive = Interval::new(5.0, 10.0);

        assert!(Interval::EMPTY.overlaps(&from_zero));
        assert!(!Interval::EMPTY.overlaps(&positive));
        assert!(Interval::EMPTY.overlaps(&Interval::EMPTY));
    }
}
