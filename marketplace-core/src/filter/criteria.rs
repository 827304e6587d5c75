use std::str::FromStr;

use super::FilterError;

/// Parsed `budgetRange` token: `"{min}-{max}"` or `"{min}+"` (no upper bound)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl BudgetRange {
    /// Compares the project's own bounds against the range's bounds: the
    /// project minimum must reach the range minimum and the project maximum
    /// must stay within the range maximum. This is not an overlap test; a
    /// project straddling the range edge is excluded and the browse page
    /// has always behaved this way.
    pub fn admits(&self, budget_min: u64, budget_max: u64) -> bool {
        budget_min >= self.min && self.max.map_or(true, |max| budget_max <= max)
    }
}

impl FromStr for BudgetRange {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let malformed = || FilterError::MalformedBudgetRange(s.to_string());

        if let Some(min) = token.strip_suffix('+') {
            let min = min.trim().parse().map_err(|_| malformed())?;
            return Ok(BudgetRange { min, max: None });
        }

        let (min, max) = token.split_once('-').ok_or_else(malformed)?;
        let min: u64 = min.trim().parse().map_err(|_| malformed())?;
        let max: u64 = max.trim().parse().map_err(|_| malformed())?;

        if min > max {
            return Err(FilterError::InvertedBudgetRange(s.to_string()));
        }

        Ok(BudgetRange {
            min,
            max: Some(max),
        })
    }
}

/// Parsed `clientRating` token such as `"4.5+"`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingThreshold(pub f64);

impl RatingThreshold {
    pub const MAX: f64 = 5.0;

    pub fn admits(&self, rating: f64) -> bool {
        rating >= self.0
    }
}

impl FromStr for RatingThreshold {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || FilterError::MalformedRating(s.to_string());

        let value: f64 = s
            .trim()
            .strip_suffix('+')
            .ok_or_else(malformed)?
            .trim()
            .parse()
            .map_err(|_| malformed())?;

        if !value.is_finite() || !(0.0..=Self::MAX).contains(&value) {
            return Err(malformed());
        }

        Ok(RatingThreshold(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounded_range() {
        let range: BudgetRange = "25000-50000".parse().unwrap();
        assert_eq!(range.min, 25000);
        assert_eq!(range.max, Some(50000));
    }

    #[test]
    fn test_parse_open_range() {
        let range: BudgetRange = "250000+".parse().unwrap();
        assert_eq!(range.min, 250000);
        assert_eq!(range.max, None);
    }

    #[test]
    fn test_malformed_ranges() {
        for token in ["", "50000", "abc-def", "10k-20k", "-5000", "+", "1-2-3"] {
            assert_eq!(
                token.parse::<BudgetRange>(),
                Err(FilterError::MalformedBudgetRange(token.to_string())),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_inverted_range() {
        assert_eq!(
            "100000-50000".parse::<BudgetRange>(),
            Err(FilterError::InvertedBudgetRange("100000-50000".to_string()))
        );
    }

    #[test]
    fn test_admits_compares_bounds_not_overlap() {
        let range: BudgetRange = "50000-100000".parse().unwrap();
        assert!(range.admits(50000, 100000));
        assert!(range.admits(60000, 90000));
        // Overlapping but starting below the range
        assert!(!range.admits(40000, 60000));
        // Overlapping but ending above the range
        assert!(!range.admits(90000, 150000));
        // Inverted project budget still passes both comparisons
        assert!(range.admits(95000, 55000));
    }

    #[test]
    fn test_parse_rating() {
        let threshold: RatingThreshold = "4.5+".parse().unwrap();
        assert!(threshold.admits(4.5));
        assert!(threshold.admits(4.9));
        assert!(!threshold.admits(4.4));

        assert!("4.5".parse::<RatingThreshold>().is_err());
        assert!("five+".parse::<RatingThreshold>().is_err());
        assert!("7+".parse::<RatingThreshold>().is_err());
        assert!("NaN+".parse::<RatingThreshold>().is_err());
    }
}
