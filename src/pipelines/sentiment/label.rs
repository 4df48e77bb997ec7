use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound scores at or above this are [`SentimentLabel::Positive`].
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this are [`SentimentLabel::Negative`].
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Three-way sentiment classification of a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Compound score >= 0.05.
    Positive,
    /// Compound score strictly between -0.05 and 0.05.
    Neutral,
    /// Compound score <= -0.05.
    Negative,
}

impl SentimentLabel {
    /// Classify a compound score. Both thresholds are inclusive.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a compound score into a [`SentimentLabel`].
///
/// ```rust
/// use lyric_sentiment::sentiment::{classify, SentimentLabel};
///
/// assert_eq!(classify(0.05), SentimentLabel::Positive);
/// assert_eq!(classify(0.0), SentimentLabel::Neutral);
/// assert_eq!(classify(-0.05), SentimentLabel::Negative);
/// ```
pub fn classify(compound: f64) -> SentimentLabel {
    SentimentLabel::from_compound(compound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(classify(0.05), SentimentLabel::Positive);
        assert_eq!(classify(-0.05), SentimentLabel::Negative);
    }

    #[test]
    fn open_interval_is_neutral() {
        assert_eq!(classify(0.0), SentimentLabel::Neutral);
        assert_eq!(classify(0.0499999), SentimentLabel::Neutral);
        assert_eq!(classify(-0.0499999), SentimentLabel::Neutral);
    }

    #[test]
    fn extremes() {
        assert_eq!(classify(1.0), SentimentLabel::Positive);
        assert_eq!(classify(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn display_matches_as_str() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Negative,
        ] {
            assert_eq!(label.to_string(), label.as_str());
        }
    }
}
