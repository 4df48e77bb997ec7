use super::{PolarityModel, PolarityScores};
use crate::error::{PipelineError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use vader_sentiment::SentimentIntensityAnalyzer;

// The VADER lexicon is parsed once per process and only ever read afterwards.
static SHARED_ANALYZER: Lazy<SentimentIntensityAnalyzer<'static>> =
    Lazy::new(|| SentimentIntensityAnalyzer::new());

/// VADER lexicon scorer.
///
/// Every handle points at the same process-wide analyzer, so constructing
/// more than one is free and the lexicon is loaded only on first use.
#[derive(Clone, Copy)]
pub struct VaderModel {
    analyzer: &'static SentimentIntensityAnalyzer<'static>,
}

impl VaderModel {
    /// Returns a handle to the shared analyzer, loading the lexicon if needed.
    pub fn new() -> Self {
        Self {
            analyzer: &SHARED_ANALYZER,
        }
    }
}

impl Default for VaderModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VaderModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderModel").finish_non_exhaustive()
    }
}

impl PolarityModel for VaderModel {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        let raw = self.analyzer.polarity_scores(text);
        Ok(PolarityScores {
            neg: component(&raw, "neg")?,
            neu: component(&raw, "neu")?,
            pos: component(&raw, "pos")?,
            compound: component(&raw, "compound")?,
        })
    }
}

fn component(raw: &HashMap<&str, f64>, key: &str) -> Result<f64> {
    raw.get(key)
        .copied()
        .ok_or_else(|| PipelineError::Scoring(format!("VADER returned no '{key}' score")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_in_range() {
        let model = VaderModel::new();
        for text in ["I love this song", "I hate everything", "the table is brown"] {
            let scores = model.polarity_scores(text).unwrap();
            assert!((-1.0..=1.0).contains(&scores.compound), "{text}: {scores:?}");
            for part in [scores.neg, scores.neu, scores.pos] {
                assert!((0.0..=1.0).contains(&part));
            }
        }
    }

    #[test]
    fn polarity_direction() {
        let model = VaderModel::new();
        assert!(model.polarity_scores("happy").unwrap().compound > 0.05);
        assert!(model.polarity_scores("terrible").unwrap().compound < -0.05);
    }

    #[test]
    fn deterministic_across_handles() {
        let text = "good times never seemed so good";
        let a = VaderModel::new().polarity_scores(text).unwrap();
        let b = VaderModel::default().polarity_scores(text).unwrap();
        assert_eq!(a, b);
    }
}
