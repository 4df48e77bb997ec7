// ============ Polarity model capability ============

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============ Model implementations ============

pub(crate) mod vader;

pub use vader::VaderModel;

/// Polarity scores for one span of text.
///
/// `neg`, `neu` and `pos` are passed through from the model for reference;
/// only `compound` feeds aggregation and labelling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Proportion of negative tone (0.0 to 1.0).
    pub neg: f64,
    /// Proportion of neutral tone (0.0 to 1.0).
    pub neu: f64,
    /// Proportion of positive tone (0.0 to 1.0).
    pub pos: f64,
    /// Normalized overall polarity (-1.0 to 1.0).
    pub compound: f64,
}

impl PolarityScores {
    /// Scores with only a compound value, the rest zeroed.
    pub fn from_compound(compound: f64) -> Self {
        Self {
            compound,
            ..Self::default()
        }
    }

    /// Rejects a compound score that is NaN or outside `[-1, 1]`.
    pub(crate) fn validate(self) -> Result<Self> {
        if self.compound.is_finite() && (-1.0..=1.0).contains(&self.compound) {
            Ok(self)
        } else {
            Err(PipelineError::Scoring(format!(
                "compound score {} is outside [-1, 1]",
                self.compound
            )))
        }
    }
}

/// A lexicon-based polarity scorer.
///
/// Implementations must be deterministic and free of side effects: the same
/// text always yields the same scores. Implement this to plug a custom model
/// (or a fake one in tests) into
/// [`ProgressionPipelineBuilder::with_model`](crate::sentiment::ProgressionPipelineBuilder::with_model).
pub trait PolarityModel {
    /// Scores a single span of text.
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores>;

    /// Scores several spans in order. Fails as a whole if any span fails.
    fn polarity_scores_batch(&self, texts: &[&str]) -> Result<Vec<PolarityScores>> {
        texts
            .iter()
            .map(|text| self.polarity_scores(text))
            .collect()
    }
}

impl<M: PolarityModel + ?Sized> PolarityModel for &M {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        (**self).polarity_scores(text)
    }
}

impl<M: PolarityModel + ?Sized> PolarityModel for Arc<M> {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        (**self).polarity_scores(text)
    }
}

impl<M: PolarityModel + ?Sized> PolarityModel for Box<M> {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        (**self).polarity_scores(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl PolarityModel for Fixed {
        fn polarity_scores(&self, _text: &str) -> Result<PolarityScores> {
            Ok(PolarityScores::from_compound(self.0))
        }
    }

    #[test]
    fn validate_accepts_bounds() {
        assert!(PolarityScores::from_compound(1.0).validate().is_ok());
        assert!(PolarityScores::from_compound(-1.0).validate().is_ok());
        assert!(PolarityScores::from_compound(0.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(matches!(
            PolarityScores::from_compound(1.5).validate(),
            Err(PipelineError::Scoring(_))
        ));
        assert!(PolarityScores::from_compound(f64::NAN).validate().is_err());
    }

    #[test]
    fn batch_preserves_order_through_smart_pointers() {
        let model: Box<dyn PolarityModel> = Box::new(Fixed(0.25));
        let scores = model.polarity_scores_batch(&["a", "b", "c"]).unwrap();
        assert_eq!(scores.len(), 3);
        assert!(scores.iter().all(|s| s.compound == 0.25));

        let shared = Arc::new(Fixed(-0.5));
        assert_eq!(shared.polarity_scores("x").unwrap().compound, -0.5);
    }
}
