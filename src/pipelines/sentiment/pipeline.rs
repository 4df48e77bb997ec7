use super::chunker::chunk_words;
use super::label::SentimentLabel;
use crate::error::{PipelineError, Result};
use crate::models::{PolarityModel, PolarityScores};
use crate::pipelines::stats::PipelineStats;
use serde::Serialize;

// ============ Output types ============

/// Sentiment progression of one text.
///
/// Always holds at least one chunk. Blank input produces no result at all
/// rather than an empty one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    chunks: Vec<String>,
    chunk_scores: Vec<PolarityScores>,
    average_compound: f64,
}

impl AnalysisResult {
    /// Pairs chunks with their scores. `None` if either is empty or the
    /// lengths differ.
    pub(crate) fn from_scored(
        chunks: Vec<String>,
        chunk_scores: Vec<PolarityScores>,
    ) -> Option<Self> {
        if chunks.is_empty() || chunks.len() != chunk_scores.len() {
            return None;
        }
        // Unweighted: a short final chunk counts as much as a full one.
        let total: f64 = chunk_scores.iter().map(|s| s.compound).sum();
        let average_compound = total / chunk_scores.len() as f64;
        Some(Self {
            chunks,
            chunk_scores,
            average_compound,
        })
    }

    /// Chunk texts in textual order.
    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    /// Scores for each chunk, index-aligned with [`Self::chunks`].
    pub fn chunk_scores(&self) -> &[PolarityScores] {
        &self.chunk_scores
    }

    /// Mean of the per-chunk compound scores.
    pub fn average_compound(&self) -> f64 {
        self.average_compound
    }

    /// Number of chunks (at least 1).
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Label for the average compound score.
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_compound(self.average_compound)
    }

    /// Per-chunk compound scores in order.
    pub fn compounds(&self) -> impl Iterator<Item = f64> + '_ {
        self.chunk_scores.iter().map(|s| s.compound)
    }

    /// `(chunk, scores)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PolarityScores)> + '_ {
        self.chunks
            .iter()
            .map(String::as_str)
            .zip(self.chunk_scores.iter())
    }
}

/// Single result in batch output.
#[derive(Debug)]
pub struct BatchResult {
    /// Input text.
    pub text: String,
    /// Analysis, `None` for blank text, or the error for this input.
    pub analysis: Result<Option<AnalysisResult>>,
}

/// Batch output from [`ProgressionPipeline::analyze_batch`].
#[derive(Debug)]
pub struct BatchOutput {
    /// Results for each input, in input order.
    pub results: Vec<BatchResult>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

// ============ Pipeline ============

/// Scores text chunk by chunk and averages the result.
///
/// Construct with [`ProgressionPipelineBuilder`](super::ProgressionPipelineBuilder).
/// The pipeline holds no mutable state, so one instance can serve concurrent
/// callers whenever the model is `Sync`.
///
/// # Examples
///
/// ```rust
/// # use lyric_sentiment::sentiment::{ProgressionPipelineBuilder, SentimentLabel};
/// # fn main() -> lyric_sentiment::error::Result<()> {
/// let pipeline = ProgressionPipelineBuilder::vader().build()?;
///
/// let result = pipeline.analyze("sunshine and rainbows make me so happy")?;
/// if let Some(result) = result {
///     println!("{} over {} chunk(s)", result.label(), result.chunk_count());
/// }
///
/// // Blank text has nothing to analyze.
/// assert!(pipeline.analyze("   ")?.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProgressionPipeline<M: PolarityModel> {
    pub(crate) model: M,
    pub(crate) chunk_size: usize,
}

impl<M: PolarityModel> ProgressionPipeline<M> {
    /// Analyze `text` with the configured chunk size.
    ///
    /// Returns `Ok(None)` for empty or whitespace-only text.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Scoring`] if the model fails on any chunk;
    /// nothing is returned for the chunks that did score.
    pub fn analyze(&self, text: &str) -> Result<Option<AnalysisResult>> {
        self.analyze_with_chunk_size(text, self.chunk_size)
    }

    /// Like [`Self::analyze`], treating `None` as absent input.
    pub fn analyze_opt(&self, text: Option<&str>) -> Result<Option<AnalysisResult>> {
        match text {
            Some(text) => self.analyze(text),
            None => Ok(None),
        }
    }

    /// Analyze `text` with a one-off chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] when `chunk_size` is zero.
    pub fn analyze_with_chunk_size(
        &self,
        text: &str,
        chunk_size: usize,
    ) -> Result<Option<AnalysisResult>> {
        let chunks = chunk_words(text, chunk_size)?;
        if chunks.is_empty() {
            tracing::debug!("blank input, nothing to analyze");
            return Ok(None);
        }

        let scores = self
            .model
            .polarity_scores_batch(&chunks.iter().map(String::as_str).collect::<Vec<_>>())
            .and_then(|scores| {
                scores
                    .into_iter()
                    .map(PolarityScores::validate)
                    .collect::<Result<Vec<_>>>()
            })
            .map_err(|e| {
                tracing::warn!(error = %e, chunks = chunks.len(), "polarity scoring failed");
                e
            })?;

        let result = AnalysisResult::from_scored(chunks, scores).ok_or_else(|| {
            PipelineError::Unexpected("polarity model returned the wrong number of scores".into())
        })?;

        tracing::debug!(
            chunks = result.chunk_count(),
            chunk_size,
            average = result.average_compound(),
            "analyzed text"
        );
        Ok(Some(result))
    }

    /// Analyze several texts. Each text succeeds or fails on its own.
    pub fn analyze_batch(&self, texts: &[&str]) -> BatchOutput {
        let mut stats = PipelineStats::start();

        let results = texts
            .iter()
            .map(|text| {
                let analysis = self.analyze(text);
                if let Ok(Some(result)) = &analysis {
                    stats.record_chunks(result.chunk_count());
                }
                BatchResult {
                    text: text.to_string(),
                    analysis,
                }
            })
            .collect();

        BatchOutput {
            results,
            stats: stats.finish(texts.len()),
        }
    }

    /// Words per chunk used by [`Self::analyze`].
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The polarity model scoring each chunk.
    pub fn model(&self) -> &M {
        &self.model
    }
}
