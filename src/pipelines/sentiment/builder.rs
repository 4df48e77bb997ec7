use super::chunker::{ensure_chunk_size, DEFAULT_CHUNK_SIZE};
use super::pipeline::ProgressionPipeline;
use crate::error::{PipelineError, Result};
use crate::models::{PolarityModel, VaderModel};
use serde::{Deserialize, Serialize};

/// Tunable settings for a [`ProgressionPipeline`].
///
/// Missing fields take their defaults, so hosts can load a partial record:
///
/// ```rust
/// use lyric_sentiment::sentiment::ProgressionOptions;
///
/// # fn main() -> lyric_sentiment::error::Result<()> {
/// let options = ProgressionOptions::from_json(r#"{ "chunk_size": 25 }"#)?;
/// assert_eq!(options.chunk_size, 25);
/// assert_eq!(ProgressionOptions::from_json("{}")?.chunk_size, 10);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionOptions {
    /// Words per chunk. Must be at least 1.
    pub chunk_size: usize,
}

impl Default for ProgressionOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ProgressionOptions {
    /// Parse options from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`](crate::error::PipelineError::InvalidConfig)
    /// for malformed JSON or invalid values.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| PipelineError::InvalidConfig(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        ensure_chunk_size(self.chunk_size)?;
        Ok(())
    }
}

/// Builder for creating [`ProgressionPipeline`] instances.
///
/// Use [`Self::vader`] for the bundled lexicon or [`Self::with_model`] to
/// supply your own [`PolarityModel`].
///
/// # Examples
///
/// ```rust
/// # use lyric_sentiment::sentiment::ProgressionPipelineBuilder;
/// # fn main() -> lyric_sentiment::error::Result<()> {
/// let pipeline = ProgressionPipelineBuilder::vader()
///     .chunk_size(20)
///     .build()?;
/// assert_eq!(pipeline.chunk_size(), 20);
/// # Ok(())
/// # }
/// ```
pub struct ProgressionPipelineBuilder<M: PolarityModel> {
    model: M,
    options: ProgressionOptions,
}

impl<M: PolarityModel> ProgressionPipelineBuilder<M> {
    /// Creates a builder around any polarity model.
    pub fn with_model(model: M) -> Self {
        Self {
            model,
            options: ProgressionOptions::default(),
        }
    }

    /// Words per chunk (default 10).
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.options.chunk_size = chunk_size;
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: ProgressionOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the pipeline with configured settings.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`](crate::error::PipelineError::InvalidConfig)
    /// if the chunk size is zero.
    pub fn build(self) -> Result<ProgressionPipeline<M>> {
        self.options.validate()?;
        tracing::debug!(chunk_size = self.options.chunk_size, "built progression pipeline");
        Ok(ProgressionPipeline {
            model: self.model,
            chunk_size: self.options.chunk_size,
        })
    }
}

impl ProgressionPipelineBuilder<VaderModel> {
    /// Creates a builder backed by the shared VADER lexicon.
    pub fn vader() -> Self {
        Self::with_model(VaderModel::new())
    }
}
