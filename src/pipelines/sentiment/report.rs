//! Presentation data derived from an [`AnalysisResult`].
//!
//! Nothing here renders pixels or chat messages beyond a fixed summary
//! template; callers feed these records to their own renderer.

use super::label::SentimentLabel;
use super::pipeline::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary returned when there is no analysis to report.
pub const NO_DATA_MESSAGE: &str = "No sentiment data available";

/// X-axis caption for a progression chart.
pub const X_AXIS_LABEL: &str = "Song Progression";

/// Y-axis caption for a progression chart.
pub const Y_AXIS_LABEL: &str = "Sentiment Score";

/// Render the overall label and average score in the fixed summary template.
///
/// The score always has exactly three fractional digits.
///
/// ```rust
/// use lyric_sentiment::sentiment::{summarize, NO_DATA_MESSAGE};
///
/// assert_eq!(summarize(None), NO_DATA_MESSAGE);
/// ```
pub fn summarize(result: Option<&AnalysisResult>) -> String {
    match result {
        None => NO_DATA_MESSAGE.to_string(),
        Some(result) => format!(
            "**Sentiment Analysis**\n\nOverall: **{}** (Score: {:.3})\n\n",
            SentimentLabel::from_compound(result.average_compound()),
            result.average_compound()
        ),
    }
}

/// One point of the sentiment progression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// 1-based chunk position.
    pub chunk_index: usize,
    /// Compound score of that chunk.
    pub compound: f64,
}

/// Per-chunk compound scores indexed `1..=N`, or `None` without a result.
pub fn series_for(result: Option<&AnalysisResult>) -> Option<Vec<SeriesPoint>> {
    let result = result?;
    Some(
        result
            .compounds()
            .enumerate()
            .map(|(i, compound)| SeriesPoint {
                chunk_index: i + 1,
                compound,
            })
            .collect(),
    )
}

/// Artist and title shown alongside an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackLabel {
    /// Performing artist.
    pub artist: String,
    /// Song title.
    pub title: String,
}

impl TrackLabel {
    /// Creates a label from artist and title.
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for TrackLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}

/// Everything a line-chart renderer needs to draw a sentiment progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionChart {
    /// Chart title, `"{title} by {artist}"`.
    pub title: String,
    /// X-axis caption.
    pub x_label: String,
    /// Y-axis caption.
    pub y_label: String,
    /// Points to plot, in chunk order.
    pub points: Vec<SeriesPoint>,
}

impl ProgressionChart {
    /// Build chart data for `result`, or `None` without a result.
    pub fn from_result(result: Option<&AnalysisResult>, track: &TrackLabel) -> Option<Self> {
        let points = series_for(result)?;
        Some(Self {
            title: track.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            points,
        })
    }

    /// Serialize for a JSON-speaking renderer.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
