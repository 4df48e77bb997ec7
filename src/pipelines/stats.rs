use std::time::{Duration, Instant};

/// Statistics for a batch analysis run.
#[derive(Debug, Clone)]
pub struct PipelineStats {
    /// Total execution time.
    pub total_time: Duration,
    /// Number of texts processed.
    pub items_processed: usize,
    /// Number of chunks sent to the polarity model across all texts.
    pub chunks_scored: usize,
}

impl PipelineStats {
    /// Create a new stats tracker (call at start of operation).
    pub(crate) fn start() -> PipelineStatsBuilder {
        PipelineStatsBuilder {
            start_time: Instant::now(),
            chunks_scored: 0,
        }
    }

    /// Mean wall time per processed text, zero for an empty run.
    pub fn time_per_item(&self) -> Duration {
        match u32::try_from(self.items_processed) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.total_time / n,
        }
    }
}

/// Tracks timing from creation to finish.
pub(crate) struct PipelineStatsBuilder {
    start_time: Instant,
    chunks_scored: usize,
}

impl PipelineStatsBuilder {
    pub fn record_chunks(&mut self, count: usize) {
        self.chunks_scored += count;
    }

    /// Finalize stats with the number of items processed.
    pub fn finish(self, items_processed: usize) -> PipelineStats {
        PipelineStats {
            total_time: self.start_time.elapsed(),
            items_processed,
            chunks_scored: self.chunks_scored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PipelineStats;
    use std::time::Duration;

    #[test]
    fn accumulates_chunks() {
        let mut builder = PipelineStats::start();
        builder.record_chunks(3);
        builder.record_chunks(2);
        let stats = builder.finish(2);

        assert_eq!(stats.items_processed, 2);
        assert_eq!(stats.chunks_scored, 5);
    }

    #[test]
    fn empty_run_has_zero_time_per_item() {
        let stats = PipelineStats {
            total_time: Duration::from_millis(10),
            items_processed: 0,
            chunks_scored: 0,
        };
        assert_eq!(stats.time_per_item(), Duration::ZERO);
    }
}
