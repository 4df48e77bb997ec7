use crate::error::{PipelineError, Result};

/// Words per chunk when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

pub(crate) fn ensure_chunk_size(chunk_size: usize) -> Result<usize> {
    if chunk_size == 0 {
        tracing::warn!("rejected chunk size of zero");
        return Err(PipelineError::InvalidConfig(
            "chunk size must be at least 1 word".into(),
        ));
    }
    Ok(chunk_size)
}

/// Splits `text` into consecutive chunks of `chunk_size` words.
///
/// Text that fits in a single chunk is returned verbatim, whitespace and all.
/// Longer text is re-joined with single spaces; the final chunk holds the
/// remainder. Blank text yields no chunks.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidConfig`] when `chunk_size` is zero.
///
/// # Examples
///
/// ```rust
/// use lyric_sentiment::sentiment::chunk_words;
///
/// # fn main() -> lyric_sentiment::error::Result<()> {
/// let chunks = chunk_words("one two three four five", 2)?;
/// assert_eq!(chunks, ["one two", "three four", "five"]);
///
/// let whole = chunk_words("  keep   my spacing ", 10)?;
/// assert_eq!(whole, ["  keep   my spacing "]);
/// # Ok(())
/// # }
/// ```
pub fn chunk_words(text: &str, chunk_size: usize) -> Result<Vec<String>> {
    let chunk_size = ensure_chunk_size(chunk_size)?;
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.is_empty() {
        return Ok(Vec::new());
    }
    if words.len() <= chunk_size {
        return Ok(vec![text.to_string()]);
    }

    Ok(words
        .chunks(chunk_size)
        .map(|chunk| chunk.join(" "))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (1..=n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(matches!(
            chunk_words("a b c", 0),
            Err(PipelineError::InvalidConfig(_))
        ));
        // Even blank text does not bypass validation.
        assert!(chunk_words("", 0).is_err());
    }

    #[test]
    fn blank_text_has_no_chunks() {
        assert!(chunk_words("", 10).unwrap().is_empty());
        assert!(chunk_words(" \t\n ", 10).unwrap().is_empty());
    }

    #[test]
    fn short_text_is_kept_verbatim() {
        let text = "  hello\n\nworld  ";
        assert_eq!(chunk_words(text, 10).unwrap(), vec![text.to_string()]);

        let exact = words(10);
        assert_eq!(chunk_words(&exact, 10).unwrap(), vec![exact.clone()]);
    }

    #[test]
    fn chunk_count_is_ceiling() {
        for (w, c, expected) in [(11, 10, 2), (20, 10, 2), (21, 10, 3), (7, 3, 3), (5, 1, 5)] {
            let chunks = chunk_words(&words(w), c).unwrap();
            assert_eq!(chunks.len(), expected, "w={w} c={c}");
        }
    }

    #[test]
    fn last_chunk_holds_remainder() {
        let chunks = chunk_words(&words(23), 10).unwrap();
        let sizes: Vec<usize> = chunks
            .iter()
            .map(|c| c.split_whitespace().count())
            .collect();
        assert_eq!(sizes, [10, 10, 3]);
    }

    #[test]
    fn chunks_reconstruct_word_sequence() {
        let text = "I  was\tborn\nby the river in a little tent\n\nand just like the river";
        let chunks = chunk_words(text, 4).unwrap();

        assert!(chunks.iter().all(|c| !c.is_empty()));
        let rejoined = chunks.join(" ");
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined.split(' ').collect::<Vec<_>>(), original);
    }
}
