//! Fixed-size sliding-window chunking with overlap.

use studyrag_core::{ChunkConfig, ChunkError};

/// Split `text` into overlapping fixed-size character windows.
///
/// Window `k` starts at `k * (chunk_size - overlap)` and spans
/// `min(chunk_size, remaining)` characters. The sequence stops with the
/// window that reaches the end of the text; a text no longer than
/// `chunk_size` yields a single chunk equal to the whole text, and empty
/// text yields no chunks.
///
/// Windows are measured in characters, not bytes, so multi-byte text
/// never splits inside a code point.
pub fn chunk(text: &str, config: &ChunkConfig) -> Result<Vec<String>, ChunkError> {
    config.validate()?;

    if text.is_empty() {
        return Ok(vec![]);
    }

    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    let stride = config.stride();

    let mut chunks = Vec::new();
    let mut start = 0;
    loop {
        let end = (start + config.chunk_size).min(total);
        chunks.push(chars[start..end].iter().collect());
        if end >= total {
            break;
        }
        start += stride;
    }

    Ok(chunks)
}

/// Split `text` with the default window parameters (1000/200).
pub fn chunk_with_defaults(text: &str) -> Result<Vec<String>, ChunkError> {
    chunk(text, &ChunkConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(chunk_size: usize, overlap: usize) -> ChunkConfig {
        ChunkConfig {
            chunk_size,
            overlap,
        }
    }

    #[test]
    fn test_chunk_empty_text() {
        let chunks = chunk("", &ChunkConfig::default()).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_chunk_short_text_single_chunk() {
        let chunks = chunk("This is a short text.", &ChunkConfig::default()).unwrap();
        assert_eq!(chunks, vec!["This is a short text.".to_string()]);
    }

    #[test]
    fn test_chunk_text_exactly_chunk_size() {
        let text = "a".repeat(1000);
        let chunks = chunk(&text, &ChunkConfig::default()).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_chunk_window_offsets() {
        // 2400 chars with 1000/200 windows: 0..1000, 800..1800, 1600..2400.
        let text: String = (0..2400)
            .map(|i| char::from(b'a' + (i % 26) as u8))
            .collect();
        let chars: Vec<char> = text.chars().collect();

        let chunks = chunk(&text, &ChunkConfig::default()).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], chars[0..1000].iter().collect::<String>());
        assert_eq!(chunks[1], chars[800..1800].iter().collect::<String>());
        assert_eq!(chunks[2], chars[1600..2400].iter().collect::<String>());
    }

    #[test]
    fn test_chunk_no_empty_trailing_window() {
        // Length is an exact multiple of the stride; the final window must
        // reach the end without an empty chunk after it.
        let text = "x".repeat(1600);
        let chunks = chunk(&text, &ChunkConfig::default()).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 1000);
        assert_eq!(chunks[1].chars().count(), 800);
        assert!(chunks.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_chunk_final_partial_window() {
        let text = "y".repeat(1001);
        let chunks = chunk(&text, &ChunkConfig::default()).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].chars().count(), 201);
    }

    #[test]
    fn test_chunk_count_bound() {
        // count == ceil((len - overlap) / stride) for text longer than one window
        for len in [801, 1000, 1601, 2400, 5000, 8000] {
            let text = "z".repeat(len);
            let config = ChunkConfig::default();
            let chunks = chunk(&text, &config).unwrap();

            let expected = len
                .saturating_sub(config.overlap)
                .div_ceil(config.stride())
                .max(1);
            assert_eq!(chunks.len(), expected, "length {len}");
        }
    }

    #[test]
    fn test_chunk_full_coverage() {
        // Every character index is covered by at least one window.
        let text: String = (0..3217).map(|i| char::from(b'A' + (i % 26) as u8)).collect();
        let config = config(100, 30);
        let chunks = chunk(&text, &config).unwrap();

        let mut covered = vec![false; text.chars().count()];
        let mut start = 0;
        for c in &chunks {
            for offset in 0..c.chars().count() {
                covered[start + offset] = true;
            }
            start += config.stride();
        }
        assert!(covered.iter().all(|&c| c));

        // Overlapping windows agree with the source text.
        let chars: Vec<char> = text.chars().collect();
        for (k, c) in chunks.iter().enumerate() {
            let begin = k * config.stride();
            let end = (begin + config.chunk_size).min(chars.len());
            assert_eq!(c, &chars[begin..end].iter().collect::<String>());
        }
    }

    #[test]
    fn test_chunk_unicode_text() {
        let text = "Hello 世界! 🌍 Привет мир! مرحبا".repeat(40);
        let config = config(50, 10);
        let chunks = chunk(&text, &config).unwrap();

        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= 50));
        // Reassembling from strides reproduces the original text.
        let mut rebuilt: Vec<char> = Vec::new();
        for (k, c) in chunks.iter().enumerate() {
            let begin = k * config.stride();
            for (offset, ch) in c.chars().enumerate() {
                if begin + offset >= rebuilt.len() {
                    rebuilt.push(ch);
                }
            }
        }
        assert_eq!(rebuilt.into_iter().collect::<String>(), text);
    }

    #[test]
    fn test_chunk_rejects_overlap_not_smaller_than_chunk_size() {
        assert!(chunk("some text", &config(10, 10)).is_err());
        assert!(chunk("some text", &config(10, 20)).is_err());
    }

    #[test]
    fn test_chunk_rejects_zero_chunk_size() {
        let err = chunk("some text", &config(0, 0)).unwrap_err();
        assert!(matches!(err, ChunkError::InvalidConfig(_)));
    }

    #[test]
    fn test_chunk_with_defaults() {
        let text = "w".repeat(2400);
        let chunks = chunk_with_defaults(&text).unwrap();
        assert_eq!(chunks.len(), 3);
    }

    #[test]
    fn test_chunk_deterministic() {
        let text = "Repeatable input text. ".repeat(100);
        let a = chunk(&text, &config(120, 40)).unwrap();
        let b = chunk(&text, &config(120, 40)).unwrap();
        assert_eq!(a, b);
    }
}
