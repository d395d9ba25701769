//! Overlapping window chunker for plain extracted text.
//!
//! Greedy left-to-right windows of `chunk_size` characters, cut back
//! to the nearest whitespace or sentence boundary when that does not
//! cost more than 20% of the window. Consecutive windows overlap by
//! up to `overlap` characters. Operates on `char` indices so a cut
//! never lands inside a UTF-8 sequence.

use sheetsplit_core::TextChunkConfig;
use tracing::warn;

/// Characters a window may end before: whitespace or sentence-final
/// punctuation.
fn is_boundary(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '.' | '!' | '?')
}

/// Split text into overlapping chunks. Text at or below
/// `min_chunk_size` characters is too thin to index and yields
/// nothing.
pub fn chunk_text(content: &str, config: &TextChunkConfig) -> Vec<String> {
    let trimmed = content.trim();
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() <= config.min_chunk_size {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        if chunks.len() >= config.max_chunks {
            // Pathological input; truncate production rather than spin.
            warn!(limit = config.max_chunks, "chunk cap reached, truncating document");
            break;
        }

        let hard_end = (start + config.chunk_size).min(chars.len());
        let mut end = hard_end;
        if end < chars.len() {
            while end > start && !is_boundary(chars[end]) {
                end -= 1;
            }
            // Keep the hard cut when boundary search would discard
            // more than 20% of the window.
            if (hard_end - end) * 5 > config.chunk_size {
                end = hard_end;
            }
        }

        let window: String = chars[start..end].iter().collect();
        let window = window.trim();
        if !window.is_empty() {
            chunks.push(window.to_string());
        }

        // The final window consumed the rest of the text.
        if end == chars.len() {
            break;
        }

        // Overlap the next window; start + 1 guarantees forward
        // progress even when overlap >= chunk_size.
        start = (start + 1).max(end.saturating_sub(config.overlap));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(chunk_size: usize, overlap: usize, min_chunk_size: usize) -> TextChunkConfig {
        TextChunkConfig {
            chunk_size,
            overlap,
            min_chunk_size,
            max_chunks: 1000,
        }
    }

    #[test]
    fn thin_content_yields_no_chunks() {
        let cfg = config(1000, 100, 100);
        assert!(chunk_text("", &cfg).is_empty());
        assert!(chunk_text("short note", &cfg).is_empty());
        assert!(chunk_text(&"a".repeat(100), &cfg).is_empty());
    }

    #[test]
    fn content_just_over_minimum_yields_one_chunk() {
        let cfg = config(1000, 100, 100);
        let text = "word ".repeat(30); // 150 chars
        let chunks = chunk_text(&text, &cfg);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text.trim());
    }

    #[test]
    fn no_chunk_is_empty_or_over_budget() {
        let cfg = config(200, 50, 10);
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(40);
        for chunk in chunk_text(&text, &cfg) {
            assert!(!chunk.is_empty());
            assert!(chunk.chars().count() <= 200);
        }
    }

    #[test]
    fn windows_end_at_word_boundaries() {
        let cfg = config(50, 0, 10);
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        for chunk in chunk_text(&text, &cfg) {
            // Each cut fell on whitespace, so chunks contain whole words.
            assert!(text.split_whitespace().any(|w| chunk.ends_with(w)));
        }
    }

    #[test]
    fn unbroken_run_keeps_the_hard_cut() {
        // No boundary anywhere: the 20% rule must keep the full window
        // rather than walking back to nothing.
        let cfg = config(100, 10, 10);
        let text = "x".repeat(450);
        let chunks = chunk_text(&text, &cfg);
        assert!(!chunks.is_empty());
        assert_eq!(chunks[0].len(), 100);
    }

    #[test]
    fn consecutive_chunks_overlap() {
        let cfg = config(100, 30, 10);
        let text = "seven letter words repeat here again and again okay ".repeat(10);
        let chunks = chunk_text(&text, &cfg);
        assert!(chunks.len() > 1);
        // The tail of chunk N reappears near the head of chunk N+1.
        let tail: String = chunks[0].chars().rev().take(10).collect::<String>()
            .chars().rev().collect();
        assert!(chunks[1].contains(tail.trim()));
    }

    #[test]
    fn progress_is_guaranteed_when_overlap_exceeds_chunk_size() {
        let cfg = config(50, 500, 10);
        let text = "words and more words ".repeat(30);
        let chunks = chunk_text(&text, &cfg);
        // Must terminate (no infinite loop) and produce bounded output.
        assert!(!chunks.is_empty());
        assert!(chunks.len() <= 1000);
    }

    #[test]
    fn chunk_cap_truncates_pathological_input() {
        let cfg = TextChunkConfig {
            chunk_size: 5,
            overlap: 100, // forces start += 1 each round
            min_chunk_size: 10,
            max_chunks: 20,
        };
        let text = "abcdefghij ".repeat(50);
        let chunks = chunk_text(&text, &cfg);
        assert_eq!(chunks.len(), 20);
    }

    #[test]
    fn multibyte_text_never_panics() {
        let cfg = config(20, 5, 5);
        let text = "héllo wörld ünïcödé ".repeat(20);
        let chunks = chunk_text(&text, &cfg);
        assert!(!chunks.is_empty());
        for chunk in chunks {
            assert!(chunk.chars().count() <= 20);
        }
    }
}
