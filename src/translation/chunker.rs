//! Fixed-size character chunking of document text.

/// Splits `text` into consecutive slices of at most `chunk_size` characters.
///
/// Sizes count Unicode scalar values, so a multi-byte character is never cut.
/// Concatenating the result reproduces `text` exactly; every slice except
/// possibly the last holds exactly `chunk_size` characters. Empty input yields
/// no chunks.
///
/// # Panics
///
/// Panics if `chunk_size` is zero. Settings guarantee a positive size.
pub fn split_chunks(text: &str, chunk_size: usize) -> Vec<&str> {
    assert!(chunk_size > 0, "chunk size must be positive");

    let mut chunks = Vec::with_capacity(text.len() / chunk_size + 1);
    let mut start = 0;
    let mut count = 0;

    for (offset, _) in text.char_indices() {
        if count == chunk_size {
            chunks.push(&text[start..offset]);
            start = offset;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejoin_is_lossless() {
        let text = "The quick brown fox\njumps over\n\nthe lazy dog.";
        for size in 1..=text.len() + 2 {
            let chunks = split_chunks(text, size);
            assert_eq!(chunks.concat(), text, "chunk size {size}");
        }
    }

    #[test]
    fn test_chunk_lengths() {
        let text = "a".repeat(4500);
        let chunks = split_chunks(&text, 2000);
        let lengths: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(lengths, vec![2000, 2000, 500]);
    }

    #[test]
    fn test_count_matches_ceil() {
        for len in 0..50 {
            let text = "x".repeat(len);
            for size in 1..12 {
                let chunks = split_chunks(&text, size);
                assert_eq!(chunks.len(), len.div_ceil(size));
                if let Some((last, full)) = chunks.split_last() {
                    assert!(full.iter().all(|c| c.chars().count() == size));
                    assert!(last.chars().count() <= size);
                }
            }
        }
    }

    #[test]
    fn test_exact_multiple_has_no_empty_tail() {
        assert_eq!(split_chunks("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert!(split_chunks("", 10).is_empty());
    }

    #[test]
    fn test_multibyte_characters_are_not_split() {
        let text = "日本語のテキスト🌍です";
        let chunks = split_chunks(text, 4);
        assert_eq!(chunks, vec!["日本語の", "テキスト", "🌍です"]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    #[should_panic(expected = "chunk size must be positive")]
    fn test_zero_chunk_size_panics() {
        let _ = split_chunks("abc", 0);
    }
}
