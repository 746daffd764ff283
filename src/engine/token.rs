use crate::engine::orp::orp_index;

/// A single word as it will be flashed on screen.
///
/// Built once per document when the extracted text arrives and never
/// mutated afterwards; loading a new document replaces the whole sequence.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WordToken {
    /// The word exactly as split from the source text, punctuation attached.
    pub original: String,
    /// `original` with everything outside `[A-Za-z0-9_]` stripped. Not used
    /// by playback or display; kept for future search and analysis.
    pub clean: String,
    /// 0-based char offset of the focus character within `original`.
    pub orp_index: usize,
}

impl WordToken {
    pub fn new(original: &str) -> Self {
        let clean = original
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        Self {
            original: original.to_string(),
            clean,
            orp_index: orp_index(original),
        }
    }

    /// Char count of the original word, punctuation included.
    pub fn len(&self) -> usize {
        self.original.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

/// Splits raw text into word tokens on runs of Unicode whitespace.
///
/// Empty fragments are discarded, so the result is empty only when the
/// input held no readable text at all. Callers must treat an empty result
/// as a failed load, not as a zero-word document.
pub fn tokenize(text: &str) -> Vec<WordToken> {
    text.split_whitespace().map(WordToken::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_single_word() {
        let tokens = tokenize("hello");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].original, "hello");
    }

    #[test]
    fn test_tokenize_multiple_words() {
        let tokens = tokenize("hello world");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].original, "hello");
        assert_eq!(tokens[1].original, "world");
    }

    #[test]
    fn test_tokenize_keeps_punctuation_attached() {
        let tokens = tokenize("Hello, world! Go.");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].original, "Hello,");
        assert_eq!(tokens[1].original, "world!");
        assert_eq!(tokens[2].original, "Go.");
    }

    #[test]
    fn test_tokenize_orp_indices_use_raw_length() {
        // "Hello," and "world!" are 6 chars raw → index 2.
        // "Go." is 3 chars raw → index 1.
        let tokens = tokenize("Hello, world! Go.");
        assert_eq!(tokens[0].orp_index, 2);
        assert_eq!(tokens[1].orp_index, 2);
        assert_eq!(tokens[2].orp_index, 1);
    }

    #[test]
    fn test_tokenize_clean_strips_punctuation() {
        let tokens = tokenize("Hello, world! it_s 3.14");
        assert_eq!(tokens[0].clean, "Hello");
        assert_eq!(tokens[1].clean, "world");
        assert_eq!(tokens[2].clean, "it_s");
        assert_eq!(tokens[3].clean, "314");
    }

    #[test]
    fn test_tokenize_clean_is_ascii_only() {
        // \w is ASCII-only here; accented letters are stripped from `clean`
        // while `original` keeps them.
        let tokens = tokenize("café");
        assert_eq!(tokens[0].original, "café");
        assert_eq!(tokens[0].clean, "caf");
    }

    #[test]
    fn test_tokenize_collapses_whitespace_runs() {
        let tokens = tokenize("  one \t two\n\nthree  ");
        let originals: Vec<&str> = tokens.iter().map(|t| t.original.as_str()).collect();
        assert_eq!(originals, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_tokenize_empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_tokenize_rejoin_reconstructs_structure() {
        let text = "The  quick\nbrown fox.";
        let tokens = tokenize(text);
        let rejoined: Vec<String> = tokens.iter().map(|t| t.original.clone()).collect();
        assert_eq!(rejoined.join(" "), "The quick brown fox.");
    }

    #[test]
    fn test_orp_index_invariant_holds_for_every_token() {
        let tokens = tokenize("a bb ccc?! supercalifragilistic punctuation-heavy,");
        for t in &tokens {
            assert!(t.orp_index < t.len().max(1), "token {:?}", t.original);
        }
    }
}
