use std::sync::OnceLock;

use regex::Regex;

/// A sentence: an ordered sequence of tokens.
pub type Sentence = Vec<String>;

/// A corpus: an ordered sequence of sentences. The position of a sentence in
/// the corpus is its sentence id, and reference and output corpora are aligned
/// by that id.
pub type Corpus = Vec<Sentence>;

fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Splits one raw line into tokens on runs of whitespace.
///
/// Leading and trailing whitespace never produces empty tokens; an empty or
/// all-whitespace line yields an empty sentence.
pub fn tokenize(line: &str) -> Sentence {
    whitespace_pattern()
        .split(line.trim())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns a lower-cased copy of a corpus, preserving shape and order.
///
/// The input is never mutated; scorers with the case-insensitive flag call
/// this before computing anything.
pub fn lower(corpus: &[Sentence]) -> Corpus {
    corpus.iter().map(|sentence| lower_sentence(sentence)).collect()
}

pub(crate) fn lower_sentence(sentence: &[String]) -> Sentence {
    sentence.iter().map(|token| token.to_lowercase()).collect()
}

#[cfg(test)]
mod corpus_tests {
    use super::{lower, tokenize};

    #[test]
    fn tokenize_splits_on_whitespace_runs() {
        assert_eq!(tokenize("the  cat\tsat "), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn tokenize_empty_line_yields_empty_sentence() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn lower_folds_every_token_without_mutating_input() {
        let corpus = vec![
            vec!["The".to_string(), "CAT".to_string()],
            vec!["Sat".to_string()],
        ];
        let lowered = lower(&corpus);
        assert_eq!(lowered, vec![vec!["the", "cat"], vec!["sat"]]);
        assert_eq!(corpus[0][0], "The");
    }

    #[test]
    fn lower_preserves_empty_sentences() {
        let corpus = vec![vec![], vec!["A".to_string()]];
        let lowered = lower(&corpus);
        assert_eq!(lowered.len(), 2);
        assert!(lowered[0].is_empty());
    }
}
