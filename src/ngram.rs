use std::collections::HashMap;

/// Extracts the n-grams of order `n` from a sentence as a sliding window.
///
/// Returns an empty list when the sentence is shorter than `n` or when
/// `n == 0`.
pub fn sent_ngrams(sentence: &[String], n: usize) -> Vec<Vec<String>> {
    if n == 0 || sentence.len() < n {
        return Vec::new();
    }
    sentence.windows(n).map(|gram| gram.to_vec()).collect()
}

/// Multiset of n-gram occurrence counts, keyed by borrowed token windows.
pub(crate) fn ngram_counts(sentence: &[String], n: usize) -> HashMap<&[String], usize> {
    let mut counts: HashMap<&[String], usize> = HashMap::new();
    if n == 0 || sentence.len() < n {
        return counts;
    }
    for gram in sentence.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod ngram_tests {
    use super::{ngram_counts, sent_ngrams};

    fn sentence(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn bigrams_of_three_tokens() {
        let grams = sent_ngrams(&sentence(&["a", "b", "c"]), 2);
        assert_eq!(grams, vec![sentence(&["a", "b"]), sentence(&["b", "c"])]);
    }

    #[test]
    fn sentence_shorter_than_order_has_no_ngrams() {
        assert!(sent_ngrams(&sentence(&["a"]), 2).is_empty());
        assert!(sent_ngrams(&[], 1).is_empty());
    }

    #[test]
    fn order_zero_is_empty() {
        assert!(sent_ngrams(&sentence(&["a", "b"]), 0).is_empty());
        assert!(ngram_counts(&sentence(&["a", "b"]), 0).is_empty());
    }

    #[test]
    fn counts_accumulate_repeats() {
        let tokens = sentence(&["a", "a", "a"]);
        let counts = ngram_counts(&tokens, 1);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.values().copied().sum::<usize>(), 3);
    }
}
