use crate::bleu::clipped_precision;
use crate::corpus::{lower_sentence, Sentence};
use crate::error::{Result, ScoreError};
use crate::scorer::{check_aligned, ScoreResult, Scorer};

const ORDERS: usize = 4;
const WEIGHT: f64 = 0.25;

/// Sentence-level BLEU with add-one smoothing on every order above unigrams
/// (Chen–Cherry method 2), so short sentences with zero higher-order matches
/// keep a nonzero score. A sentence with no unigram match still scores 0.
#[derive(Debug, Clone)]
pub struct SentBleuScorer {
    case_insensitive: bool,
}

impl SentBleuScorer {
    /// Creates a sentence-BLEU scorer.
    pub fn new(case_insensitive: bool) -> Self {
        Self { case_insensitive }
    }
}

impl Scorer for SentBleuScorer {
    fn score_corpus(
        &self,
        ref_corpus: &[Sentence],
        out_corpus: &[Sentence],
    ) -> Result<ScoreResult> {
        check_aligned(ref_corpus, out_corpus)?;
        if ref_corpus.is_empty() {
            return Err(ScoreError::InvalidInput(
                "cannot average sentence BLEU over an empty corpus".to_string(),
            ));
        }

        let mut total = 0.0;
        for (ref_sent, out_sent) in ref_corpus.iter().zip(out_corpus.iter()) {
            total += self.score_sentence(ref_sent, out_sent)?.score;
        }
        Ok(ScoreResult::bare(total / ref_corpus.len() as f64))
    }

    fn score_sentence(&self, ref_sent: &[String], out_sent: &[String]) -> Result<ScoreResult> {
        let (ref_lowered, out_lowered);
        let (ref_sent, out_sent): (&[String], &[String]) = if self.case_insensitive {
            ref_lowered = lower_sentence(ref_sent);
            out_lowered = lower_sentence(out_sent);
            (&ref_lowered, &out_lowered)
        } else {
            (ref_sent, out_sent)
        };

        let (num, denom) = clipped_precision(ref_sent, out_sent, 1);
        if num == 0 {
            return Ok(ScoreResult::bare(0.0));
        }
        let mut weighted_log = WEIGHT * (num as f64 / denom as f64).ln();
        for n in 2..=ORDERS {
            let (num, denom) = clipped_precision(ref_sent, out_sent, n);
            // Add-one smoothing keeps zero-count orders well defined.
            let precision = (num + 1) as f64 / (denom + 1) as f64;
            weighted_log += WEIGHT * precision.ln();
        }

        let brevity_penalty = if !out_sent.is_empty() {
            (1.0 - ref_sent.len() as f64 / out_sent.len() as f64)
                .exp()
                .min(1.0)
        } else {
            0.0
        };

        Ok(ScoreResult::bare(brevity_penalty * weighted_log.exp()))
    }

    fn name(&self) -> &'static str {
        "sentence-level BLEU"
    }
}

#[cfg(test)]
mod sentbleu_tests {
    use super::SentBleuScorer;
    use crate::scorer::Scorer;
    use crate::ScoreError;

    fn sentence(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn identical_long_sentence_scores_one() {
        let tokens = sentence(&["the", "cat", "sat", "down"]);
        let result = SentBleuScorer::new(false)
            .score_sentence(&tokens, &tokens)
            .unwrap();
        assert!(close(result.score, 1.0), "got {}", result.score);
    }

    #[test]
    fn identical_short_sentence_is_smoothed_not_zero() {
        let tokens = sentence(&["the", "cat"]);
        let result = SentBleuScorer::new(false)
            .score_sentence(&tokens, &tokens)
            .unwrap();
        // Orders 3 and 4 have no n-grams and smooth to 1/2 each.
        assert!(close(result.score, 0.5f64.sqrt()), "got {}", result.score);
    }

    #[test]
    fn disjoint_sentences_score_zero() {
        let reference = sentence(&["the", "cat"]);
        let output = sentence(&["ein", "hund"]);
        let result = SentBleuScorer::new(false)
            .score_sentence(&reference, &output)
            .unwrap();
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn empty_output_sentence_scores_zero() {
        let reference = sentence(&["a"]);
        let result = SentBleuScorer::new(false)
            .score_sentence(&reference, &[])
            .unwrap();
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn corpus_score_is_the_sentence_mean() {
        let reference = vec![sentence(&["the", "cat", "sat", "down"]), sentence(&["a", "b"])];
        let output = vec![sentence(&["the", "cat", "sat", "down"]), sentence(&["x", "y"])];
        let result = SentBleuScorer::new(false)
            .score_corpus(&reference, &output)
            .unwrap();
        assert!(close(result.score, 0.5), "got {}", result.score);
    }

    #[test]
    fn case_insensitive_flag_folds_case() {
        let reference = sentence(&["The", "Cat", "Sat", "Down"]);
        let output = sentence(&["the", "cat", "sat", "down"]);
        let scorer = SentBleuScorer::new(true);
        let result = scorer.score_sentence(&reference, &output).unwrap();
        assert!(close(result.score, 1.0));
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let scorer = SentBleuScorer::new(false);
        assert!(matches!(
            scorer.score_corpus(&[], &[]),
            Err(ScoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn caching_is_the_absent_marker() {
        let reference = vec![sentence(&["a"])];
        let scorer = SentBleuScorer::new(false);
        assert!(scorer.cache_stats(&reference, &reference).unwrap().is_none());
    }
}
