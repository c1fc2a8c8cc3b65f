use log::debug;

use crate::corpus::{lower, Sentence};
use crate::error::{Result, ScoreError};
use crate::ngram::ngram_counts;
use crate::scorer::{check_aligned, ScoreResult, Scorer};

/// Per-sentence sufficient statistics for corpus BLEU.
///
/// Three parallel sequences indexed by sentence id: reference length, output
/// length, and one `(clipped matches, total output n-grams)` pair per n-gram
/// order. Immutable once built; a stale cache is replaced by calling
/// [`Scorer::cache_stats`] again. Plain owned data with no interior
/// mutability, so one cache can be shared across threads scoring different
/// id subsets concurrently.
#[derive(Debug, Clone)]
pub struct BleuStats {
    ref_lens: Vec<usize>,
    out_lens: Vec<usize>,
    precisions: Vec<Vec<(u64, u64)>>,
}

impl BleuStats {
    /// Number of sentence pairs covered by the cache.
    pub fn len(&self) -> usize {
        self.ref_lens.len()
    }

    /// Whether the cache covers no sentence pairs.
    pub fn is_empty(&self) -> bool {
        self.ref_lens.is_empty()
    }

    fn orders(&self) -> usize {
        self.precisions.first().map_or(0, Vec::len)
    }
}

/// Corpus-level BLEU with clipped n-gram precision, a brevity penalty, and a
/// cached-statistics path for cheap subset rescoring.
#[derive(Debug, Clone)]
pub struct BleuScorer {
    weights: Vec<f64>,
    case_insensitive: bool,
}

impl BleuScorer {
    /// Creates a BLEU scorer with the standard four equal order weights.
    pub fn new(case_insensitive: bool) -> Self {
        Self {
            weights: vec![0.25; 4],
            case_insensitive,
        }
    }

    /// Replaces the n-gram order weights. One weight per order, starting at
    /// unigrams; weights conventionally sum to 1.
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = weights;
        self
    }

    fn validated_orders(&self) -> Result<usize> {
        if self.weights.is_empty() {
            return Err(ScoreError::InvalidInput(
                "BLEU weight vector must name at least one n-gram order".to_string(),
            ));
        }
        Ok(self.weights.len())
    }

    fn compute_stats(&self, ref_corpus: &[Sentence], out_corpus: &[Sentence]) -> Result<BleuStats> {
        check_aligned(ref_corpus, out_corpus)?;
        let orders = self.validated_orders()?;

        let (ref_lowered, out_lowered);
        let (ref_corpus, out_corpus): (&[Sentence], &[Sentence]) = if self.case_insensitive {
            ref_lowered = lower(ref_corpus);
            out_lowered = lower(out_corpus);
            (&ref_lowered, &out_lowered)
        } else {
            (ref_corpus, out_corpus)
        };

        let mut ref_lens = Vec::with_capacity(ref_corpus.len());
        let mut out_lens = Vec::with_capacity(out_corpus.len());
        let mut precisions = Vec::with_capacity(ref_corpus.len());
        for (ref_sent, out_sent) in ref_corpus.iter().zip(out_corpus.iter()) {
            ref_lens.push(ref_sent.len());
            out_lens.push(out_sent.len());
            let per_order = (1..=orders)
                .map(|n| clipped_precision(ref_sent, out_sent, n))
                .collect();
            precisions.push(per_order);
        }

        debug!("cached BLEU statistics for {} sentence pairs", ref_lens.len());
        Ok(BleuStats {
            ref_lens,
            out_lens,
            precisions,
        })
    }
}

impl Scorer for BleuScorer {
    fn score_corpus(
        &self,
        ref_corpus: &[Sentence],
        out_corpus: &[Sentence],
    ) -> Result<ScoreResult> {
        let stats = self.compute_stats(ref_corpus, out_corpus)?;
        let all_ids: Vec<usize> = (0..stats.len()).collect();
        self.score_cached_corpus(&all_ids, &stats)
    }

    fn score_sentence(&self, _ref_sent: &[String], _out_sent: &[String]) -> Result<ScoreResult> {
        Err(ScoreError::UnsupportedOperation(
            "sentence-level calculation with BleuScorer is usually 0; \
             use SentBleuScorer (profile \"sentbleu\") instead"
                .to_string(),
        ))
    }

    fn cache_stats(
        &self,
        ref_corpus: &[Sentence],
        out_corpus: &[Sentence],
    ) -> Result<Option<BleuStats>> {
        self.compute_stats(ref_corpus, out_corpus).map(Some)
    }

    fn score_cached_corpus(&self, sent_ids: &[usize], cache: &BleuStats) -> Result<ScoreResult> {
        let orders = self.validated_orders()?;
        if !cache.is_empty() && cache.orders() != orders {
            return Err(ScoreError::InvalidInput(format!(
                "cache holds {} n-gram orders but the scorer weights name {}",
                cache.orders(),
                orders
            )));
        }

        let mut ref_len = 0usize;
        let mut out_len = 0usize;
        let mut numerators = vec![0u64; orders];
        let mut denominators = vec![0u64; orders];
        for &sent_id in sent_ids {
            if sent_id >= cache.len() {
                return Err(ScoreError::InvalidInput(format!(
                    "sentence id {sent_id} is out of range for a cache of {} sentences",
                    cache.len()
                )));
            }
            ref_len += cache.ref_lens[sent_id];
            out_len += cache.out_lens[sent_id];
            for (n, &(num, denom)) in cache.precisions[sent_id].iter().enumerate() {
                numerators[n] += num;
                denominators[n] += denom;
            }
        }

        // No unigram match anywhere in the subset: the score is exactly 0,
        // and the log-space combination below would be undefined.
        if numerators[0] == 0 {
            return Ok(ScoreResult::bare(0.0));
        }

        let mut weighted_log = 0.0;
        for (n, &weight) in self.weights.iter().enumerate() {
            let precision = if denominators[n] != 0 {
                numerators[n] as f64 / denominators[n] as f64
            } else {
                0.0
            };
            // A zero precision contributes nothing rather than -inf.
            if precision > 0.0 {
                weighted_log += weight * precision.ln();
            }
        }

        let brevity_penalty = if out_len != 0 {
            (1.0 - ref_len as f64 / out_len as f64).exp().min(1.0)
        } else {
            0.0
        };

        Ok(ScoreResult::bare(brevity_penalty * weighted_log.exp()))
    }

    fn name(&self) -> &'static str {
        "BLEU"
    }
}

/// Numerator and denominator of the clipped n-gram precision of one sentence
/// pair: each distinct output n-gram is credited at most as many times as it
/// occurs in the reference, and the denominator is floored at 1 so orders
/// longer than the sentence stay well defined.
pub(crate) fn clipped_precision(ref_sent: &[String], out_sent: &[String], n: usize) -> (u64, u64) {
    let out_counts = ngram_counts(out_sent, n);
    let ref_counts = ngram_counts(ref_sent, n);

    let mut numerator = 0u64;
    let mut denominator = 0u64;
    for (gram, &out_count) in &out_counts {
        let ref_count = ref_counts.get(gram).copied().unwrap_or(0);
        numerator += out_count.min(ref_count) as u64;
        denominator += out_count as u64;
    }
    (numerator, denominator.max(1))
}
