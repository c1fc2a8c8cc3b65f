use crate::align::ngram_context_align;
use crate::corpus::Sentence;
use crate::error::{Result, ScoreError};
use crate::scorer::{check_aligned, ScoreResult, Scorer};

/// RIBES: a word-order-sensitive metric combining a normalized Kendall's-tau
/// rank statistic over an n-gram-context word alignment with exponentially
/// damped precision and brevity-penalty terms.
#[derive(Debug, Clone)]
pub struct RibesScorer {
    order: usize,
    alpha: f64,
    beta: f64,
    case_insensitive: bool,
}

impl RibesScorer {
    /// Creates a RIBES scorer with the standard parameters: alignment context
    /// order 2, alpha 0.25, beta 0.1.
    pub fn new(case_insensitive: bool) -> Self {
        Self {
            order: 2,
            alpha: 0.25,
            beta: 0.1,
            case_insensitive,
        }
    }

    /// Replaces the maximum n-gram context length used to disambiguate the
    /// word alignment.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Replaces the exponent applied to the precision term.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Replaces the exponent applied to the brevity-penalty term.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }
}

/// Fraction of alignment pairs i < j that keep reference order, scaled into
/// [0, 1]; exactly 0 when the alignment has at most one entry.
fn kendall_tau_distance(alignment: &[usize]) -> f64 {
    let n = alignment.len();
    if n <= 1 {
        return 0.0;
    }
    let mut ascending = 0u64;
    for i in 0..n {
        for j in (i + 1)..n {
            if alignment[j] > alignment[i] {
                ascending += 1;
            }
        }
    }
    2.0 * ascending as f64 / (n * n - n) as f64
}

impl Scorer for RibesScorer {
    fn score_corpus(
        &self,
        ref_corpus: &[Sentence],
        out_corpus: &[Sentence],
    ) -> Result<ScoreResult> {
        check_aligned(ref_corpus, out_corpus)?;
        if ref_corpus.is_empty() {
            return Err(ScoreError::InvalidInput(
                "cannot average RIBES over an empty corpus".to_string(),
            ));
        }

        let mut total = 0.0;
        for (ref_sent, out_sent) in ref_corpus.iter().zip(out_corpus.iter()) {
            total += self.score_sentence(ref_sent, out_sent)?.score;
        }
        Ok(ScoreResult::bare(total / ref_corpus.len() as f64))
    }

    fn score_sentence(&self, ref_sent: &[String], out_sent: &[String]) -> Result<ScoreResult> {
        if out_sent.is_empty() {
            return Ok(ScoreResult::bare(0.0));
        }

        let alignment =
            ngram_context_align(ref_sent, out_sent, self.order, self.case_insensitive);
        let kendall = kendall_tau_distance(&alignment);
        let precision = alignment.len() as f64 / out_sent.len() as f64;
        let brevity_penalty = (1.0 - ref_sent.len() as f64 / out_sent.len() as f64)
            .exp()
            .min(1.0);

        Ok(ScoreResult::bare(
            kendall * precision.powf(self.alpha) * brevity_penalty.powf(self.beta),
        ))
    }

    fn name(&self) -> &'static str {
        "RIBES"
    }
}
