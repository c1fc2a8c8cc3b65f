use log::debug;

use crate::bleu::{BleuScorer, BleuStats};
use crate::corpus::Sentence;
use crate::error::{Result, ScoreError};
use crate::length::LengthScorer;
use crate::ribes::RibesScorer;
use crate::sentbleu::SentBleuScorer;

/// Outcome of a scoring operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// The metric value.
    pub score: f64,
    /// Scorer-specific human-readable auxiliary information, when any.
    pub summary: Option<String>,
}

impl ScoreResult {
    pub(crate) fn bare(score: f64) -> Self {
        Self {
            score,
            summary: None,
        }
    }
}

/// Common capability interface over the metric variants.
///
/// Corpora are ordered sequences of token sequences; reference and output are
/// aligned by sentence position. Every implementation validates that the two
/// corpora have the same length instead of silently truncating.
///
/// Caching is opt-in: only [`BleuScorer`] produces real statistics from
/// [`Scorer::cache_stats`], everything else inherits the absent-marker
/// default.
pub trait Scorer: std::fmt::Debug {
    /// Scores a whole output corpus against an aligned reference corpus.
    fn score_corpus(&self, ref_corpus: &[Sentence], out_corpus: &[Sentence])
        -> Result<ScoreResult>;

    /// Scores a single output sentence against a reference sentence.
    ///
    /// The default refuses; variants that are only meaningful at corpus level
    /// keep it that way.
    fn score_sentence(&self, _ref_sent: &[String], _out_sent: &[String]) -> Result<ScoreResult> {
        Err(ScoreError::UnsupportedOperation(format!(
            "{} does not support sentence-level scoring",
            self.name()
        )))
    }

    /// Precomputes per-sentence sufficient statistics for subset rescoring.
    ///
    /// The default returns `Ok(None)`, the absent marker for scorers without
    /// a caching path.
    fn cache_stats(
        &self,
        _ref_corpus: &[Sentence],
        _out_corpus: &[Sentence],
    ) -> Result<Option<BleuStats>> {
        Ok(None)
    }

    /// Scores the multiset of sentences named by `sent_ids` from cached
    /// statistics. Only meaningful where [`Scorer::cache_stats`] is real.
    fn score_cached_corpus(&self, _sent_ids: &[usize], _cache: &BleuStats) -> Result<ScoreResult> {
        Err(ScoreError::UnsupportedOperation(format!(
            "{} does not support cached scoring",
            self.name()
        )))
    }

    /// Human-readable metric name.
    fn name(&self) -> &'static str;
}

/// Fails with `InvalidInput` unless the two corpora are position-aligned.
pub(crate) fn check_aligned(ref_corpus: &[Sentence], out_corpus: &[Sentence]) -> Result<()> {
    if ref_corpus.len() != out_corpus.len() {
        return Err(ScoreError::InvalidInput(format!(
            "reference corpus has {} sentences but output corpus has {}",
            ref_corpus.len(),
            out_corpus.len()
        )));
    }
    Ok(())
}

/// Constructs a scorer with default parameters from a profile string.
///
/// Known profiles are `"bleu"`, `"sentbleu"`, `"length"`, and `"ribes"`.
/// The case-insensitivity flag is ignored by the length-ratio scorer.
pub fn create_scorer_from_profile(
    profile: &str,
    case_insensitive: bool,
) -> Result<Box<dyn Scorer>> {
    debug!("creating scorer for profile {profile:?} (case_insensitive={case_insensitive})");
    match profile {
        "bleu" => Ok(Box::new(BleuScorer::new(case_insensitive))),
        "sentbleu" => Ok(Box::new(SentBleuScorer::new(case_insensitive))),
        "length" => Ok(Box::new(LengthScorer::new())),
        "ribes" => Ok(Box::new(RibesScorer::new(case_insensitive))),
        other => Err(ScoreError::InvalidProfile(other.to_string())),
    }
}
