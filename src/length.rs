use crate::corpus::Sentence;
use crate::error::{Result, ScoreError};
use crate::scorer::{check_aligned, ScoreResult, Scorer};

/// Ratio of total output tokens to total reference tokens, with the raw
/// totals reported in the auxiliary summary.
#[derive(Debug, Clone, Default)]
pub struct LengthScorer;

impl LengthScorer {
    /// Creates a length-ratio scorer.
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for LengthScorer {
    fn score_corpus(
        &self,
        ref_corpus: &[Sentence],
        out_corpus: &[Sentence],
    ) -> Result<ScoreResult> {
        check_aligned(ref_corpus, out_corpus)?;
        let ref_words: usize = ref_corpus.iter().map(Vec::len).sum();
        let out_words: usize = out_corpus.iter().map(Vec::len).sum();
        if ref_words == 0 {
            return Err(ScoreError::InvalidInput(
                "reference corpus contains no tokens, length ratio is undefined".to_string(),
            ));
        }
        Ok(ScoreResult {
            score: out_words as f64 / ref_words as f64,
            summary: Some(format!("ref={ref_words}, out={out_words}")),
        })
    }

    fn name(&self) -> &'static str {
        "length ratio"
    }
}
