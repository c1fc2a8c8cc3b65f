#![deny(missing_docs)]

//! Translation-quality scoring primitives.
//!
//! This crate compares a reference corpus against a system-output corpus with
//! four metrics behind one [`Scorer`] trait: corpus BLEU, sentence-level
//! smoothed BLEU, RIBES, and length ratio. Corpora are ordered sequences of
//! token sequences, aligned by sentence position.
//!
//! ## Quick Start
//! ```
//! use mteval_rs::{create_scorer_from_profile, tokenize};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reference = vec![tokenize("the cat sat"), tokenize("a dog barked")];
//!     let output = vec![tokenize("the cat sat"), tokenize("a dog barked")];
//!
//!     let scorer = create_scorer_from_profile("bleu", false)?;
//!     let result = scorer.score_corpus(&reference, &output)?;
//!     assert!((result.score - 1.0).abs() < 1e-12);
//!     Ok(())
//! }
//! ```
//!
//! ## Cached Statistics
//! The BLEU scorer can precompute per-sentence sufficient statistics once and
//! then score arbitrary multisets of sentence ids in time proportional to the
//! subset, which is what makes bootstrap resampling over large corpora cheap:
//!
//! ```
//! use mteval_rs::{create_scorer_from_profile, tokenize};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reference = vec![tokenize("the cat sat"), tokenize("a dog barked")];
//!     let output = vec![tokenize("the cat sat"), tokenize("a cat barked")];
//!
//!     let scorer = create_scorer_from_profile("bleu", false)?;
//!     let cache = scorer
//!         .cache_stats(&reference, &output)?
//!         .expect("BLEU supports cached statistics");
//!
//!     // Duplicate ids are legal: each occurrence contributes its cached
//!     // statistics again, exactly what resampling with repetition needs.
//!     let resample = scorer.score_cached_corpus(&[0, 0, 1], &cache)?;
//!     assert!(resample.score > 0.0 && resample.score <= 1.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Profiles
//! [`create_scorer_from_profile`] accepts `"bleu"`, `"sentbleu"`, `"ribes"`,
//! and `"length"`. Scorers that do not support an operation say so with
//! [`ScoreError::UnsupportedOperation`] instead of guessing.

mod align;
mod bleu;
mod corpus;
mod error;
mod length;
mod ngram;
mod ribes;
mod scorer;
mod sentbleu;

pub use align::ngram_context_align;
pub use bleu::{BleuScorer, BleuStats};
pub use corpus::{lower, tokenize, Corpus, Sentence};
pub use error::{Result, ScoreError};
pub use length::LengthScorer;
pub use ngram::sent_ngrams;
pub use ribes::RibesScorer;
pub use scorer::{create_scorer_from_profile, ScoreResult, Scorer};
pub use sentbleu::SentBleuScorer;
