//! Scores a toy reference/output pair with every metric profile.
//!
//! Run with `RUST_LOG=debug` to see the factory and cache seams.

use mteval_rs::{create_scorer_from_profile, tokenize, Corpus};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let reference: Corpus = [
        "the cat sat on the mat",
        "a dog barked at the moon",
        "birds sing in the morning",
    ]
    .iter()
    .map(|line| tokenize(line))
    .collect();
    let output: Corpus = [
        "the cat sat on a mat",
        "a dog barked at the moon",
        "birds sing early in the morning",
    ]
    .iter()
    .map(|line| tokenize(line))
    .collect();

    for profile in ["bleu", "sentbleu", "ribes", "length"] {
        let scorer = create_scorer_from_profile(profile, false)?;
        let result = scorer.score_corpus(&reference, &output)?;
        match result.summary {
            Some(summary) => println!("{}: {:.4} ({summary})", scorer.name(), result.score),
            None => println!("{}: {:.4}", scorer.name(), result.score),
        }
    }
    Ok(())
}
