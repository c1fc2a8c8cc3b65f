//! Bootstrap resampling over cached BLEU statistics.
//!
//! Builds the per-sentence sufficient statistics once, then rescores a
//! thousand resamples drawn with repetition. Each rescore only touches the
//! cached counters, never the corpora.

use mteval_rs::{create_scorer_from_profile, tokenize, Corpus};
use rand::Rng;

const RESAMPLES: usize = 1000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let reference: Corpus = [
        "the cat sat on the mat",
        "a dog barked at the moon",
        "birds sing in the morning",
        "rain fell all night long",
        "the train arrived on time",
        "she read the letter twice",
    ]
    .iter()
    .map(|line| tokenize(line))
    .collect();
    let output: Corpus = [
        "the cat sat on the mat",
        "a dog barked at a moon",
        "birds sing early in the morning",
        "rain fell through the night",
        "the train was on time",
        "she read the letter",
    ]
    .iter()
    .map(|line| tokenize(line))
    .collect();

    let scorer = create_scorer_from_profile("bleu", false)?;
    let cache = scorer
        .cache_stats(&reference, &output)?
        .expect("BLEU supports cached statistics");

    let all_ids: Vec<usize> = (0..cache.len()).collect();
    let full = scorer.score_cached_corpus(&all_ids, &cache)?;
    println!("full corpus BLEU: {:.4}", full.score);

    let mut rng = rand::thread_rng();
    let mut scores = Vec::with_capacity(RESAMPLES);
    for _ in 0..RESAMPLES {
        let ids: Vec<usize> = (0..cache.len())
            .map(|_| rng.gen_range(0..cache.len()))
            .collect();
        scores.push(scorer.score_cached_corpus(&ids, &cache)?.score);
    }
    scores.sort_by(|a, b| a.total_cmp(b));

    let lower = scores[RESAMPLES / 40];
    let upper = scores[RESAMPLES - 1 - RESAMPLES / 40];
    println!("95% bootstrap interval over {RESAMPLES} resamples: [{lower:.4}, {upper:.4}]");
    Ok(())
}
