use std::collections::HashMap;

use crate::corpus::lower_sentence;

/// Computes a RIBES-style word-order alignment between a reference and an
/// output sentence.
///
/// Each output token that occurs in the reference is mapped to a reference
/// position. A token occurring exactly once in the reference aligns directly;
/// an ambiguous token is resolved by growing forward and backward n-gram
/// context up to `order` tokens until the context occurs exactly once in the
/// reference. Tokens that stay ambiguous, and tokens absent from the
/// reference, are skipped, so the result length is at most
/// `min(ref_sent.len(), out_sent.len())`.
///
/// Entries are reference token indices in output order, suitable for rank
/// statistics such as Kendall's tau.
pub fn ngram_context_align(
    ref_sent: &[String],
    out_sent: &[String],
    order: usize,
    case_insensitive: bool,
) -> Vec<usize> {
    let order = order.max(1);

    let (ref_lowered, out_lowered);
    let (ref_tokens, out_tokens): (&[String], &[String]) = if case_insensitive {
        ref_lowered = lower_sentence(ref_sent);
        out_lowered = lower_sentence(out_sent);
        (&ref_lowered, &out_lowered)
    } else {
        (ref_sent, out_sent)
    };

    // Start positions of every reference n-gram, per order 1..=order.
    let mut positions: Vec<HashMap<&[String], Vec<usize>>> = Vec::with_capacity(order);
    for n in 1..=order {
        let mut map: HashMap<&[String], Vec<usize>> = HashMap::new();
        for (start, gram) in ref_tokens.windows(n).enumerate() {
            map.entry(gram).or_default().push(start);
        }
        positions.push(map);
    }

    let mut alignment = Vec::new();
    for i in 0..out_tokens.len() {
        let starts = match positions[0].get(&out_tokens[i..=i]) {
            Some(starts) => starts,
            None => continue,
        };
        if starts.len() == 1 {
            alignment.push(starts[0]);
            continue;
        }
        for n in 2..=order {
            // Forward context: the ambiguous token leads the window.
            if i + n <= out_tokens.len() {
                if let Some(starts) = positions[n - 1].get(&out_tokens[i..i + n]) {
                    if starts.len() == 1 {
                        alignment.push(starts[0]);
                        break;
                    }
                }
            }
            // Backward context: the ambiguous token closes the window.
            if i + 1 >= n {
                if let Some(starts) = positions[n - 1].get(&out_tokens[i + 1 - n..=i]) {
                    if starts.len() == 1 {
                        alignment.push(starts[0] + n - 1);
                        break;
                    }
                }
            }
        }
    }
    alignment
}
