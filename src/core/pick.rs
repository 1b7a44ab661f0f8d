/// Random word selection — uniform, without replacement until exhausted.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

/// Pick a word uniformly at random from `words`, excluding anything in
/// `used`. Once every candidate has been used, picks fall back to the
/// full list (repeats allowed) rather than failing. Returns `None`
/// only for an empty candidate list — the one case that must be
/// guarded before sampling.
pub fn pick_word<'a>(
    words: &'a [String],
    used: &FxHashSet<&str>,
    rng: &mut StdRng,
) -> Option<&'a str> {
    if words.is_empty() {
        return None;
    }

    let unused: Vec<&'a str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| !used.contains(w))
        .collect();

    if unused.is_empty() {
        // Exhausted: every word is fair game again.
        words.choose(rng).map(String::as_str)
    } else {
        unused.choose(rng).copied()
    }
}
