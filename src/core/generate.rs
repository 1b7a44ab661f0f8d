/// Story generator — resolves placeholders against a word bank and
/// substitutes right-to-left over the original offsets.

use rand::rngs::StdRng;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::pick::pick_word;
use crate::core::render::Decoration;
use crate::core::template::{scan_placeholders, Placeholder};
use crate::schema::wordbank::WordBank;

/// Why a placeholder was left unsubstituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The category is missing from the word bank entirely. This is a
    /// contract violation by the caller; the span keeps its literal
    /// bracket text instead of crashing.
    UnknownCategory,
    /// The category exists but its candidate list is empty.
    NoWords,
}

/// A placeholder that could not be substituted, kept as a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSpan {
    pub category: String,
    pub start: usize,
    pub reason: SkipReason,
}

/// The outcome of one generation pass. `text` is always a complete
/// story — best effort when `skipped` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedStory {
    pub text: String,
    pub skipped: Vec<SkippedSpan>,
}

impl GeneratedStory {
    /// True when every placeholder was substituted.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Generate a story by substituting bank words into every placeholder.
///
/// Words are assigned per category without replacement until the
/// category's candidate list is exhausted, after which repeats are
/// allowed. Occurrences sharing a (category, link id) pair resolve to
/// one word, picked once. Assignment walks placeholders in source
/// order, so a fixed rng seed replays the same story
/// occurrence-by-occurrence; substitution is applied from the highest
/// start offset backward so every cut uses the span's offsets in the
/// *original* text. The input text and bank are never mutated.
pub fn generate_story(
    text: &str,
    bank: &WordBank,
    rng: &mut StdRng,
    decoration: &Decoration,
) -> GeneratedStory {
    let spans = scan_placeholders(text);
    let (resolved, skipped) = resolve_words(&spans, bank, rng);

    // Fold descending by start offset; replacements at higher offsets
    // never shift the offsets still to be processed.
    let mut story = text.to_string();
    for (span, word) in resolved.iter().rev() {
        if let Some(word) = word {
            story.replace_range(span.start..span.end, &decoration.apply(word));
        }
    }

    GeneratedStory {
        text: story,
        skipped,
    }
}

/// Assignment pass: one resolved word (or skip) per span, in source
/// order. Linked groups resolve on first encounter and count against
/// the category's used-set exactly once.
fn resolve_words<'a>(
    spans: &'a [Placeholder],
    bank: &'a WordBank,
    rng: &mut StdRng,
) -> (Vec<(&'a Placeholder, Option<&'a str>)>, Vec<SkippedSpan>) {
    let mut used: FxHashMap<&str, FxHashSet<&'a str>> = FxHashMap::default();
    let mut link_cache: FxHashMap<(&str, u32), &'a str> = FxHashMap::default();
    let mut resolved = Vec::with_capacity(spans.len());
    let mut skipped = Vec::new();

    for span in spans {
        if !bank.has_category(&span.category) {
            skipped.push(SkippedSpan {
                category: span.category.clone(),
                start: span.start,
                reason: SkipReason::UnknownCategory,
            });
            resolved.push((span, None));
            continue;
        }

        let words = bank.words_for(&span.category);
        if words.is_empty() {
            skipped.push(SkippedSpan {
                category: span.category.clone(),
                start: span.start,
                reason: SkipReason::NoWords,
            });
            resolved.push((span, None));
            continue;
        }

        let word = match span.link_id {
            Some(id) => {
                let key = (span.category.as_str(), id);
                match link_cache.get(&key) {
                    Some(&cached) => Some(cached),
                    None => {
                        let used_set = used.entry(span.category.as_str()).or_default();
                        let picked = pick_word(words, used_set, rng);
                        if let Some(picked) = picked {
                            link_cache.insert(key, picked);
                            used_set.insert(picked);
                        }
                        picked
                    }
                }
            }
            None => {
                let used_set = used.entry(span.category.as_str()).or_default();
                let picked = pick_word(words, used_set, rng);
                if let Some(picked) = picked {
                    used_set.insert(picked);
                }
                picked
            }
        };

        resolved.push((span, word));
    }

    (resolved, skipped)
}
