/// Category extractor — discovers categories and per-category word demand.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::core::template::scan_placeholders;

/// The outcome of scanning a template for categories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryExtraction {
    /// Every distinct category, in first-seen order.
    pub categories: Vec<String>,
    /// Category → minimum distinct words required to generate the
    /// story once, keyed in the same first-seen order.
    pub total_words_needed: IndexMap<String, usize>,
}

#[derive(Default)]
struct Tally {
    unlinked: usize,
    link_ids: FxHashSet<u32>,
}

/// Extract every category a template references and how many distinct
/// words each needs.
///
/// A category's demand is the count of its occurrences carrying no
/// link id, plus one for every distinct link id used with it — linked
/// occurrences share a single word no matter how many times the id
/// repeats. Extraction is pure and deterministic: identical text yields
/// identical output, categories in first-appearance order.
pub fn extract_categories(text: &str) -> CategoryExtraction {
    let mut tallies: IndexMap<String, Tally> = IndexMap::new();

    for placeholder in scan_placeholders(text) {
        let tally = tallies.entry(placeholder.category).or_default();
        match placeholder.link_id {
            Some(id) => {
                tally.link_ids.insert(id);
            }
            None => tally.unlinked += 1,
        }
    }

    let categories = tallies.keys().cloned().collect();
    let total_words_needed = tallies
        .iter()
        .map(|(category, tally)| (category.clone(), tally.unlinked + tally.link_ids.len()))
        .collect();

    CategoryExtraction {
        categories,
        total_words_needed,
    }
}
