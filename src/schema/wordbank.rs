/// Word bank — per-share collection of candidate words grouped by category.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Candidate words for every category a template uses.
///
/// Invariant: every key of `words` appears in `categories`. Category
/// order is discovery/display order; word order within a category is
/// irrelevant. A bank is always consumed as a read-only snapshot —
/// operations that change it return a fresh bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WordBank {
    pub categories: Vec<String>,
    pub words: HashMap<String, Vec<String>>,
}

/// A category whose candidate list is shorter than the demand computed
/// by the extractor. Generation still succeeds (words get reused), so
/// this is advisory, for pre-generation warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub category: String,
    pub needed: usize,
    pub available: usize,
}

impl WordBank {
    /// Build an empty bank covering the given categories.
    pub fn for_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let words = categories
            .iter()
            .map(|c| (c.clone(), Vec::new()))
            .collect();
        Self { categories, words }
    }

    /// Words available for a category. Unknown categories read as empty.
    pub fn words_for(&self, category: &str) -> &[String] {
        self.words.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Union this bank with contributions from another, per category.
    ///
    /// Values are deduplicated case-sensitively; first occurrence wins
    /// the position. Categories come from `self` — contributions to
    /// categories this bank does not track are dropped. Neither input
    /// is mutated.
    pub fn merge(&self, incoming: &WordBank) -> WordBank {
        let mut words = HashMap::new();
        for category in &self.categories {
            let mut seen = FxHashSet::default();
            let mut merged = Vec::new();
            for word in self
                .words_for(category)
                .iter()
                .chain(incoming.words_for(category))
            {
                if seen.insert(word.as_str()) {
                    merged.push(word.clone());
                }
            }
            words.insert(category.clone(), merged);
        }
        WordBank {
            categories: self.categories.clone(),
            words,
        }
    }

    /// A copy of this bank with every word list emptied. Used when a
    /// contributor wants a blank slate for the same categories.
    pub fn stripped(&self) -> WordBank {
        WordBank::for_categories(self.categories.iter().cloned())
    }

    /// Compare the extractor's demand against what this bank holds.
    /// Returns one entry per category that cannot satisfy a full
    /// generation pass without reuse, in demand order.
    pub fn shortfalls(&self, demand: &IndexMap<String, usize>) -> Vec<Shortfall> {
        demand
            .iter()
            .filter_map(|(category, &needed)| {
                let available = self.words_for(category).len();
                (available < needed).then(|| Shortfall {
                    category: category.clone(),
                    needed,
                    available,
                })
            })
            .collect()
    }
}
