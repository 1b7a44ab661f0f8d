/// The story engine: seed management, variants, and pre-generation
/// checks on top of the pure extractor/generator pair.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::extract::extract_categories;
use crate::core::generate::{generate_story, GeneratedStory};
use crate::core::render::Decoration;
use crate::schema::wordbank::{Shortfall, WordBank};

/// Drives repeated generation with reproducible randomness. Built via
/// `StoryEngine::builder()`. Each call advances an internal counter so
/// successive stories differ, while two engines built with the same
/// seed replay byte-identical output.
pub struct StoryEngine {
    decoration: Decoration,
    seed: u64,
    generation_count: u64,
}

/// Builder for constructing a `StoryEngine`.
pub struct StoryEngineBuilder {
    decoration: Decoration,
    seed: u64,
}

impl StoryEngine {
    pub fn builder() -> StoryEngineBuilder {
        StoryEngineBuilder {
            decoration: Decoration::default(),
            seed: 0,
        }
    }

    /// Generate one story from a template against a bank snapshot.
    pub fn generate(&mut self, text: &str, bank: &WordBank) -> GeneratedStory {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(self.generation_count));
        self.generation_count += 1;
        generate_story(text, bank, &mut rng, &self.decoration)
    }

    /// Generate several takes on the same template in one call.
    pub fn generate_variants(
        &mut self,
        text: &str,
        bank: &WordBank,
        count: usize,
    ) -> Vec<GeneratedStory> {
        let base = self.seed.wrapping_add(self.generation_count);
        self.generation_count += 1;

        (0..count)
            .map(|i| {
                // prime stride keeps variant streams apart
                let mut rng =
                    StdRng::seed_from_u64(base.wrapping_add(i as u64 * 7919));
                generate_story(text, bank, &mut rng, &self.decoration)
            })
            .collect()
    }

    /// Categories whose candidate lists fall short of the template's
    /// demand. Generation would still succeed (words get reused); this
    /// lets callers warn before it does.
    pub fn shortfalls(&self, text: &str, bank: &WordBank) -> Vec<Shortfall> {
        bank.shortfalls(&extract_categories(text).total_words_needed)
    }
}

impl StoryEngineBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn build(self) -> StoryEngine {
        StoryEngine {
            decoration: self.decoration,
            seed: self.seed,
            generation_count: 0,
        }
    }
}
