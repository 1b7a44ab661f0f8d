//! WASM bindings for madlib-engine — powers the collaborative web app.

use indexmap::IndexMap;
use wasm_bindgen::prelude::*;

use madlib_engine::core::engine::StoryEngine;
use madlib_engine::core::extract::extract_categories;
use madlib_engine::core::render::{split_reveal_chunks, Decoration, TextColor};
use madlib_engine::samples::sample_templates;
use madlib_engine::schema::wordbank::WordBank;
use madlib_engine::store::generate_share_code;

use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractionOutput {
    categories: Vec<String>,
    total_words_needed: IndexMap<String, usize>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SkippedOutput {
    category: String,
    reason: &'static str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct StoryOutput {
    story: String,
    chunks: Vec<String>,
    skipped: Vec<SkippedOutput>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SampleOutput {
    title: String,
    text: String,
    share_id: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ShortfallOutput {
    category: String,
    needed: usize,
    available: usize,
}

fn parse_decoration(name: &str) -> Result<Decoration, JsError> {
    match name {
        "plain" => Ok(Decoration::Plain),
        "code" => Ok(Decoration::Code),
        other => TextColor::parse(other)
            .map(Decoration::Color)
            .ok_or_else(|| JsError::new(&format!("Unknown decoration: {other}"))),
    }
}

// ---------------------------------------------------------------------------
// MadlibSession — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct MadlibSession {
    engine: StoryEngine,
}

#[wasm_bindgen]
impl MadlibSession {
    /// Create a session with a seed and a decoration name ("plain",
    /// "code", or one of the color names, e.g. "celery").
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, decoration: &str) -> Result<MadlibSession, JsError> {
        let decoration = parse_decoration(decoration)?;
        let engine = StoryEngine::builder().seed(seed).decoration(decoration).build();
        Ok(MadlibSession { engine })
    }

    /// Extract categories and word demand from template text.
    /// Returns `{"categories": [...], "totalWordsNeeded": {...}}`.
    pub fn extract(&self, text: &str) -> Result<String, JsError> {
        let extraction = extract_categories(text);
        let output = ExtractionOutput {
            categories: extraction.categories,
            total_words_needed: extraction.total_words_needed,
        };
        serde_json::to_string(&output)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Generate a story from template text and a word bank.
    ///
    /// Expected word bank JSON shape:
    /// ```json
    /// {
    ///   "categories": ["animal", "adjective"],
    ///   "words": { "animal": ["fox", "dog"], "adjective": ["lazy"] }
    /// }
    /// ```
    pub fn generate(&mut self, text: &str, wordbank_json: &str) -> Result<String, JsError> {
        let bank: WordBank = serde_json::from_str(wordbank_json)
            .map_err(|e| JsError::new(&format!("Invalid word bank JSON: {e}")))?;

        let story = self.engine.generate(text, &bank);
        let output = StoryOutput {
            chunks: split_reveal_chunks(&story.text),
            skipped: story
                .skipped
                .iter()
                .map(|s| SkippedOutput {
                    category: s.category.clone(),
                    reason: match s.reason {
                        madlib_engine::core::generate::SkipReason::UnknownCategory => {
                            "unknownCategory"
                        }
                        madlib_engine::core::generate::SkipReason::NoWords => "noWords",
                    },
                })
                .collect(),
            story: story.text,
        };
        serde_json::to_string(&output)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Categories whose word lists fall short of the template's demand.
    pub fn shortfalls(&self, text: &str, wordbank_json: &str) -> Result<String, JsError> {
        let bank: WordBank = serde_json::from_str(wordbank_json)
            .map_err(|e| JsError::new(&format!("Invalid word bank JSON: {e}")))?;

        let shortfalls: Vec<ShortfallOutput> = self
            .engine
            .shortfalls(text, &bank)
            .into_iter()
            .map(|s| ShortfallOutput {
                category: s.category,
                needed: s.needed,
                available: s.available,
            })
            .collect();
        serde_json::to_string(&shortfalls)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return the built-in sample templates as a JSON array.
    pub fn samples() -> String {
        let samples: Vec<SampleOutput> = sample_templates()
            .into_iter()
            .map(|t| SampleOutput {
                title: t.title,
                text: t.text,
                share_id: t.share_id,
            })
            .collect();
        serde_json::to_string(&samples).unwrap_or_else(|_| "[]".to_string())
    }

    /// Generate a fresh share code from a seed.
    pub fn share_code(seed: u64) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_share_code(&mut rng)
    }
}
