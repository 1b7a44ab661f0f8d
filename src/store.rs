//! Store collaborators — word bank and template persistence, share codes.
//!
//! The engine itself never does I/O; these traits are the seams the
//! surrounding application plugs a backend into. The file-backed
//! implementations here persist RON under a root directory and are the
//! reference backend for tools and tests. Every operation is keyed by
//! share id and idempotent, so retrying a failed call with the same
//! input is always safe.

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::extract::extract_categories;
use crate::schema::template::Template;
use crate::schema::wordbank::WordBank;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no word bank found for share id: {share_id}")]
    NotFound { share_id: String },
    #[error("store call timed out after {seconds} seconds")]
    TimedOut { seconds: u64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Length of a human-shareable code.
pub const SHARE_CODE_LENGTH: usize = 5;

/// Unambiguous alphabet for share codes: digits and uppercase letters
/// minus the easily-confused glyphs 0/O, 1/I/L.
pub const SHARE_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// Generate a fresh share code.
pub fn generate_share_code(rng: &mut StdRng) -> String {
    (0..SHARE_CODE_LENGTH)
        .map(|_| SHARE_CODE_ALPHABET[rng.gen_range(0..SHARE_CODE_ALPHABET.len())] as char)
        .collect()
}

/// True when `code` has the right length and draws only from the
/// share-code alphabet.
pub fn is_valid_share_code(code: &str) -> bool {
    code.len() == SHARE_CODE_LENGTH
        && code.bytes().all(|b| SHARE_CODE_ALPHABET.contains(&b))
}

/// Shared word bank storage, keyed by a template's share id.
///
/// Implementations own merge semantics across concurrent contributors:
/// `update` unions the contribution into the stored bank per category,
/// deduplicating case-sensitively. Remote backends are expected to
/// enforce a request timeout (on the order of 30s) and surface it as
/// `StoreError::TimedOut`.
pub trait WordBankStore {
    fn fetch(&self, share_id: &str) -> Result<WordBank, StoreError>;

    /// Merge a contribution into the stored bank and return the result.
    fn update(&self, share_id: &str, contribution: &WordBank) -> Result<WordBank, StoreError>;

    fn exists(&self, share_id: &str) -> Result<bool, StoreError>;

    /// Seed an empty bank from the template's categories, unless one
    /// already exists under its share id.
    fn create_for_template(&self, template: &Template) -> Result<(), StoreError>;

    fn delete(&self, share_id: &str) -> Result<(), StoreError>;
}

/// Saved-template storage (the authoring surface's local list).
pub trait TemplateStore {
    /// Insert or overwrite the template with the same share id.
    fn save(&self, template: &Template) -> Result<(), StoreError>;

    fn get(&self, share_id: &str) -> Result<Option<Template>, StoreError>;

    fn all(&self) -> Result<Vec<Template>, StoreError>;

    fn delete(&self, share_id: &str) -> Result<(), StoreError>;
}

/// File-backed word bank store: one RON file per share id under a root
/// directory. Never returns `TimedOut`; that variant exists for remote
/// backends implementing the same trait.
pub struct FileWordBankStore {
    root: PathBuf,
}

impl FileWordBankStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn bank_path(&self, share_id: &str) -> PathBuf {
        self.root.join(format!("{share_id}.ron"))
    }

    fn write_bank(&self, share_id: &str, bank: &WordBank) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        let serialized = ron::ser::to_string_pretty(bank, ron::ser::PrettyConfig::default())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        std::fs::write(self.bank_path(share_id), serialized)?;
        Ok(())
    }
}

impl WordBankStore for FileWordBankStore {
    fn fetch(&self, share_id: &str) -> Result<WordBank, StoreError> {
        let path = self.bank_path(share_id);
        if !path.exists() {
            return Err(StoreError::NotFound {
                share_id: share_id.to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }

    fn update(&self, share_id: &str, contribution: &WordBank) -> Result<WordBank, StoreError> {
        let existing = self.fetch(share_id)?;
        let merged = existing.merge(contribution);
        self.write_bank(share_id, &merged)?;
        Ok(merged)
    }

    fn exists(&self, share_id: &str) -> Result<bool, StoreError> {
        Ok(self.bank_path(share_id).exists())
    }

    fn create_for_template(&self, template: &Template) -> Result<(), StoreError> {
        if self.exists(&template.share_id)? {
            return Ok(());
        }
        let extraction = extract_categories(&template.text);
        let bank = WordBank::for_categories(extraction.categories);
        self.write_bank(&template.share_id, &bank)
    }

    fn delete(&self, share_id: &str) -> Result<(), StoreError> {
        let path = self.bank_path(share_id);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// File-backed template store: the whole saved list in a single RON
/// file, read and rewritten per operation.
pub struct FileTemplateStore {
    path: PathBuf,
}

#[derive(Serialize, Deserialize, Default)]
struct TemplateList {
    templates: Vec<Template>,
}

impl FileTemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_list(&self) -> Result<TemplateList, StoreError> {
        if !self.path.exists() {
            return Ok(TemplateList::default());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(ron::from_str(&contents)?)
    }

    fn write_list(&self, list: &TemplateList) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if parent != Path::new("") {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = ron::ser::to_string_pretty(list, ron::ser::PrettyConfig::default())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

impl TemplateStore for FileTemplateStore {
    fn save(&self, template: &Template) -> Result<(), StoreError> {
        let mut list = self.read_list()?;
        match list
            .templates
            .iter_mut()
            .find(|t| t.share_id == template.share_id)
        {
            Some(existing) => {
                existing.title = template.title.clone();
                existing.text = template.text.clone();
            }
            None => list.templates.push(template.clone()),
        }
        self.write_list(&list)
    }

    fn get(&self, share_id: &str) -> Result<Option<Template>, StoreError> {
        let list = self.read_list()?;
        Ok(list.templates.into_iter().find(|t| t.share_id == share_id))
    }

    fn all(&self) -> Result<Vec<Template>, StoreError> {
        Ok(self.read_list()?.templates)
    }

    fn delete(&self, share_id: &str) -> Result<(), StoreError> {
        let mut list = self.read_list()?;
        list.templates.retain(|t| t.share_id != share_id);
        self.write_list(&list)
    }
}
