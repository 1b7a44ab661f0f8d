/// Store integration tests — file-backed persistence, merge semantics,
/// and typed failure handling.

use madlib_engine::schema::template::Template;
use madlib_engine::schema::wordbank::WordBank;
use madlib_engine::store::{
    FileTemplateStore, FileWordBankStore, StoreError, TemplateStore, WordBankStore,
};
use std::cell::Cell;
use std::collections::HashMap;

fn bank(entries: &[(&str, &[&str])]) -> WordBank {
    WordBank {
        categories: entries.iter().map(|(c, _)| c.to_string()).collect(),
        words: entries
            .iter()
            .map(|(c, ws)| (c.to_string(), ws.iter().map(|w| w.to_string()).collect()))
            .collect::<HashMap<_, _>>(),
    }
}

#[test]
fn create_for_template_seeds_empty_bank() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileWordBankStore::new(dir.path());

    let template = Template::new(
        "Zoo Story",
        "The [animal] jumped over the [adjective] [animal].",
        "AB2CD",
    );
    store.create_for_template(&template).unwrap();

    assert!(store.exists("AB2CD").unwrap());
    let fetched = store.fetch("AB2CD").unwrap();
    assert_eq!(fetched.categories, ["animal", "adjective"]);
    assert!(fetched.words_for("animal").is_empty());
}

#[test]
fn create_for_template_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileWordBankStore::new(dir.path());
    let template = Template::new("T", "a [noun]", "AB2CD");

    store.create_for_template(&template).unwrap();
    store
        .update("AB2CD", &bank(&[("noun", &["fox"])]))
        .unwrap();

    // A second create must not clobber contributed words.
    store.create_for_template(&template).unwrap();
    assert_eq!(store.fetch("AB2CD").unwrap().words_for("noun"), ["fox"]);
}

#[test]
fn update_merges_and_dedups_contributions() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileWordBankStore::new(dir.path());
    store
        .create_for_template(&Template::new("T", "a [noun]", "AB2CD"))
        .unwrap();

    store
        .update("AB2CD", &bank(&[("noun", &["fox", "dog"])]))
        .unwrap();
    let merged = store
        .update("AB2CD", &bank(&[("noun", &["dog", "cat"])]))
        .unwrap();

    assert_eq!(merged.words_for("noun"), ["fox", "dog", "cat"]);
    // And the merged state is what was persisted.
    assert_eq!(store.fetch("AB2CD").unwrap(), merged);
}

#[test]
fn fetch_missing_bank_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileWordBankStore::new(dir.path());

    match store.fetch("ZZZZZ") {
        Err(StoreError::NotFound { share_id }) => assert_eq!(share_id, "ZZZZZ"),
        other => panic!("expected NotFound, got {:?}", other.map(|b| b.categories)),
    }
}

#[test]
fn delete_removes_the_bank() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileWordBankStore::new(dir.path());
    store
        .create_for_template(&Template::new("T", "a [noun]", "AB2CD"))
        .unwrap();

    store.delete("AB2CD").unwrap();
    assert!(!store.exists("AB2CD").unwrap());
    // Deleting again is fine.
    store.delete("AB2CD").unwrap();
}

#[test]
fn template_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTemplateStore::new(dir.path().join("templates.ron"));

    let first = Template::new("First", "a [noun]", "AB2CD");
    let second = Template::new("Second", "a [verb]", "EF3GH");
    store.save(&first).unwrap();
    store.save(&second).unwrap();

    assert_eq!(store.all().unwrap().len(), 2);
    assert_eq!(store.get("AB2CD").unwrap(), Some(first));
    assert_eq!(store.get("XXXXX").unwrap(), None);
}

#[test]
fn template_store_save_upserts_by_share_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTemplateStore::new(dir.path().join("templates.ron"));

    store
        .save(&Template::new("Draft", "a [noun]", "AB2CD"))
        .unwrap();
    store
        .save(&Template::new("Final", "a [noun] and a [verb]", "AB2CD"))
        .unwrap();

    let all = store.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Final");
}

#[test]
fn template_store_delete_filters_by_share_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTemplateStore::new(dir.path().join("templates.ron"));

    store.save(&Template::new("A", "x", "AB2CD")).unwrap();
    store.save(&Template::new("B", "y", "EF3GH")).unwrap();
    store.delete("AB2CD").unwrap();

    let all = store.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].share_id, "EF3GH");
}

/// A store that times out a fixed number of times before succeeding,
/// standing in for a remote backend. Store operations are keyed and
/// idempotent, so callers may retry the same input after `TimedOut`.
struct FlakyWordBankStore {
    inner: FileWordBankStore,
    failures_left: Cell<u32>,
}

impl FlakyWordBankStore {
    fn failing(dir: &std::path::Path, failures: u32) -> Self {
        Self {
            inner: FileWordBankStore::new(dir),
            failures_left: Cell::new(failures),
        }
    }

    fn trip(&self) -> Result<(), StoreError> {
        let left = self.failures_left.get();
        if left > 0 {
            self.failures_left.set(left - 1);
            return Err(StoreError::TimedOut { seconds: 30 });
        }
        Ok(())
    }
}

impl WordBankStore for FlakyWordBankStore {
    fn fetch(&self, share_id: &str) -> Result<WordBank, StoreError> {
        self.trip()?;
        self.inner.fetch(share_id)
    }

    fn update(&self, share_id: &str, contribution: &WordBank) -> Result<WordBank, StoreError> {
        self.trip()?;
        self.inner.update(share_id, contribution)
    }

    fn exists(&self, share_id: &str) -> Result<bool, StoreError> {
        self.trip()?;
        self.inner.exists(share_id)
    }

    fn create_for_template(&self, template: &Template) -> Result<(), StoreError> {
        self.trip()?;
        self.inner.create_for_template(template)
    }

    fn delete(&self, share_id: &str) -> Result<(), StoreError> {
        self.trip()?;
        self.inner.delete(share_id)
    }
}

#[test]
fn timed_out_update_retries_with_same_input() {
    let dir = tempfile::tempdir().unwrap();
    FileWordBankStore::new(dir.path())
        .create_for_template(&Template::new("T", "a [noun]", "AB2CD"))
        .unwrap();

    let store = FlakyWordBankStore::failing(dir.path(), 2);
    let contribution = bank(&[("noun", &["fox"])]);

    let mut attempts = 0;
    let merged = loop {
        attempts += 1;
        match store.update("AB2CD", &contribution) {
            Ok(merged) => break merged,
            Err(StoreError::TimedOut { seconds }) => assert_eq!(seconds, 30),
            Err(other) => panic!("unexpected error: {other}"),
        }
    };

    assert_eq!(attempts, 3);
    assert_eq!(merged.words_for("noun"), ["fox"]);
}
