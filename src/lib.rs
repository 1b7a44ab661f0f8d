//! Madlib Engine — collaborative fill-in-the-blank story generation.
//!
//! Scans free-form templates for `[category]` placeholders, computes
//! how many distinct words each category needs (numbered ids like
//! `[name:1]` force reuse of one word), and renders finished stories
//! by substituting randomly-chosen, non-repeating words from a shared
//! word bank.

pub mod core;
pub mod samples;
pub mod schema;
pub mod store;
