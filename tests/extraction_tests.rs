/// Category extraction integration tests — demand counting and ordering.

use madlib_engine::core::extract::extract_categories;
use madlib_engine::samples::sample_templates;

#[test]
fn unlinked_occurrences_count_individually() {
    let extraction = extract_categories("[name] met [name]");
    assert_eq!(extraction.total_words_needed["name"], 2);
}

#[test]
fn linked_occurrences_count_once_per_id() {
    let extraction = extract_categories("[name:1] and [name:1] and [name:2]");
    assert_eq!(extraction.total_words_needed["name"], 2);
}

#[test]
fn unlinked_and_linked_add_up() {
    let extraction = extract_categories("[name] and [name:1]");
    assert_eq!(extraction.total_words_needed["name"], 2);
}

#[test]
fn first_seen_order_is_stable() {
    let text = "A [noun] will [verb] the [adjective] [noun] before it can [verb].";
    let first = extract_categories(text);
    let second = extract_categories(text);

    assert_eq!(first.categories, ["noun", "verb", "adjective"]);
    assert_eq!(first, second);
}

#[test]
fn camel_case_and_spaced_names_collapse() {
    let extraction = extract_categories("[girlName] talked to [girl name] about [GirlName]");
    assert_eq!(extraction.categories, ["girl name"]);
    assert_eq!(extraction.total_words_needed["girl name"], 3);
}

#[test]
fn all_caps_name_is_a_distinct_category() {
    // No lower→upper transition means no split points.
    let extraction = extract_categories("[girlName] and [GIRLNAME]");
    assert_eq!(extraction.categories, ["girl name", "girlname"]);
}

#[test]
fn malformed_brackets_are_not_categories() {
    let extraction = extract_categories("broken [ and [x! and [unclosed plus []");
    assert!(extraction.categories.is_empty());
}

#[test]
fn demand_covers_every_category() {
    for sample in sample_templates() {
        let extraction = extract_categories(&sample.text);
        for category in &extraction.categories {
            assert!(
                extraction.total_words_needed[category] >= 1,
                "category '{}' in '{}' has zero demand",
                category,
                sample.title
            );
        }
        assert_eq!(
            extraction.categories.len(),
            extraction.total_words_needed.len()
        );
    }
}

#[test]
fn knight_sample_demand() {
    let samples = sample_templates();
    let extraction = extract_categories(&samples[2].text);

    // One linked group per id, plus unlinked uses.
    assert_eq!(extraction.total_words_needed["name"], 1);
    assert_eq!(extraction.total_words_needed["land animal"], 1);
    assert_eq!(extraction.total_words_needed["adjective"], 2);
    assert_eq!(extraction.total_words_needed["noun"], 2);
    assert_eq!(extraction.total_words_needed["verb"], 1);
    assert_eq!(extraction.total_words_needed["place"], 3);
}
