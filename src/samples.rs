//! Built-in sample templates, used by the tools and the web demo.

use crate::schema::template::Template;

const SAMPLE_TEXTS: [(&str, &str); 3] = [
    (
        "Origin Story",
        "I used to be a normal [occupation] until one [adjective] day when I \
         was bitten by a radioactive [animal]. Suddenly, I could [verb] faster \
         than a [vehicle] and [verb] higher than a [noun]! Now I fight crime \
         as the [adjective] [noun]-[gender], protector of [place]!",
    ),
    (
        "Secret Recipe",
        "To make the world's best [food], you'll need [number] cups of \
         [noun plural], a pinch of [adjective] [noun], and [number] [adjective] \
         [animal plural]. Mix everything in a [adjective] [container] and \
         [verb] for [number] minutes. Serve to your [adjective] [family member] \
         and watch them [verb]!",
    ),
    (
        "The Knight's Errand",
        "The brave knight [Name:1] rode their [adjective:1] [land animal:1] to \
         the [place:1]. At the [place:1], [name:1] found a [adjective:2] \
         [noun:1]. \"I must bring this [noun:1] to [place],\" said [name:1]. \
         But suddenly, the [land animal:1] started to [verb:1]! \"Stop \
         [verb:1]ing!\" shouted [name:1]. \"We need to get this [adjective:2] \
         [noun:1] away before the [adjective:1] [noun:2] arrives!\" But \
         instead they found themselves at [place]!",
    ),
];

/// The built-in demo templates. Share ids are stable small indices so
/// the demos never collide with generated share codes.
pub fn sample_templates() -> Vec<Template> {
    SAMPLE_TEXTS
        .iter()
        .enumerate()
        .map(|(idx, (title, text))| Template::new(*title, *text, idx.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::extract_categories;

    #[test]
    fn three_samples_with_distinct_ids() {
        let samples = sample_templates();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].share_id, "0");
        assert_eq!(samples[2].share_id, "2");
    }

    #[test]
    fn samples_parse_into_categories() {
        for sample in sample_templates() {
            let extraction = extract_categories(&sample.text);
            assert!(
                !extraction.categories.is_empty(),
                "sample '{}' has no categories",
                sample.title
            );
        }
    }

    #[test]
    fn knight_sample_uses_linked_ids() {
        let samples = sample_templates();
        let knight = &samples[2];
        let extraction = extract_categories(&knight.text);

        // [Name:1] and [name:1] normalize together; the whole linked
        // group needs a single word.
        assert_eq!(extraction.total_words_needed["name"], 1);
        assert_eq!(extraction.total_words_needed["land animal"], 1);
        // Two distinct ids plus one unlinked use of [place].
        assert_eq!(extraction.total_words_needed["place"], 3);
    }
}
