/// Presentation helpers — substitution markers and reveal chunking.
///
/// Everything here is cosmetic. The generation contract itself is
/// decoration-agnostic; a rendering surface decides how substituted
/// words are marked up and how the finished story is revealed.

use serde::{Deserialize, Serialize};

/// Highlight colors a rendering surface may attach to substituted words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Gray,
    Red,
    Orange,
    Yellow,
    Chartreuse,
    Celery,
    Green,
    Seafoam,
    Cyan,
    Blue,
    Indigo,
    Purple,
    Fuchsia,
    Magenta,
}

impl TextColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Chartreuse => "chartreuse",
            Self::Celery => "celery",
            Self::Green => "green",
            Self::Seafoam => "seafoam",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Purple => "purple",
            Self::Fuchsia => "fuchsia",
            Self::Magenta => "magenta",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gray" => Some(Self::Gray),
            "red" => Some(Self::Red),
            "orange" => Some(Self::Orange),
            "yellow" => Some(Self::Yellow),
            "chartreuse" => Some(Self::Chartreuse),
            "celery" => Some(Self::Celery),
            "green" => Some(Self::Green),
            "seafoam" => Some(Self::Seafoam),
            "cyan" => Some(Self::Cyan),
            "blue" => Some(Self::Blue),
            "indigo" => Some(Self::Indigo),
            "purple" => Some(Self::Purple),
            "fuchsia" => Some(Self::Fuchsia),
            "magenta" => Some(Self::Magenta),
            _ => None,
        }
    }
}

/// How a substituted word is marked in the generated story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoration {
    /// The bare word, no markup.
    #[default]
    Plain,
    /// Inline-code marker: `` `word` ``.
    Code,
    /// Inline-code marker with a color tag: `` `celery|word` ``.
    Color(TextColor),
}

impl Decoration {
    pub fn apply(&self, word: &str) -> String {
        match self {
            Self::Plain => word.to_string(),
            Self::Code => format!("`{word}`"),
            Self::Color(color) => format!("`{}|{word}`", color.as_str()),
        }
    }
}

/// Split the inner text of a substitution marker into its color tag and
/// word. Inverse of `Decoration::apply` for the `Code`/`Color` forms,
/// minus the backticks. Text without a recognizable tag comes back
/// unchanged.
pub fn parse_color_marker(inner: &str) -> (Option<TextColor>, &str) {
    if let Some((prefix, rest)) = inner.split_once('|') {
        if let Some(color) = TextColor::parse(prefix) {
            return (Some(color), rest);
        }
    }
    (None, inner)
}

/// Split a finished story into paragraph-like chunks at blank lines,
/// for staggered reveal. Whitespace-only lines count as blank.
pub fn split_reveal_chunks(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Capitalize the first character of a string, for category labels.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoration_plain_passes_through() {
        assert_eq!(Decoration::Plain.apply("fox"), "fox");
    }

    #[test]
    fn decoration_code_wraps_in_backticks() {
        assert_eq!(Decoration::Code.apply("fox"), "`fox`");
    }

    #[test]
    fn decoration_color_prepends_tag() {
        assert_eq!(
            Decoration::Color(TextColor::Celery).apply("fox"),
            "`celery|fox`"
        );
    }

    #[test]
    fn parse_color_marker_round_trip() {
        let (color, word) = parse_color_marker("celery|fox");
        assert_eq!(color, Some(TextColor::Celery));
        assert_eq!(word, "fox");
    }

    #[test]
    fn parse_color_marker_unknown_tag() {
        let (color, word) = parse_color_marker("sparkle|fox");
        assert_eq!(color, None);
        assert_eq!(word, "sparkle|fox");
    }

    #[test]
    fn parse_color_marker_plain_word() {
        assert_eq!(parse_color_marker("fox"), (None, "fox"));
    }

    #[test]
    fn color_names_round_trip() {
        for color in [
            TextColor::Gray,
            TextColor::Celery,
            TextColor::Seafoam,
            TextColor::Magenta,
        ] {
            assert_eq!(TextColor::parse(color.as_str()), Some(color));
        }
    }

    #[test]
    fn split_chunks_on_blank_lines() {
        let story = "Once upon a time.\n\nThe middle part.\n   \nThe end.";
        assert_eq!(
            split_reveal_chunks(story),
            ["Once upon a time.", "The middle part.", "The end."]
        );
    }

    #[test]
    fn split_chunks_keeps_interior_newlines() {
        let story = "line one\nline two\n\nline three";
        assert_eq!(
            split_reveal_chunks(story),
            ["line one\nline two", "line three"]
        );
    }

    #[test]
    fn split_chunks_single_paragraph() {
        assert_eq!(split_reveal_chunks("just one"), ["just one"]);
    }

    #[test]
    fn split_chunks_empty_text() {
        assert!(split_reveal_chunks("").is_empty());
    }

    #[test]
    fn capitalize_basic() {
        assert_eq!(capitalize("my string"), "My string");
        assert_eq!(capitalize(""), "");
    }
}
