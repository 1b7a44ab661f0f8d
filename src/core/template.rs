/// Placeholder grammar — scanning and category normalization.

/// A single placeholder occurrence found in template text.
///
/// Covers both `[name]` and `[name:id]` forms. `start`/`end` are
/// half-open byte offsets into the original text spanning the whole
/// token, brackets included. Placeholders are ephemeral: they are
/// re-derived from the text on every extraction or generation call
/// and carry no persisted identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Normalized category name (lower-cased, camel-case split).
    pub category: String,
    /// Optional link id grouping occurrences that must resolve to the
    /// same word.
    pub link_id: Option<u32>,
    pub start: usize,
    pub end: usize,
}

/// Scan template text for every placeholder occurrence, in source order.
///
/// The grammar is `[` + one or more of {ASCII letter, digit, space} +
/// optional `:` digits + `]`, matched non-overlapping and
/// case-insensitively. Anything that fails the grammar (empty name,
/// unterminated bracket, stray characters) is not a placeholder and is
/// skipped silently — malformed brackets are ordinary story text.
pub fn scan_placeholders(text: &str) -> Vec<Placeholder> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let len = chars.len();
    let mut found = Vec::new();
    let mut i = 0;

    while i < len {
        if chars[i].1 != '[' {
            i += 1;
            continue;
        }
        match match_at(text, &chars, i) {
            Some((placeholder, next)) => {
                found.push(placeholder);
                i = next;
            }
            // Not a placeholder; the next '[' may still start one.
            None => i += 1,
        }
    }

    found
}

/// Attempt to match a placeholder whose `[` sits at `chars[open]`.
/// On success returns the placeholder and the index just past its `]`.
fn match_at(
    text: &str,
    chars: &[(usize, char)],
    open: usize,
) -> Option<(Placeholder, usize)> {
    let len = chars.len();
    let name_start = open + 1;
    let mut j = name_start;

    while j < len && is_name_char(chars[j].1) {
        j += 1;
    }
    if j == name_start {
        return None; // empty name
    }
    let name: String = chars[name_start..j].iter().map(|(_, c)| c).collect();

    let mut link_id = None;
    if j < len && chars[j].1 == ':' {
        let digits_start = j + 1;
        let mut k = digits_start;
        while k < len && chars[k].1.is_ascii_digit() {
            k += 1;
        }
        if k == digits_start {
            return None; // ':' without digits
        }
        let digits: String = chars[digits_start..k].iter().map(|(_, c)| c).collect();
        link_id = Some(digits.parse().ok()?);
        j = k;
    }

    if j >= len || chars[j].1 != ']' {
        return None;
    }

    let start = chars[open].0;
    let end = if j + 1 < len {
        chars[j + 1].0
    } else {
        text.len()
    };

    Some((
        Placeholder {
            category: normalize_category(&name),
            link_id,
            start,
            end,
        },
        j + 1,
    ))
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' '
}

/// Normalize a raw placeholder name into its category key.
///
/// Splits at lower→upper letter transitions (so camelCase names become
/// space-separated words) and lower-cases the result: `girlName`,
/// `girl name`, and `GirlName` all map to "girl name". A name with no
/// internal case transition, like `GIRLNAME`, has no split points and
/// maps to "girlname" — a distinct category.
pub fn normalize_category(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            out.push(' ');
        }
        prev_lower = c.is_ascii_lowercase();
        out.push(c.to_ascii_lowercase());
    }
    out
}
