//! Symptom vocabulary normalization and A–Z sectioning
//!
//! Symptom strings are normalized to snake_case for use as stable keys, and
//! projected into alphabetically keyed sections of fixed-width rows for
//! display. Row membership carries no meaning; the chunking exists purely
//! for layout.

use std::collections::BTreeMap;

/// Normalize a symptom string into a stable snake_case key
///
/// Lowercases, trims, and collapses runs of whitespace and hyphens into a
/// single underscore.
///
/// # Examples
///
/// ```
/// use healthmate::symptoms::sections::normalize;
///
/// assert_eq!(normalize("  Chest Pain "), "chest_pain");
/// assert_eq!(normalize("runny-nose"), "runny_nose");
/// ```
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_separator = false;
    for ch in s.trim().to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_separator = !out.is_empty();
        } else {
            if pending_separator {
                out.push('_');
                pending_separator = false;
            }
            out.push(ch);
        }
    }
    out
}

/// Replace underscores with spaces for display
pub fn humanize(s: &str) -> String {
    s.replace('_', " ")
}

/// Human-readable title for a normalized symptom key
///
/// # Examples
///
/// ```
/// use healthmate::symptoms::sections::title_case;
///
/// assert_eq!(title_case("chest_pain"), "Chest Pain");
/// ```
pub fn title_case(s: &str) -> String {
    humanize(s)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One alphabetical section of the vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// First letter of the titles in this section ('#' for empties)
    pub letter: char,
    /// Fixed-width rows of normalized symptom keys
    pub rows: Vec<Vec<String>>,
}

/// Group the vocabulary into A–Z sections of fixed-width rows
///
/// Symptoms are grouped by the first letter of their title-cased label,
/// sorted lexicographically by label within each section, then chunked into
/// rows of `columns` entries.
pub fn build_sections(items: &[String], columns: usize) -> Vec<Section> {
    let columns = columns.max(1);

    let mut by_letter: BTreeMap<char, Vec<String>> = BTreeMap::new();
    for item in items {
        let label = title_case(item);
        let letter = label
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('#');
        by_letter.entry(letter).or_default().push(item.clone());
    }

    by_letter
        .into_iter()
        .map(|(letter, mut group)| {
            group.sort_by_key(|s| title_case(s));
            let rows = group
                .chunks(columns)
                .map(|chunk| chunk.to_vec())
                .collect();
            Section { letter, rows }
        })
        .collect()
}

/// Suggest vocabulary entries for a free-text fragment
///
/// Prefix matches rank before substring matches; at most `limit` entries are
/// returned. An empty fragment yields no suggestions.
pub fn suggest(vocab: &[String], input: &str, limit: usize) -> Vec<String> {
    let q = normalize(input);
    if q.is_empty() {
        return Vec::new();
    }

    let mut out: Vec<String> = vocab
        .iter()
        .filter(|s| s.starts_with(&q))
        .cloned()
        .collect();
    for s in vocab {
        if s.contains(&q) && !out.contains(s) {
            out.push(s.clone());
        }
    }
    out.truncate(limit);
    out
}

/// Filter the vocabulary by a search query
///
/// An empty query returns the full vocabulary.
pub fn filter(vocab: &[String], query: &str) -> Vec<String> {
    let q = normalize(query);
    if q.is_empty() {
        return vocab.to_vec();
    }
    vocab.iter().filter(|s| s.contains(&q)).cloned().collect()
}
