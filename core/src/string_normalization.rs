use unidecode::unidecode;

/// Normalizes a display name for lookup: ASCII-folded, lowercased,
/// whitespace collapsed.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
