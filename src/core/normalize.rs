//! Text normalization
//!
//! Every matcher in the assistant works on normalized text:
//! lower-case, accent-free vowels, no `¿?!`, single spaces, trimmed.

/// Canonicalize raw input.
///
/// `ñ` is kept as is. Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '¿' | '?' | '!'))
        .map(fold_vowel)
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_vowel(c: char) -> char {
    match c {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' | 'ü' => 'u',
        other => other,
    }
}
