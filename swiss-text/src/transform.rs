// String transformations

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9-]+").unwrap());

/// Map an accented Latin vowel or `ñ` to its base letter.
///
/// Only grave, acute, circumflex, tilde and diaeresis forms of
/// `a e i o u` plus `ñ` are covered, in both cases.
fn strip_accent(c: char) -> Option<char> {
    let base = match c {
        'á' | 'à' | 'ã' | 'â' | 'ä' => 'a',
        'Á' | 'À' | 'Ã' | 'Â' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'õ' | 'ô' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Õ' | 'Ô' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        _ => return None,
    };
    Some(base)
}

/// Replace accented vowels and `ñ` with their unaccented letters.
///
/// Any other character, including other accented letters such as `ç`,
/// is left untouched.
///
/// ```
/// use swiss_text::remove_accents;
///
/// assert_eq!(remove_accents("arrôz"), "arroz");
/// assert_eq!(remove_accents("Ñandú"), "Nandu");
/// ```
pub fn remove_accents(input: &str) -> String {
    input
        .chars()
        .map(|c| strip_accent(c).unwrap_or(c))
        .collect()
}

/// Build a URL slug.
///
/// Accents are removed first, every run of characters outside
/// `[A-Za-z0-9-]` collapses to one `-`, edge dashes are trimmed and the
/// result is lowercased.
///
/// ```
/// use swiss_text::slug;
///
/// assert_eq!(slug("Hello World"), "hello-world");
/// assert_eq!(slug("Olá Mundo"), "ola-mundo");
/// ```
pub fn slug(input: &str) -> String {
    let plain = remove_accents(input);
    let dashed = NON_SLUG_RUN.replace_all(&plain, "-");
    dashed.trim_matches('-').to_ascii_lowercase()
}

/// Keep only the ASCII digits of `input`, in order.
pub fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
