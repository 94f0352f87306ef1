#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::sync::LazyLock;

use fancy_regex::Regex;

/// Anything outside the Unicode word class, which covers Turkish letters and
/// combining marks
static NON_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]+").expect("valid regex"));

/// Tokens at or below this length (in chars) are dropped
const MIN_TOKEN_CHARS: usize = 3;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Turkish
        "acaba", "ama", "ancak", "bana", "bazı", "belki", "ben", "beni", "benim", "biri",
        "birkaç", "birşey", "biz", "bize", "bizi", "bunu", "bunun", "bunlar", "bunları",
        "bütün", "çok", "çünkü", "daha", "değil", "diye", "eğer", "fakat", "gibi", "göre",
        "hangi", "hem", "hep", "hepsi", "her", "hiç", "için", "ile", "ise", "kadar", "kez",
        "kim", "mı", "nasıl", "neden", "nedir", "nerede", "niye", "olan", "olarak", "oldu",
        "olduğu", "olmak", "olur", "onlar", "onu", "onun", "önce", "sen", "sonra", "siz",
        "şey", "şunu", "şöyle", "tüm", "var", "veya", "yani", "yok", "zaten",
        // English
        "about", "after", "all", "also", "and", "any", "are", "because", "been", "before",
        "being", "but", "can", "could", "did", "does", "for", "from", "had", "has", "have",
        "her", "his", "how", "into", "its", "may", "might", "more", "most", "must", "not",
        "only", "other", "our", "over", "should", "some", "such", "than", "that", "the",
        "their", "them", "then", "there", "these", "they", "this", "those", "through", "very",
        "was", "were", "what", "when", "where", "which", "while", "who", "why", "will", "with",
        "would", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Whether `term` is in the built-in Turkish/English stop-word list
#[inline]
pub fn is_stop_word(term: &str) -> bool {
    STOP_WORDS.contains(term)
}

/// Split raw text into normalized index terms.
///
/// Lower-cases the input, turns every non-word character into whitespace and
/// keeps tokens longer than two characters that are not stop-words. Output
/// preserves input order and keeps duplicates.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = fold_case(text);
    let normalized = NON_WORD_REGEX.replace_all(&lowered, " ");

    normalized
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Lower-case `text`, mapping the dotted capital `İ` to a plain `i`.
///
/// Plain lower-casing turns `İ` into `i` followed by U+0307, which would never
/// match a query typed without the dot.
#[inline]
pub fn fold_case(text: &str) -> String {
    text.replace('İ', "i").to_lowercase()
}
