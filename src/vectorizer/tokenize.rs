/// Normalize free text into scoring terms: lowercase, split on whitespace,
/// drop fragments of two chars or fewer. No stemming, no punctuation
/// stripping; the word-boundary rules live in the matchers, not here.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .map(str::to_string)
        .collect()
}
