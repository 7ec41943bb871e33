/// Whole-word containment check.
/// - A match counts only when both neighbours are non-alphanumeric or the
///   string edge
/// - Expects both sides already normalized (lowercased)
///
/// `contains_word("iphone 12", "phone")` is false ('i' precedes the match),
/// while `contains_word("old phone charger", "phone")` is true.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(word) {
        let begin = from + offset;
        let end = begin + word.len();
        let boundary_before = haystack[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let boundary_after = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if boundary_before && boundary_after {
            return true;
        }
        // step one char past the match start so overlapping hits are not skipped
        from = begin + word.chars().next().map_or(1, char::len_utf8);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_at_string_edges() {
        assert!(contains_word("phone", "phone"));
        assert!(contains_word("phone case", "phone"));
        assert!(contains_word("used phone", "phone"));
    }

    #[test]
    fn matches_between_delimiters() {
        assert!(contains_word("old phone, charger", "phone"));
        assert!(contains_word("(phone)", "phone"));
    }

    #[test]
    fn rejects_embedded_occurrences() {
        assert!(!contains_word("iphone 12", "phone"));
        assert!(!contains_word("phones", "phone"));
        assert!(!contains_word("smartphone", "phone"));
    }

    #[test]
    fn digits_count_as_word_characters() {
        assert!(!contains_word("mk2phone", "phone"));
        assert!(!contains_word("phone2", "phone"));
    }

    #[test]
    fn finds_later_occurrence_after_embedded_one() {
        // first hit is embedded, second stands alone
        assert!(contains_word("iphone phone", "phone"));
    }

    #[test]
    fn empty_needle_never_matches() {
        assert!(!contains_word("anything", ""));
        assert!(!contains_word("", ""));
    }

    #[test]
    fn handles_multibyte_neighbours() {
        assert!(contains_word("日本 phone 市場", "phone"));
        // CJK ideographs are letters, so they glue onto the match
        assert!(!contains_word("市phone", "phone"));
    }
}
