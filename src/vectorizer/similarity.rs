//! Cosine similarity and threshold-filtered neighbour lookup.
//!
//! This is the sole similarity primitive of the crate; every vector
//! comparison in search and recommendations funnels through
//! `cosine_similarity`.

/// cosθ = A·B / (|A||B|), in [-1, 1].
///
/// Mismatched lengths are "incomparable" and return 0 rather than erroring;
/// so do zero-magnitude inputs. With the non-negative TF vectors produced by
/// `Vocabulary::vectorize` the result lands in [0, 1].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Rank `candidates` by cosine similarity against `target`.
///
/// The candidate matching `exclude_id` is skipped, candidates at or below
/// `floor` are considered unrelated and dropped, the rest are sorted
/// descending and truncated to `limit`. Ties keep encounter order (the sort
/// is stable); callers wanting a finer order impose their own tie-breaks.
pub fn find_similar_items<'a, I>(
    target: &[f32],
    candidates: I,
    exclude_id: Option<&str>,
    floor: f32,
    limit: usize,
) -> Vec<(&'a str, f32)>
where
    I: IntoIterator<Item = (&'a str, &'a [f32])>,
{
    let mut hits: Vec<(&str, f32)> = candidates
        .into_iter()
        .filter(|(id, _)| Some(*id) != exclude_id)
        .filter_map(|(id, vector)| {
            let similarity = cosine_similarity(target, vector);
            (similarity > floor).then_some((id, similarity))
        })
        .collect();
    hits.sort_by(|a, b| b.1.total_cmp(&a.1));
    hits.truncate(limit);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FLOOR: f32 = 0.1;

    fn pairs<'a>(rows: &'a [(&'a str, Vec<f32>)]) -> impl Iterator<Item = (&'a str, &'a [f32])> {
        rows.iter().map(|(id, v)| (*id, v.as_slice()))
    }

    #[test]
    fn identical_vectors_are_fully_similar() {
        let v = vec![0.2, 0.5, 0.3];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn opposite_vectors_score_negative_one() {
        let sim = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]);
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_scores_zero_without_panicking() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn mismatched_lengths_are_incomparable() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn results_never_include_scores_at_or_below_floor() {
        let rows = vec![
            ("strong", vec![1.0, 0.0]),
            ("weak", vec![0.05, 1.0]),
            ("orthogonal", vec![0.0, 1.0]),
        ];
        let hits = find_similar_items(&[1.0, 0.0], pairs(&rows), None, FLOOR, 10);
        assert!(hits.iter().all(|(_, s)| *s > FLOOR));
        assert!(hits.iter().any(|(id, _)| *id == "strong"));
        assert!(!hits.iter().any(|(id, _)| *id == "orthogonal"));
    }

    #[test]
    fn excluded_id_never_appears_even_with_identical_vector() {
        let rows = vec![
            ("self", vec![1.0, 0.0]),
            ("twin", vec![1.0, 0.0]),
        ];
        let hits = find_similar_items(&[1.0, 0.0], pairs(&rows), Some("self"), FLOOR, 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, "twin");
    }

    #[test]
    fn sorts_descending_and_truncates() {
        let rows = vec![
            ("mid", vec![1.0, 0.5]),
            ("best", vec![1.0, 0.0]),
            ("low", vec![1.0, 2.0]),
        ];
        let hits = find_similar_items(&[1.0, 0.0], pairs(&rows), None, FLOOR, 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, "best");
        assert_eq!(hits[1].0, "mid");
    }

    #[test]
    fn ties_keep_encounter_order() {
        let rows = vec![
            ("first", vec![2.0, 0.0]),
            ("second", vec![3.0, 0.0]),
        ];
        let hits = find_similar_items(&[1.0, 0.0], pairs(&rows), None, FLOOR, 10);
        assert_eq!(hits[0].0, "first");
        assert_eq!(hits[1].0, "second");
    }

    proptest! {
        #[test]
        fn cosine_is_symmetric(
            a in prop::collection::vec(-10.0f32..10.0, 0..16),
            b in prop::collection::vec(-10.0f32..10.0, 0..16),
        ) {
            prop_assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
        }

        #[test]
        fn cosine_stays_in_unit_range(
            pairs in prop::collection::vec((-10.0f32..10.0, -10.0f32..10.0), 1..16),
        ) {
            let (a, b): (Vec<f32>, Vec<f32>) = pairs.into_iter().unzip();
            let sim = cosine_similarity(&a, &b);
            // allow for f32 rounding at the boundary
            prop_assert!(sim.abs() <= 1.0 + 1e-4);
        }
    }
}
