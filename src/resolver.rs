use std::cmp::Ordering;

use serde::Serialize;

use crate::store::{IngredientRecord, IngredientStore};

/// Outcome of a substitute lookup. `substitute` is absent when the queried
/// ingredient is unknown or the store holds nothing else to offer; both are
/// ordinary results, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionResult {
    pub substitute: Option<String>,
    /// Confidence in [0, 100]
    pub score: u8,
    pub rationale: String,
}

impl SubstitutionResult {
    fn not_found(rationale: &str) -> Self {
        SubstitutionResult {
            substitute: None,
            score: 0,
            rationale: rationale.to_string(),
        }
    }
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 when the lengths differ or either vector has zero norm, so the
/// caller never divides by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Rank every other ingredient in the store against `name` and return the
/// closest one by embedding similarity.
///
/// Scores live in a scratch vector local to the call; the store is never
/// written to, so concurrent lookups against a shared store are safe.
/// Ties are broken by case-insensitive name so repeated calls agree.
pub fn find_substitute(store: &IngredientStore, name: &str) -> SubstitutionResult {
    let target = match store.lookup(name) {
        Some(record) => record,
        None => return SubstitutionResult::not_found("unknown ingredient"),
    };
    let target_key = target.name.to_lowercase();

    let mut ranked: Vec<(f32, &IngredientRecord)> = store
        .all()
        .iter()
        .filter(|candidate| candidate.name.to_lowercase() != target_key)
        .map(|candidate| {
            (
                cosine_similarity(&target.embedding, &candidate.embedding),
                candidate,
            )
        })
        .collect();

    ranked.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .partial_cmp(score_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    match ranked.first() {
        Some((similarity, best)) => SubstitutionResult {
            substitute: Some(best.name.clone()),
            // [-1, 1] similarity treated as [0, 1] before scoring
            score: (similarity.clamp(0.0, 1.0) * 100.0).round() as u8,
            rationale: best.description.clone(),
        },
        None => SubstitutionResult::not_found("no candidates"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_parallel_vectors() {
        let similarity = cosine_similarity(&[1.0, 0.0], &[2.0, 0.0]);
        assert!((similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_orthogonal_vectors() {
        let similarity = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(similarity.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_is_symmetric() {
        let a = [0.3, 0.7, 0.1];
        let b = [0.9, 0.2, 0.4];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_cosine_similarity_zero_norm() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 1.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_similarity_length_mismatch() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_negative_similarity_clamps_to_zero_score() {
        let store = IngredientStore::from_records(vec![
            IngredientRecord {
                name: "A".to_string(),
                embedding: vec![1.0, 0.0],
                description: "descA".to_string(),
            },
            IngredientRecord {
                name: "B".to_string(),
                embedding: vec![-1.0, 0.0],
                description: "descB".to_string(),
            },
        ])
        .unwrap();

        let result = find_substitute(&store, "A");
        assert_eq!(result.substitute.as_deref(), Some("B"));
        assert_eq!(result.score, 0);
    }
}
