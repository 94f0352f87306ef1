#[cfg(test)]
mod tests;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sparse term-weight vector: normalized term frequency per distinct term.
///
/// Terms missing from the map carry an implicit weight of zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermVector {
    weights: HashMap<String, f64>,
}

impl TermVector {
    /// Weight of `term`, zero when absent
    #[inline]
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, weight)| (term.as_str(), *weight))
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Dot product; only terms present in both vectors contribute
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .weights
            .iter()
            .map(|(term, weight)| weight * large.weight(term))
            .sum()
    }
}

/// Build a term-weight vector from a token sequence.
///
/// Each distinct term is weighted by its count divided by the total number of
/// tokens, so the weights sum to one. There is deliberately no inverse document
/// frequency factor: terms common across the corpus are not down-weighted.
#[inline]
pub fn vectorize<S: AsRef<str>>(tokens: &[S]) -> TermVector {
    if tokens.is_empty() {
        return TermVector::default();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_ref().to_string()).or_default() += 1;
    }

    let total = tokens.len() as f64;
    let weights = counts
        .into_iter()
        .map(|(term, count)| (term, count as f64 / total))
        .collect();

    TermVector { weights }
}

/// Cosine similarity of two term-weight vectors, in `[0, 1]`.
///
/// Defined as zero when either vector has a zero norm.
#[inline]
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}
