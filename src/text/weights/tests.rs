use super::*;
use crate::text::tokenize;

const EPSILON: f64 = 1e-9;

#[test]
fn normalized_term_frequency() {
    let vector = vectorize(&["energy", "mass", "energy", "light"]);

    assert_eq!(vector.len(), 3);
    assert!((vector.weight("energy") - 0.5).abs() < EPSILON);
    assert!((vector.weight("mass") - 0.25).abs() < EPSILON);
    assert!((vector.weight("light") - 0.25).abs() < EPSILON);
    assert_eq!(vector.weight("absent"), 0.0);
}

#[test]
fn weights_sum_to_one() {
    let tokens = tokenize("Cells divide. Cells grow. Mitosis produces identical cells.");
    let vector = vectorize(&tokens);
    let total: f64 = vector.iter().map(|(_, w)| w).sum();
    assert!((total - 1.0).abs() < EPSILON);
}

#[test]
fn empty_tokens_give_empty_vector() {
    let vector = vectorize::<&str>(&[]);
    assert!(vector.is_empty());
    assert_eq!(vector.norm(), 0.0);
}

#[test]
fn no_inverse_document_frequency() {
    // The same term keeps the same weight regardless of any other text.
    let a = vectorize(&["atom", "bond"]);
    let b = vectorize(&["atom", "bond"]);
    assert_eq!(a, b);
    assert!((a.weight("atom") - 0.5).abs() < EPSILON);
}

#[test]
fn cosine_of_identical_vectors_is_one() {
    let a = vectorize(&["force", "mass", "force"]);
    let b = vectorize(&["mass", "force", "force"]);
    assert!((cosine_similarity(&a, &b) - 1.0).abs() < EPSILON);
}

#[test]
fn cosine_of_scaled_counts_is_one() {
    let a = vectorize(&["force", "mass"]);
    let b = vectorize(&["force", "mass", "force", "mass"]);
    assert!((cosine_similarity(&a, &b) - 1.0).abs() < EPSILON);
}

#[test]
fn cosine_of_disjoint_vectors_is_zero() {
    let a = vectorize(&["force"]);
    let b = vectorize(&["enzyme"]);
    assert_eq!(cosine_similarity(&a, &b), 0.0);
}

#[test]
fn cosine_with_zero_norm_is_zero() {
    let a = vectorize(&["force"]);
    let empty = TermVector::default();
    assert_eq!(cosine_similarity(&a, &empty), 0.0);
    assert_eq!(cosine_similarity(&empty, &empty), 0.0);
}

#[test]
fn cosine_partial_overlap() {
    // a = (0.5, 0.5, 0), b = (0.5, 0, 0.5): dot 0.25, norms sqrt(0.5)
    let a = vectorize(&["force", "mass"]);
    let b = vectorize(&["force", "velocity"]);
    let score = cosine_similarity(&a, &b);
    assert!((score - 0.5).abs() < EPSILON);
    assert!((cosine_similarity(&b, &a) - score).abs() < EPSILON);
}
