//! Cosine similarity between the job description and each resume

use crate::processing::tfidf::{TermWeightVector, VectorizationFailure, Vectorized};

/// Cosine of the angle between two weight vectors, clamped to [0, 1]
///
/// Either vector being zero yields 0.0.
pub fn cosine_similarity(a: &TermWeightVector, b: &TermWeightVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let score = a.dot(b) / (norm_a * norm_b);
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Similarity of every resume vector to the job vector, aligned with `resumes`
pub fn similarity(job: &TermWeightVector, resumes: &[TermWeightVector]) -> Vec<f64> {
    resumes.iter().map(|resume| cosine_similarity(job, resume)).collect()
}

/// Score a vectorized corpus whose last document is the job description
///
/// A failed vectorization degrades to `resume_count` zeros.
pub fn score_corpus(
    vectorized: Result<Vectorized, VectorizationFailure>,
    resume_count: usize,
) -> Vec<f64> {
    match vectorized {
        Ok(vectorized) => match vectorized.split_last() {
            Some((job, resumes)) if resumes.len() == resume_count => similarity(job, resumes),
            _ => {
                log::warn!("Vectorized corpus does not match {} resumes; using zero similarity", resume_count);
                vec![0.0; resume_count]
            }
        },
        Err(failure) => {
            log::warn!("TF-IDF vectorization failed ({}); using zero similarity", failure);
            vec![0.0; resume_count]
        }
    }
}
