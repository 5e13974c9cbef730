//! Combines TF-IDF similarity with skill overlap and orders the candidates

use crate::processing::similarity::score_corpus;
use crate::processing::skill_matcher::extract_skills;
use crate::processing::tfidf::vectorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Weight of the TF-IDF cosine similarity in the combined score
pub const TFIDF_WEIGHT: f64 = 0.7;
/// Weight of the skill overlap in the combined score
pub const SKILL_WEIGHT: f64 = 0.3;
/// Skill score given to every resume when the job description names no known skill
pub const NEUTRAL_SKILL_SCORE: f64 = 0.5;

/// A resume's position in the input and its combined score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub index: usize,
    pub score: f64,
}

/// Per-resume breakdown of a combined score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub index: usize,
    pub tfidf_score: f64,
    pub skill_score: f64,
    pub combined_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl From<&CandidateScore> for ScoreEntry {
    fn from(candidate: &CandidateScore) -> Self {
        ScoreEntry {
            index: candidate.index,
            score: candidate.combined_score,
        }
    }
}

/// Rank resumes against a job description, best first
pub fn rank<S: AsRef<str>>(resume_texts: &[S], job_description: &str) -> Vec<ScoreEntry> {
    rank_detailed(resume_texts, job_description)
        .iter()
        .map(ScoreEntry::from)
        .collect()
}

/// Like [`rank`], keeping the score components for every resume
pub fn rank_detailed<S: AsRef<str>>(resume_texts: &[S], job_description: &str) -> Vec<CandidateScore> {
    if resume_texts.is_empty() {
        return Vec::new();
    }

    let required_skills = extract_skills(job_description);

    let mut corpus: Vec<&str> = resume_texts.iter().map(AsRef::as_ref).collect();
    corpus.push(job_description);
    let similarities = score_corpus(vectorize(&corpus), resume_texts.len());

    let mut candidates: Vec<CandidateScore> = resume_texts
        .iter()
        .zip(similarities)
        .enumerate()
        .map(|(index, (text, tfidf_score))| {
            let skills = extract_skills(text.as_ref());
            let (skill_score, matched_skills, missing_skills) = skill_overlap(&skills, &required_skills);

            CandidateScore {
                index,
                tfidf_score,
                skill_score,
                combined_score: combine(tfidf_score, skill_score),
                matched_skills,
                missing_skills,
            }
        })
        .collect();

    // stable: equal scores keep ascending input order
    candidates.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));

    log::debug!(
        "Ranked {} resumes against {} required skills",
        candidates.len(),
        required_skills.len()
    );

    candidates
}

fn skill_overlap(
    skills: &BTreeSet<String>,
    required: &BTreeSet<String>,
) -> (f64, Vec<String>, Vec<String>) {
    if required.is_empty() {
        return (NEUTRAL_SKILL_SCORE, Vec::new(), Vec::new());
    }

    let matched: Vec<String> = skills.intersection(required).cloned().collect();
    let missing: Vec<String> = required.difference(skills).cloned().collect();
    let score = matched.len() as f64 / required.len() as f64;

    (score, matched, missing)
}

fn combine(tfidf_score: f64, skill_score: f64) -> f64 {
    (TFIDF_WEIGHT * tfidf_score + SKILL_WEIGHT * skill_score).clamp(0.0, 1.0)
}
