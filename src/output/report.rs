//! Ranking report assembled from engine scores and candidate profiles

use crate::processing::profile::CandidateProfile;
use crate::processing::ranker::{CandidateScore, SKILL_WEIGHT, TFIDF_WEIGHT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub metadata: ReportMetadata,
    pub required_skills: Vec<String>,
    pub candidates: Vec<RankedCandidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub job_description: String,
    pub resume_count: usize,
    pub weights: ComponentWeights,
    pub tool_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub tfidf: f64,
    pub skills: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// 1-based position in the ranking
    pub rank: usize,
    /// Position of the resume in the input list
    pub index: usize,
    pub name: String,
    pub file: String,
    pub score: f64,
    pub tfidf_score: f64,
    pub skill_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience: String,
    pub education: String,
}

/// A resume as loaded by the caller
#[derive(Debug, Clone)]
pub struct ResumeSource {
    pub file: String,
    pub profile: CandidateProfile,
}

impl RankingReport {
    /// Join ranked scores with their source resumes; `scores` must be in ranking order
    pub fn build(
        job_description: &str,
        required_skills: Vec<String>,
        scores: &[CandidateScore],
        sources: &[ResumeSource],
    ) -> Self {
        let candidates = scores
            .iter()
            .enumerate()
            .filter_map(|(position, score)| {
                let source = sources.get(score.index)?;
                Some(RankedCandidate {
                    rank: position + 1,
                    index: score.index,
                    name: source.profile.name.clone(),
                    file: source.file.clone(),
                    score: score.combined_score,
                    tfidf_score: score.tfidf_score,
                    skill_score: score.skill_score,
                    matched_skills: score.matched_skills.clone(),
                    missing_skills: score.missing_skills.clone(),
                    experience: source.profile.experience.clone(),
                    education: source.profile.education.clone(),
                })
            })
            .collect();

        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                job_description: job_description.to_string(),
                resume_count: sources.len(),
                weights: ComponentWeights {
                    tfidf: TFIDF_WEIGHT,
                    skills: SKILL_WEIGHT,
                },
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            required_skills,
            candidates,
        }
    }

    /// Keep only the first `top` candidates
    pub fn truncate(&mut self, top: Option<usize>) {
        if let Some(top) = top {
            self.candidates.truncate(top);
        }
    }
}
