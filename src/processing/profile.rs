//! Display metadata pulled from a resume: name, experience, education

use crate::processing::skill_matcher::extract_skills;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

pub const NOT_SPECIFIED: &str = "Not specified";
pub const UNKNOWN_NAME: &str = "Unknown";

const NAME_MARKER: &str = "Name:";

const EDUCATION_KEYWORDS: &[&str] = &["B.Tech", "Bachelor", "Master", "PhD", "M.Tech", "BSc", "MSc"];

/// Experience patterns in priority order; the first pattern that matches wins
static EXPERIENCE_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\s*years?",
        r"(\d+)\s*\+\s*years?",
        r"(\d+)\s*yr",
        r"experience\D*(\d+)",
        r"(\d+)\s*years?\s*experience",
    ]
    .iter()
    .map(|pattern| {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("Invalid experience regex")
    })
    .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
}

impl CandidateProfile {
    /// Build a profile from resume text; `fallback_name` is used when no "Name:" line exists
    pub fn from_text(text: &str, fallback_name: Option<&str>) -> Self {
        let name = extract_name(text)
            .or_else(|| fallback_name.map(str::to_string))
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        Self {
            name,
            skills: extract_skills(text).into_iter().collect(),
            experience: extract_experience(text),
            education: extract_education(text),
        }
    }
}

/// Evaluate rules in order and return the first success
fn first_match<R, T>(rules: &[R], eval: impl FnMut(&R) -> Option<T>) -> Option<T> {
    rules.iter().find_map(eval)
}

pub fn extract_experience(text: &str) -> String {
    first_match(EXPERIENCE_RULES.as_slice(), |rule| {
        rule.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|years| format!("{} years", years.as_str()))
    })
    .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

pub fn extract_education(text: &str) -> String {
    text.lines()
        .find(|line| EDUCATION_KEYWORDS.iter().any(|keyword| line.contains(keyword)))
        .map(|line| line.trim().to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Text between the first `Name:` marker and the next one on the same line
pub fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| line.split(NAME_MARKER).nth(1))
        .map(|name| name.trim().to_string())
}
