//! Skill dictionary and whole-word skill detection

use crate::processing::text_processor::is_word_char;
use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// Known technology and process keywords, all lower case
pub const SKILL_DICTIONARY: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "c++", "c#", "ruby", "php", "swift", "kotlin",
    // Web frameworks
    "react", "angular", "vue", "node.js", "django", "flask", "spring", "express",
    // Data science / ML libraries
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy", "matplotlib",
    // Databases and cloud
    "sql", "mysql", "postgresql", "mongodb", "oracle", "firebase", "aws", "azure", "gcp",
    // Tooling
    "docker", "kubernetes", "jenkins", "git", "github", "gitlab", "bitbucket", "jira",
    "confluence",
    // Process
    "agile", "scrum", "kanban", "ci/cd", "devops", "nlp",
    // Domains
    "machine learning", "deep learning", "artificial intelligence", "data science",
    "data analysis", "data visualization", "big data", "hadoop", "spark", "kafka",
];

static SKILL_MATCHER: Lazy<SkillMatcher> = Lazy::new(SkillMatcher::new);

/// Extract the set of dictionary skills mentioned in `text`
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    SKILL_MATCHER.find_skills(text)
}

/// Matcher over the static skill dictionary
pub struct SkillMatcher {
    automaton: AhoCorasick,
}

impl SkillMatcher {
    fn new() -> Self {
        // Standard semantics so overlapping hits ("java" inside "javascript") are all reported
        // and the boundary check decides which ones count.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(SKILL_DICTIONARY)
            .expect("Invalid skill dictionary");

        Self { automaton }
    }

    pub fn find_skills(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        let mut found = BTreeSet::new();

        for mat in self.automaton.find_overlapping_iter(&lowered) {
            if is_whole_word(&lowered, mat.start(), mat.end()) {
                found.insert(SKILL_DICTIONARY[mat.pattern().as_usize()].to_string());
            }
        }

        found
    }
}

/// A hit is a whole word when no word character continues it on either side.
/// An edge that is itself a symbol ("c++", "c#") needs no boundary, so "C++11" matches.
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let hit = &text[start..end];
    let open_start = hit.chars().next().is_some_and(is_word_char);
    let open_end = hit.chars().next_back().is_some_and(is_word_char);

    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    !(open_start && before.is_some_and(is_word_char))
        && !(open_end && after.is_some_and(is_word_char))
}

pub fn skill_count() -> usize {
    SKILL_DICTIONARY.len()
}
