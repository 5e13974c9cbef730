//! Resume ranker library
//!
//! Ranks resumes against a job description by blending TF-IDF cosine
//! similarity with overlap on a fixed skill dictionary.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeRankerError};
pub use processing::ranker::{rank, rank_detailed, CandidateScore, ScoreEntry};
pub use processing::skill_matcher::extract_skills;
