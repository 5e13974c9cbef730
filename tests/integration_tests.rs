//! Integration tests for the resume ranker

use resume_ranker::input::InputManager;
use resume_ranker::output::{RankingReport, ReportGenerator, ResumeSource};
use resume_ranker::processing::profile::CandidateProfile;
use resume_ranker::processing::text_processor::tokenize;
use resume_ranker::config::OutputFormat;
use resume_ranker::{extract_skills, rank, rank_detailed, ResumeRankerError};
use std::path::Path;

const RESUMES: [&str; 3] = [
    "tests/fixtures/resume_chef.txt",
    "tests/fixtures/resume_web.md",
    "tests/fixtures/resume_ml.txt",
];

async fn load(manager: &mut InputManager, path: &str) -> String {
    manager.extract_text(Path::new(path)).await.unwrap()
}

#[tokio::test]
async fn test_ranks_fixture_resumes() {
    let mut manager = InputManager::new();
    let job = load(&mut manager, "tests/fixtures/job_description.txt").await;
    let mut texts = Vec::new();
    for path in RESUMES {
        texts.push(load(&mut manager, path).await);
    }

    let ranking = rank(&texts, &job);
    let order: Vec<usize> = ranking.iter().map(|entry| entry.index).collect();

    // ML resume, then web developer, then pastry chef
    assert_eq!(order, vec![2, 1, 0]);
    assert!(ranking.iter().all(|entry| (0.0..=1.0).contains(&entry.score)));
}

#[tokio::test]
async fn test_report_from_fixtures() {
    let mut manager = InputManager::new();
    let job = load(&mut manager, "tests/fixtures/job_description.txt").await;

    let mut texts = Vec::new();
    let mut sources = Vec::new();
    for path in RESUMES {
        let text = load(&mut manager, path).await;
        let stem = Path::new(path).file_stem().map(|s| s.to_string_lossy().to_string());
        sources.push(ResumeSource {
            file: path.to_string(),
            profile: CandidateProfile::from_text(&text, stem.as_deref()),
        });
        texts.push(text);
    }

    let scores = rank_detailed(&texts, &job);
    let required: Vec<String> = extract_skills(&job).into_iter().collect();
    assert!(required.contains(&"machine learning".to_string()));
    assert!(required.contains(&"kubernetes".to_string()));

    let report = RankingReport::build(&job, required, &scores, &sources);
    let best = &report.candidates[0];
    assert_eq!(best.name, "Priya Raman");
    assert_eq!(best.experience, "6 years");
    assert_eq!(best.education, "MSc Computer Science, University of Edinburgh");
    assert_eq!(report.candidates[2].name, "resume_chef");

    let json = ReportGenerator::new().generate_report(&report, &OutputFormat::Json).unwrap();
    assert!(json.contains("\"Priya Raman\""));
}

#[tokio::test]
async fn test_latin1_fallback() {
    let mut manager = InputManager::new();
    let text = load(&mut manager, "tests/fixtures/resume_latin1.txt").await;

    assert!(text.contains("José Muñoz"));
    assert_eq!(CandidateProfile::from_text(&text, None).name, "José Muñoz");
}

#[tokio::test]
async fn test_markdown_read_verbatim() {
    let mut manager = InputManager::new();
    let text = load(&mut manager, "tests/fixtures/resume_web.md").await;

    assert!(text.starts_with("# Tom Becker"));
    assert!(text.contains("## Profile"));

    let tokens = tokenize(&text);
    assert!(tokens.contains(&"profile".to_string()));
    assert!(tokens.iter().all(|t| !t.contains('#')));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/resume_ml.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/resume.pdf")).await;

    assert!(matches!(result, Err(ResumeRankerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new().with_cache(false);
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;

    assert!(matches!(result, Err(ResumeRankerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_extensions_follow_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("resume.md");
    std::fs::write(&path, "Rust and Kafka").unwrap();

    let mut config = resume_ranker::Config::default();
    config.input.allowed_extensions = vec!["txt".to_string()];
    let mut manager = InputManager::from_config(&config.input).unwrap();

    let result = manager.extract_text(&path).await;
    assert!(matches!(result, Err(ResumeRankerError::UnsupportedFormat(_))));
}
