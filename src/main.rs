//! Resume ranker: rank resumes against a job description

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_ranker::cli::{self, Cli, Commands, ConfigAction};
use resume_ranker::config::{Config, OutputFormat};
use resume_ranker::input::InputManager;
use resume_ranker::output::{save_report_to_file, RankingReport, ReportGenerator, ResumeSource};
use resume_ranker::processing::profile::CandidateProfile;
use resume_ranker::processing::skill_matcher::{self, SKILL_DICTIONARY};
use resume_ranker::{extract_skills, rank_detailed, ResumeRankerError};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Rank {
            job,
            resumes,
            output,
            detailed,
            top,
            save,
        } => {
            let format = match output {
                Some(output) => cli::parse_output_format(&output).map_err(ResumeRankerError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;
            let top = top.or(config.output.top);

            let mut input_manager = InputManager::from_config(&config.input)?;

            let job_text = input_manager
                .extract_text(&job)
                .await
                .with_context(|| format!("reading job description {}", job.display()))?;

            let sources = load_resumes(&mut input_manager, &resumes, format == OutputFormat::Console).await?;
            let texts: Vec<&str> = sources.iter().map(|(text, _)| text.as_str()).collect();

            info!("Ranking {} resumes against {}", texts.len(), job.display());
            let scores = rank_detailed(&texts, &job_text);
            let required_skills = extract_skills(&job_text).into_iter().collect();

            let resume_sources: Vec<ResumeSource> = sources.into_iter().map(|(_, source)| source).collect();
            let mut report = RankingReport::build(&job_text, required_skills, &scores, &resume_sources);
            report.truncate(top);

            let use_colors = config.output.color_output && save.is_none();
            let rendered = ReportGenerator::with_options(use_colors, detailed).generate_report(&report, &format)?;

            match save {
                Some(path) => save_report_to_file(&rendered, &path)
                    .with_context(|| format!("saving report to {}", path.display()))?,
                None => println!("{}", rendered),
            }
        }

        Commands::Skills { text } => match text {
            Some(path) => {
                let mut input_manager = InputManager::from_config(&config.input)?;
                let content = input_manager.extract_text(&path).await?;
                let skills = extract_skills(&content);
                println!("Skills found in {} ({}):", path.display(), skills.len());
                for skill in skills {
                    println!("  • {}", skill);
                }
            }
            None => {
                println!("Skill dictionary ({} terms):", skill_matcher::skill_count());
                for skill in SKILL_DICTIONARY {
                    println!("  • {}", skill);
                }
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration file: {}", config_path.display());
                println!("{}", toml::to_string_pretty(&config).context("serializing configuration")?);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset: {}", config_path.display());
            }
            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

async fn load_resumes(
    input_manager: &mut InputManager,
    paths: &[PathBuf],
    show_progress: bool,
) -> anyhow::Result<Vec<(String, ResumeSource)>> {
    let progress = if show_progress {
        let bar = ProgressBar::new(paths.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                .context("progress bar template")?
                .progress_chars("=> "),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        progress.set_message(file.clone());

        let text = input_manager
            .extract_text(path)
            .await
            .with_context(|| format!("reading resume {}", path.display()))?;

        let stem = path.file_stem().map(|s| s.to_string_lossy().to_string());
        let profile = CandidateProfile::from_text(&text, stem.as_deref());
        loaded.push((text, ResumeSource { file, profile }));
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(loaded)
}
