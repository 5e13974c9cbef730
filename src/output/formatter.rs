//! Output formatters for ranking reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeRankerError};
use crate::output::report::{RankedCandidate, RankingReport};
use colored::{Color, Colorize};
use std::fmt::Write as _;
use std::path::Path;

/// Trait for formatting ranking reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing results
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn score_color(score: f64) -> Color {
        match score {
            s if s >= 0.6 => Color::Green,
            s if s >= 0.4 => Color::Cyan,
            s if s >= 0.2 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn format_candidate(&self, out: &mut String, candidate: &RankedCandidate) -> std::fmt::Result {
        let score = self.colorize(&percent(candidate.score), Self::score_color(candidate.score));
        writeln!(
            out,
            "{:>3}. {} ({}) {}",
            candidate.rank,
            self.colorize(&candidate.name, Color::White),
            candidate.file,
            score
        )?;

        if self.detailed {
            writeln!(
                out,
                "     text similarity {} | skill match {}",
                percent(candidate.tfidf_score),
                percent(candidate.skill_score)
            )?;
            writeln!(out, "     matched: {}", join_or_dash(&candidate.matched_skills))?;
            writeln!(out, "     missing: {}", join_or_dash(&candidate.missing_skills))?;
            writeln!(out, "     experience: {}", candidate.experience)?;
            writeln!(out, "     education: {}", candidate.education)?;
        }
        Ok(())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut out = String::new();
        let render = |out: &mut String| -> std::fmt::Result {
            writeln!(out, "{}", self.colorize("Resume Ranking", Color::Blue))?;
            writeln!(
                out,
                "Resumes: {} | Weights: text {:.0}% / skills {:.0}%",
                report.metadata.resume_count,
                report.metadata.weights.tfidf * 100.0,
                report.metadata.weights.skills * 100.0
            )?;
            writeln!(out, "Required skills: {}", join_or_dash(&report.required_skills))?;
            writeln!(out)?;

            if report.candidates.is_empty() {
                writeln!(out, "No candidates to rank.")?;
            }
            for candidate in &report.candidates {
                self.format_candidate(out, candidate)?;
            }
            Ok(())
        };

        render(&mut out).map_err(|e| ResumeRankerError::OutputFormatting(e.to_string()))?;
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut out = String::new();
        let render = |out: &mut String| -> std::fmt::Result {
            writeln!(out, "# Resume Ranking\n")?;

            if self.include_metadata {
                writeln!(
                    out,
                    "_Generated {} by resume-ranker {}_\n",
                    report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
                    report.metadata.tool_version
                )?;
            }

            writeln!(out, "**Required skills:** {}\n", join_or_dash(&report.required_skills))?;
            writeln!(out, "| Rank | Candidate | File | Score | Text | Skills | Matched | Experience |")?;
            writeln!(out, "|---:|---|---|---:|---:|---:|---|---|")?;

            for c in &report.candidates {
                writeln!(
                    out,
                    "| {} | {} | {} | {} | {} | {} | {} | {} |",
                    c.rank,
                    Self::escape_cell(&c.name),
                    Self::escape_cell(&c.file),
                    percent(c.score),
                    percent(c.tfidf_score),
                    percent(c.skill_score),
                    Self::escape_cell(&join_or_dash(&c.matched_skills)),
                    Self::escape_cell(&c.experience)
                )?;
            }
            Ok(())
        };

        render(&mut out).map_err(|e| ResumeRankerError::OutputFormatting(e.to_string()))?;
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &RankingReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(file_path, content)?;
    log::info!("Report saved to {}", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ResumeSource;
    use crate::processing::profile::CandidateProfile;
    use crate::processing::ranker::rank_detailed;

    fn sample_report() -> RankingReport {
        let texts = ["Name: Pat | Baker\nsourdough", "Name: Sam\nPython, Docker, AWS"];
        let sources: Vec<ResumeSource> = texts
            .iter()
            .map(|t| ResumeSource {
                file: "resume.txt".to_string(),
                profile: CandidateProfile::from_text(t, None),
            })
            .collect();
        let job = "Python and AWS engineer";
        let scores = rank_detailed(&texts, job);
        RankingReport::build(job, vec!["aws".into(), "python".into()], &scores, &sources)
    }

    #[test]
    fn test_console_lists_every_candidate() {
        let report = sample_report();
        let output = ReportGenerator::with_options(false, true)
            .generate_report(&report, &OutputFormat::Console)
            .unwrap();

        assert!(output.contains("  1. Sam"));
        assert!(output.contains("  2. Pat | Baker"));
        assert!(output.contains("matched: aws, python"));
        assert!(output.contains("Required skills: aws, python"));
    }

    #[test]
    fn test_json_parses_back() {
        let report = sample_report();
        let output = JsonFormatter::new(false).format_report(&report).unwrap();
        let parsed: RankingReport = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed.candidates.len(), 2);
        assert_eq!(parsed.candidates[0].name, "Sam");
        assert_eq!(parsed.metadata.weights.tfidf, 0.7);
        assert_eq!(JsonFormatter::new(true).supports_format(), OutputFormat::Json);
    }

    #[test]
    fn test_markdown_table() {
        let report = sample_report();
        let output = MarkdownFormatter::new(false).format_report(&report).unwrap();

        assert!(output.starts_with("# Resume Ranking"));
        assert!(output.contains("| 1 | Sam |"));
        assert!(output.contains("Pat \\| Baker"));
        assert_eq!(output.lines().filter(|l| l.starts_with("| ")).count(), 3);
    }

    #[test]
    fn test_save_report() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out").join("ranking.md");
        save_report_to_file("content", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "content");
    }
}
