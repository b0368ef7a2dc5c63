//! Output formatters: console with highlighting, JSON, Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::matching::annotate::TokenLabel;
use crate::output::report::{AnnotatedText, JobMatch, MatchReport};
use colored::Colorize;

/// Trait for rendering match reports in one output format.
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter; skills the candidate has render green, missing ones
/// red.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports.
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn render_annotation(&self, annotation: &AnnotatedText) -> String {
        let mut words = Vec::with_capacity(annotation.tokens.len());
        for (token, label) in annotation.tokens.iter().zip(&annotation.labels) {
            let word = if !self.use_colors {
                token.clone()
            } else {
                match label {
                    TokenLabel::Matched => token.green().bold().to_string(),
                    TokenLabel::Missing => token.red().bold().to_string(),
                    TokenLabel::Other => token.clone(),
                }
            };
            words.push(word);
        }
        words.join(" ")
    }

    fn score_line(&self, score: Option<f64>) -> String {
        match score {
            Some(score) => format!("Match score: {:.1}%", score),
            None => "Match score: n/a (no required skills)".to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("Resume: {}\n", report.resume.source));
        out.push_str(&format!(
            "Your skills ({}): {}\n",
            report.resume.skills.len(),
            report.resume.skills.join(", ")
        ));

        for (idx, job) in report.jobs.iter().enumerate() {
            out.push('\n');
            let heading = match (&job.title, &job.company) {
                (Some(title), Some(company)) => format!("{} - {}", title, company),
                (Some(title), None) => title.clone(),
                (None, Some(company)) => company.clone(),
                (None, None) => format!("Job #{}", idx + 1),
            };
            out.push_str(&format!("{}\n", heading));
            if let Some(location) = &job.location {
                out.push_str(&format!("Location: {}\n", location));
            }
            out.push_str(&format!("{}\n", self.score_line(job.match_score)));

            if job.missing_skills.is_empty() {
                out.push_str("Missing skills: none\n");
            } else {
                let joined = job.missing_skills.join(", ");
                let line = if self.use_colors {
                    joined.red().to_string()
                } else {
                    joined
                };
                out.push_str(&format!("Missing skills: {}\n", line));
            }

            if self.detailed {
                out.push_str(&format!(
                    "Required skills: {}\n",
                    job.required_skills.join(", ")
                ));
            }

            if let Some(annotation) = &job.annotation {
                out.push_str("\n");
                out.push_str(&self.render_annotation(annotation));
                out.push('\n');
            }
        }

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
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let out = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    fn render_annotation(annotation: &AnnotatedText) -> String {
        let mut words = Vec::with_capacity(annotation.tokens.len());
        for (token, label) in annotation.tokens.iter().zip(&annotation.labels) {
            let word = match label {
                TokenLabel::Matched => format!("**{}**", token),
                TokenLabel::Missing => format!("~~{}~~", token),
                TokenLabel::Other => token.clone(),
            };
            words.push(word);
        }
        words.join(" ")
    }

    fn render_job(idx: usize, job: &JobMatch) -> String {
        let mut out = String::new();
        let heading = job
            .title
            .clone()
            .unwrap_or_else(|| format!("Job #{}", idx + 1));
        out.push_str(&format!("## {}\n\n", heading));
        if let Some(company) = &job.company {
            out.push_str(&format!("- Company: {}\n", company));
        }
        if let Some(location) = &job.location {
            out.push_str(&format!("- Location: {}\n", location));
        }
        match job.match_score {
            Some(score) => out.push_str(&format!("- Match score: {:.1}%\n", score)),
            None => out.push_str("- Match score: n/a\n"),
        }
        if !job.missing_skills.is_empty() {
            out.push_str(&format!(
                "- Missing skills: {}\n",
                job.missing_skills.join(", ")
            ));
        }
        if let Some(annotation) = &job.annotation {
            out.push_str("\nSkills you have are **bold**, skills you lack are ~~struck~~:\n\n");
            out.push_str("> ");
            out.push_str(&Self::render_annotation(annotation));
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();
        out.push_str("# Skill match report\n\n");
        out.push_str(&format!("- Resume: {}\n", report.resume.source));
        out.push_str(&format!(
            "- Generated: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        out.push_str(&format!(
            "- Your skills ({}): {}\n\n",
            report.resume.skills.len(),
            report.resume.skills.join(", ")
        ));

        for (idx, job) in report.jobs.iter().enumerate() {
            out.push_str(&Self::render_job(idx, job));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Front door over the individual formatters.
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter,
        }
    }

    pub fn format(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Markdown => self.markdown.format_report(report),
        }
    }
}
