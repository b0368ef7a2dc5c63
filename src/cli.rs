//! CLI interface for skillscan

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillscan")]
#[command(about = "Rule-based skill extraction and job matching toolkit")]
#[command(
    long_about = "Extract skills from resumes and job postings with an exact phrase matcher, score the overlap, and highlight what you are missing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a scraped jobs file and rank the results
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Jobs file (JSON array of postings); defaults to the configured one
        #[arg(short, long)]
        jobs: Option<PathBuf>,

        /// Skill list file; defaults to the configured one
        #[arg(short, long)]
        skills: Option<PathBuf>,

        /// How many top-scoring jobs to show
        #[arg(short, long)]
        top: Option<usize>,

        /// Annotate the displayed job descriptions token by token
        #[arg(short, long)]
        annotate: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Match a resume against a single job description file
    Match {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Skill list file; defaults to the configured one
        #[arg(short, long)]
        skills: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Extract the skills found in any document
    Extract {
        /// Path to the document (PDF, TXT, MD)
        #[arg(short, long)]
        input: PathBuf,

        /// Skill list file; defaults to the configured one
        #[arg(short, long)]
        skills: Option<PathBuf>,
    },

    /// Convert a skill list file into a JSONL pattern file
    Patterns {
        /// Skill list file; defaults to the configured one
        #[arg(short, long)]
        skills: Option<PathBuf>,

        /// Where to write the pattern file; defaults to the configured one
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_extension_validation() {
        let path = PathBuf::from("resume.PDF");
        assert!(validate_file_extension(&path, &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(&path, &["txt"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("noext"), &["txt"]).is_err());
    }
}
