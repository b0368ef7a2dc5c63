//! skillscan: rule-based skill extraction and job matching toolkit

mod cli;
mod config;
mod error;
mod input;
mod jobs;
mod matching;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, SkillScanError};
use input::InputManager;
use jobs::JobPosting;
use log::{error, info};
use matching::annotate::annotate_text;
use matching::matcher::SkillMatcher;
use matching::vocabulary::{SharedVocabulary, SkillVocabulary};
use matching::{document::TokenizedDocument, score};
use output::report::{AnnotatedText, JobMatch, MatchReport, ResumeSummary};
use output::ReportGenerator;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            jobs,
            skills,
            top,
            annotate,
            output,
            save,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| SkillScanError::InvalidInput(format!("Resume file: {}", e)))?;
            let output_format =
                cli::parse_output_format(&output).map_err(SkillScanError::InvalidInput)?;

            let jobs_path = jobs.unwrap_or_else(|| config.data.jobs_file.clone());
            let top = top.unwrap_or(config.matching.top_jobs);

            let mut input_manager = InputManager::new();
            let vocab = load_vocabulary(&input_manager, skills.as_deref(), &config).await?;
            let shared = SharedVocabulary::new(vocab);
            let matcher = SkillMatcher::from_vocabulary(&shared.current())?;
            info!("Built matcher with {} skill patterns", matcher.pattern_count());

            println!("📄 Resume: {}", resume.display());
            println!("💼 Jobs file: {}", jobs_path.display());

            let resume_text = input_manager.extract_text(&resume).await?;
            let your_skills = extract_unique_skills(&matcher, &resume_text);
            info!("Extracted {} distinct skills from resume", your_skills.len());

            let mut all_jobs = jobs::load_jobs(&jobs_path)?;
            jobs::rank_jobs(&mut all_jobs, &your_skills, &matcher);

            if config.matching.update_jobs_file {
                jobs::save_jobs(&jobs_path, &all_jobs)?;
            }

            let shown = all_jobs.iter().take(top);
            let job_matches: Vec<JobMatch> = shown
                .map(|job| {
                    let mut job_match = JobMatch::from_posting(job);
                    if annotate {
                        job_match.annotation = annotate_posting(job);
                    }
                    job_match
                })
                .collect();

            let report = MatchReport::new(
                ResumeSummary {
                    source: resume.display().to_string(),
                    skills: your_skills,
                },
                job_matches,
            );
            emit_report(&report, &config, output_format, save.as_deref())
        }

        Commands::Match {
            resume,
            job,
            skills,
            output,
            save,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| SkillScanError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["pdf", "txt", "md"])
                .map_err(|e| SkillScanError::InvalidInput(format!("Job description file: {}", e)))?;
            let output_format =
                cli::parse_output_format(&output).map_err(SkillScanError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            let vocab = load_vocabulary(&input_manager, skills.as_deref(), &config).await?;
            let matcher = SkillMatcher::from_vocabulary(&vocab)?;

            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let your_skills = extract_unique_skills(&matcher, &resume_text);
            let job_doc = TokenizedDocument::new(&job_text);
            let required = matcher.extract_skill_names(&job_doc);

            let result = score::score_list(&required, &your_skills);
            let (tokens, labels) = annotate_text(&job_text, &required, &result.missing_skills);

            let job_match = JobMatch {
                title: job
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().to_string()),
                company: None,
                location: None,
                match_score: result.match_score,
                required_skills: required,
                missing_skills: result.missing_skills,
                annotation: AnnotatedText::from_parts(tokens, labels),
            };
            let report = MatchReport::new(
                ResumeSummary {
                    source: resume.display().to_string(),
                    skills: your_skills,
                },
                vec![job_match],
            );
            emit_report(&report, &config, output_format, save.as_deref())
        }

        Commands::Extract { input, skills } => {
            cli::validate_file_extension(&input, &["pdf", "txt", "md"])
                .map_err(|e| SkillScanError::InvalidInput(format!("Input file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let vocab = load_vocabulary(&input_manager, skills.as_deref(), &config).await?;
            let matcher = SkillMatcher::from_vocabulary(&vocab)?;

            let text = input_manager.extract_text(&input).await?;
            let found = extract_unique_skills(&matcher, &text);

            println!("Found {} skills in {}:", found.len(), input.display());
            for skill in found {
                println!("  {}", skill);
            }
            Ok(())
        }

        Commands::Patterns { skills, out } => {
            let input_manager = InputManager::new();
            let skills_path = skills.unwrap_or_else(|| config.data.skills_file.clone());
            let out_path = out.unwrap_or_else(|| config.data.patterns_file.clone());

            let vocab = input_manager.load_skill_list(&skills_path).await?;
            if vocab.is_empty() {
                info!("Skill list {} is empty", skills_path.display());
            }

            if let Some(parent) = out_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out_path, vocab.to_jsonl())?;
            println!(
                "Wrote {} patterns to {}",
                vocab.len(),
                out_path.display()
            );
            Ok(())
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        SkillScanError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    let config = Config::default();
                    config.save()?;
                    println!("Configuration reset to defaults");
                }
                ConfigAction::Path => {
                    println!("{}", Config::config_path().display());
                }
            }
            Ok(())
        }
    }
}

/// Resolve the vocabulary from an explicit skill list, falling back to the
/// configured skill list, then to the configured pattern file.
async fn load_vocabulary(
    input_manager: &InputManager,
    skills: Option<&Path>,
    config: &Config,
) -> Result<SkillVocabulary> {
    if let Some(path) = skills {
        return input_manager.load_skill_list(path).await;
    }
    if config.data.skills_file.exists() {
        return input_manager.load_skill_list(&config.data.skills_file).await;
    }
    if config.data.patterns_file.exists() {
        return input_manager.load_pattern_file(&config.data.patterns_file).await;
    }
    Err(SkillScanError::Configuration(format!(
        "No skill list found; pass --skills or create {}",
        config.data.skills_file.display()
    )))
}

fn extract_unique_skills(matcher: &SkillMatcher, text: &str) -> Vec<String> {
    let doc = TokenizedDocument::new(text);
    matcher.extract_skills(&doc).into_iter().collect()
}

/// Annotate a ranked posting's description from its stored skill columns.
fn annotate_posting(job: &JobPosting) -> Option<AnnotatedText> {
    let missing: Vec<String> = job
        .missing_skills
        .as_deref()
        .map(|joined| {
            joined
                .split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let (tokens, labels) = annotate_text(&job.description, &job.skills, &missing);
    AnnotatedText::from_parts(tokens, labels)
}

fn emit_report(
    report: &MatchReport,
    config: &Config,
    format: config::OutputFormat,
    save: Option<&Path>,
) -> Result<()> {
    let use_colors = config.output.color_output && save.is_none();
    let generator = ReportGenerator::new(use_colors, config.output.detailed);
    let rendered = generator.format(report, format)?;

    match save {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
