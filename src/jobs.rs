//! Scraped job postings: typed records, JSON storage, and ranking

use crate::error::{Result, SkillScanError};
use crate::matching::document::TokenizedDocument;
use crate::matching::matcher::SkillMatcher;
use crate::matching::score;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;

/// One scraped job posting.
///
/// Scraper-sourced fields are optional: a listing page that lacks a field
/// (or fails to parse, e.g. a relative posting date) stores `None` rather
/// than a sentinel string. `skills`, `match_score` and `missing_skills` are
/// computed columns filled in by [`rank_jobs`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: Option<u64>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub level: Option<String>,
    pub posted_time_ago: Option<String>,
    #[serde(default)]
    pub applicant_count: Option<u32>,
    #[serde(default)]
    pub posted_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scraping_date: Option<DateTime<Utc>>,
    pub description: String,
    /// Required skills extracted from the description, occurrence order,
    /// duplicates kept.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Match percentage against the candidate, one decimal.
    #[serde(default)]
    pub match_score: Option<f64>,
    /// Comma-joined skills the candidate lacks for this job.
    #[serde(default)]
    pub missing_skills: Option<String>,
}

impl JobPosting {
    pub fn new(description: String) -> Self {
        Self {
            job_id: None,
            title: None,
            company: None,
            location: None,
            level: None,
            posted_time_ago: None,
            applicant_count: None,
            posted_date: None,
            scraping_date: None,
            description,
            skills: Vec::new(),
            match_score: None,
            missing_skills: None,
        }
    }
}

/// Load a jobs file: a JSON array of postings.
pub fn load_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    let content = std::fs::read_to_string(path)?;
    let jobs: Vec<JobPosting> = serde_json::from_str(&content).map_err(|e| {
        SkillScanError::InvalidInput(format!("Failed to parse jobs file '{}': {}", path.display(), e))
    })?;
    info!("Loaded {} job postings from {}", jobs.len(), path.display());
    Ok(jobs)
}

pub fn save_jobs(path: &Path, jobs: &[JobPosting]) -> Result<()> {
    let content = serde_json::to_string_pretty(jobs)?;
    std::fs::write(path, content)?;
    info!("Saved {} job postings to {}", jobs.len(), path.display());
    Ok(())
}

/// Score every job against the candidate's skills and sort best-first.
///
/// Jobs without pre-extracted skills get them extracted from the description
/// with the given matcher. Unscored jobs (no required skills) sort last; the
/// sort is stable so file order breaks ties.
pub fn rank_jobs(jobs: &mut [JobPosting], your_skills: &[String], matcher: &SkillMatcher) {
    let your_skills_joined = score::join_skills(your_skills);

    let bar = ProgressBar::new(jobs.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("Scoring jobs");

    for job in jobs.iter_mut() {
        if job.skills.is_empty() {
            let doc = TokenizedDocument::new(&job.description);
            job.skills = matcher.extract_skill_names(&doc);
        }
        let result = score::score(&job.skills, &your_skills_joined);
        job.match_score = result.match_score;
        job.missing_skills = Some(result.missing_skills_joined());
        bar.inc(1);
    }
    bar.finish_and_clear();

    jobs.sort_by(|a, b| match (a.match_score, b.match_score) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::vocabulary::SkillVocabulary;

    fn matcher(skills: &[&str]) -> SkillMatcher {
        let vocab = SkillVocabulary::from_lines(skills.iter().copied());
        SkillMatcher::from_vocabulary(&vocab).unwrap()
    }

    fn job(description: &str) -> JobPosting {
        JobPosting::new(description.to_string())
    }

    #[test]
    fn test_rank_extracts_scores_and_sorts() {
        let m = matcher(&["python", "sql", "docker"]);
        let mut jobs = vec![
            job("We need sql and docker experience"),
            job("Pure python role: python python python"),
            job("No recognizable requirements at all"),
        ];
        let your_skills = vec!["python".to_string()];

        rank_jobs(&mut jobs, &your_skills, &m);

        // the python job fully matches and sorts first
        assert_eq!(jobs[0].match_score, Some(100.0));
        assert_eq!(jobs[0].skills, vec!["python", "python", "python"]);
        assert_eq!(jobs[0].missing_skills.as_deref(), Some(""));

        // the sql/docker job matches nothing the candidate has
        assert_eq!(jobs[1].match_score, Some(0.0));
        assert_eq!(jobs[1].missing_skills.as_deref(), Some("sql,docker"));

        // the job with no required skills has an undefined score and sorts last
        assert_eq!(jobs[2].match_score, None);
    }

    #[test]
    fn test_pre_extracted_skills_are_kept() {
        let m = matcher(&["python"]);
        let mut jobs = vec![JobPosting {
            skills: vec!["kubernetes".to_string()],
            ..job("python everywhere")
        }];
        rank_jobs(&mut jobs, &["python".to_string()], &m);

        // stored skills win over re-extraction
        assert_eq!(jobs[0].skills, vec!["kubernetes"]);
        assert_eq!(jobs[0].match_score, Some(0.0));
        assert_eq!(jobs[0].missing_skills.as_deref(), Some("kubernetes"));
    }

    #[test]
    fn test_jobs_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");

        let jobs = vec![JobPosting {
            job_id: Some(42),
            title: Some("Data Engineer".to_string()),
            company: None,
            ..job("Build pipelines with python and sql")
        }];
        save_jobs(&path, &jobs).unwrap();

        let loaded = load_jobs(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].job_id, Some(42));
        assert_eq!(loaded[0].title.as_deref(), Some("Data Engineer"));
        assert!(loaded[0].company.is_none());
    }
}
