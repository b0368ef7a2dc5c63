//! Match report structures shared by all output formats

use crate::jobs::JobPosting;
use crate::matching::annotate::TokenLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full result of matching one résumé against one or more job postings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub resume: ResumeSummary,
    pub jobs: Vec<JobMatch>,
    pub generated_at: DateTime<Utc>,
}

/// What the matcher found in the candidate's résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSummary {
    /// Path the résumé text came from.
    pub source: String,
    /// Deduplicated lowercase skills extracted from the résumé.
    pub skills: Vec<String>,
}

/// One job's scoring outcome, plus the labeled job text when requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub match_score: Option<f64>,
    pub required_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Per-token labeling of the job description, `None` when annotation
    /// was not requested or unavailable.
    pub annotation: Option<AnnotatedText>,
}

/// A job description with one label per token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedText {
    pub tokens: Vec<String>,
    pub labels: Vec<TokenLabel>,
}

impl AnnotatedText {
    /// Wrap an annotation result; an empty token list means annotation was
    /// unavailable and collapses to `None`.
    pub fn from_parts(tokens: Vec<String>, labels: Vec<TokenLabel>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens, labels })
        }
    }
}

impl MatchReport {
    pub fn new(resume: ResumeSummary, jobs: Vec<JobMatch>) -> Self {
        Self {
            resume,
            jobs,
            generated_at: Utc::now(),
        }
    }
}

impl JobMatch {
    /// Summarize a scored posting; the annotation is attached separately.
    pub fn from_posting(job: &JobPosting) -> Self {
        let missing_skills = job
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

        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            match_score: job.match_score,
            required_skills: job.skills.clone(),
            missing_skills,
            annotation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_annotation_collapses_to_none() {
        assert!(AnnotatedText::from_parts(Vec::new(), Vec::new()).is_none());
        let some = AnnotatedText::from_parts(vec!["x".to_string()], vec![TokenLabel::Other]);
        assert!(some.is_some());
    }

    #[test]
    fn test_job_match_splits_missing_skills() {
        let mut job = JobPosting::new("desc".to_string());
        job.missing_skills = Some("sql,docker".to_string());
        job.match_score = Some(50.0);
        let m = JobMatch::from_posting(&job);
        assert_eq!(m.missing_skills, vec!["sql", "docker"]);

        job.missing_skills = Some(String::new());
        let m = JobMatch::from_posting(&job);
        assert!(m.missing_skills.is_empty());
    }
}
