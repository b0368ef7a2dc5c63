//! Match scoring between required and possessed skill sets

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of scoring one job's required skills against a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Percentage of required skills satisfied, one decimal, in `[0, 100]`.
    /// `None` when there are no required skills (undefined, not an error).
    pub match_score: Option<f64>,
    /// Required skills the candidate lacks, required-list order and
    /// duplication preserved.
    pub missing_skills: Vec<String>,
}

impl ScoreResult {
    /// The missing skills as one comma-joined string, the shape the job
    /// listing rendering consumes.
    pub fn missing_skills_joined(&self) -> String {
        self.missing_skills.join(",")
    }
}

/// Fixed delimiter for the one-string skill representation. Items are not
/// trimmed; callers own any whitespace they pass in.
pub fn join_skills(skills: &[String]) -> String {
    skills.join(",")
}

/// Inverse of [`join_skills`]: split a comma-joined skill string back into
/// items, again without trimming.
pub fn split_skills(joined: &str) -> Vec<String> {
    joined.split(',').map(str::to_string).collect()
}

/// Percentage of required skills found in the possessed skills.
///
/// Known quirk, kept deliberately: the membership test is a substring test
/// of each required skill against the comma-joined possessed string, not set
/// membership. A candidate with only "javascript" therefore also satisfies a
/// required "java". `missing_skills` below uses the correct set test; the
/// two are intentionally not unified.
pub fn match_score(required: &[String], possessed_joined: &str) -> Option<f64> {
    if required.is_empty() {
        return None;
    }
    let hits = required
        .iter()
        .filter(|skill| possessed_joined.contains(skill.as_str()))
        .count();
    let pct = hits as f64 / required.len() as f64 * 100.0;
    Some((pct * 10.0).round() / 10.0)
}

/// Required skills whose lowercase form is not among the possessed skills.
///
/// The possessed string splits on commas with no trimming; membership is
/// exact (case-folded) equality, unlike the scoring substring test above.
pub fn missing_skills(required: &[String], possessed_joined: &str) -> Vec<String> {
    let possessed: HashSet<String> = possessed_joined
        .split(',')
        .map(str::to_lowercase)
        .collect();
    required
        .iter()
        .filter(|skill| !possessed.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Score a job's required skills against a comma-joined possessed string.
pub fn score(required: &[String], possessed_joined: &str) -> ScoreResult {
    ScoreResult {
        match_score: match_score(required, possessed_joined),
        missing_skills: missing_skills(required, possessed_joined),
    }
}

/// Same as [`score`] with the possessed skills as a list.
pub fn score_list(required: &[String], possessed: &[String]) -> ScoreResult {
    score(required, &join_skills(possessed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_required_is_undefined() {
        let result = score_list(&[], &skills(&["python"]));
        assert_eq!(result.match_score, None);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_full_match() {
        let result = score_list(&skills(&["python", "sql"]), &skills(&["python", "sql"]));
        assert_eq!(result.match_score, Some(100.0));
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_partial_match() {
        let result = score_list(&skills(&["python", "sql", "docker"]), &skills(&["python"]));
        assert_eq!(result.match_score, Some(33.3));
        assert_eq!(result.missing_skills, skills(&["sql", "docker"]));
    }

    #[test]
    fn test_known_quirk_substring_membership_inflates_score() {
        // "java" is a substring of the joined possessed string "javascript",
        // so the score counts both required skills as satisfied
        let result = score_list(&skills(&["java", "javascript"]), &skills(&["javascript"]));
        assert_eq!(result.match_score, Some(100.0));
        // while the missing-skill path correctly reports "java" as absent
        assert_eq!(result.missing_skills, skills(&["java"]));
    }

    #[test]
    fn test_missing_skills_uses_set_membership() {
        assert_eq!(
            missing_skills(&skills(&["java", "javascript"]), "javascript"),
            skills(&["java"])
        );
    }

    #[test]
    fn test_missing_skills_case_folded() {
        assert_eq!(missing_skills(&skills(&["Python"]), "python"), Vec::<String>::new());
        assert_eq!(missing_skills(&skills(&["python"]), "PYTHON"), Vec::<String>::new());
    }

    #[test]
    fn test_no_trimming_of_possessed_items() {
        // " sql" with a stray space is a different item than "sql"
        let result = score(&skills(&["sql"]), "python, sql");
        assert_eq!(result.missing_skills, skills(&["sql"]));
        // the substring score still hits, another face of the quirk
        assert_eq!(result.match_score, Some(100.0));
    }

    #[test]
    fn test_required_duplicates_preserved() {
        let result = score_list(&skills(&["sql", "sql", "python"]), &skills(&["python"]));
        assert_eq!(result.missing_skills, skills(&["sql", "sql"]));
        assert_eq!(result.match_score, Some(33.3));
    }

    #[test]
    fn test_split_skills_keeps_items_verbatim() {
        assert_eq!(split_skills("python, sql"), skills(&["python", " sql"]));
        let required = split_skills("java,javascript");
        let result = score(&required, "javascript");
        assert_eq!(result.missing_skills, skills(&["java"]));
    }

    #[test]
    fn test_joined_round_trip() {
        let result = score_list(&skills(&["a", "b", "c"]), &skills(&["a"]));
        assert_eq!(result.missing_skills_joined(), "b,c");
    }
}
