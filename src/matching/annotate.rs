//! Per-token labeling of a job text against possessed and missing skills

use crate::matching::document::{MatchGroup, SkillSpan, TokenizedDocument};
use crate::matching::matcher::SkillMatcher;
use log::debug;
use serde::{Deserialize, Serialize};

/// Label assigned to every document token, exactly one per token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenLabel {
    /// Covered by a skill the candidate has.
    Matched,
    /// Covered by a required skill the candidate lacks.
    Missing,
    /// Not part of any skill phrase.
    Other,
}

/// Merge two span sets into one label per token.
///
/// When a token is covered by both groups (phrases of different lengths can
/// overlap) the missing label wins; matched wins over other. Labels always
/// partition the token range, so the returned vectors are index-aligned and
/// the same length as the document.
///
/// Spans that fall outside the document signal that the caller's skill text
/// did not tokenize consistently with this document; annotation then degrades
/// to two empty vectors rather than guessing ("annotation unavailable", not
/// "zero-length document").
pub fn annotate(
    doc: &TokenizedDocument,
    possessed: &[SkillSpan],
    missing: &[SkillSpan],
) -> (Vec<String>, Vec<TokenLabel>) {
    let consistent = possessed
        .iter()
        .chain(missing.iter())
        .all(|span| span.start < span.end && span.end <= doc.len());
    if !consistent {
        debug!("Inconsistent spans for a {}-token document, skipping annotation", doc.len());
        return (Vec::new(), Vec::new());
    }

    let mut labels = vec![TokenLabel::Other; doc.len()];
    for span in possessed {
        for label in &mut labels[span.start..span.end] {
            *label = TokenLabel::Matched;
        }
    }
    // missing wins where both groups cover a token
    for span in missing {
        for label in &mut labels[span.start..span.end] {
            *label = TokenLabel::Missing;
        }
    }

    (doc.tokens().to_vec(), labels)
}

/// Annotate a job text directly from skill lists, the way the résumé
/// analyzer consumes it: the required skills are partitioned against the
/// missing list, matched in one scan, and merged into per-token labels.
///
/// Total by policy: a matcher build failure is degraded to empty output.
pub fn annotate_text(
    job_text: &str,
    required_skills: &[String],
    missing_skills: &[String],
) -> (Vec<String>, Vec<TokenLabel>) {
    let doc = TokenizedDocument::new(job_text);
    let matcher = match SkillMatcher::partitioned(required_skills, missing_skills) {
        Ok(matcher) => matcher,
        Err(e) => {
            debug!("Annotation matcher unavailable: {}", e);
            return (Vec::new(), Vec::new());
        }
    };

    let spans = matcher.match_spans(&doc);
    let (possessed, missing): (Vec<SkillSpan>, Vec<SkillSpan>) = spans
        .into_iter()
        .partition(|span| span.group == MatchGroup::Possessed);

    annotate(&doc, &possessed, &missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize, skill: &str, group: MatchGroup) -> SkillSpan {
        SkillSpan {
            start,
            end,
            skill: skill.to_string(),
            group,
        }
    }

    #[test]
    fn test_labels_partition_tokens() {
        let doc = TokenizedDocument::new("we need python and data science now");
        let possessed = vec![span(2, 3, "python", MatchGroup::Possessed)];
        let missing = vec![span(4, 6, "data science", MatchGroup::Missing)];

        let (tokens, labels) = annotate(&doc, &possessed, &missing);
        assert_eq!(tokens.len(), doc.len());
        assert_eq!(labels.len(), doc.len());
        assert_eq!(
            labels,
            vec![
                TokenLabel::Other,
                TokenLabel::Other,
                TokenLabel::Matched,
                TokenLabel::Other,
                TokenLabel::Missing,
                TokenLabel::Missing,
                TokenLabel::Other,
            ]
        );
    }

    #[test]
    fn test_missing_wins_overlap() {
        let doc = TokenizedDocument::new("big data science team");
        // "data science" possessed, "big data" missing: token 1 is covered
        // by both and must come out Missing
        let possessed = vec![span(1, 3, "data science", MatchGroup::Possessed)];
        let missing = vec![span(0, 2, "big data", MatchGroup::Missing)];

        let (_, labels) = annotate(&doc, &possessed, &missing);
        assert_eq!(labels[0], TokenLabel::Missing);
        assert_eq!(labels[1], TokenLabel::Missing);
        assert_eq!(labels[2], TokenLabel::Matched);
        assert_eq!(labels[3], TokenLabel::Other);
    }

    #[test]
    fn test_out_of_range_span_degrades_to_empty() {
        let doc = TokenizedDocument::new("short text");
        let bad = vec![span(1, 5, "phantom", MatchGroup::Possessed)];
        let (tokens, labels) = annotate(&doc, &bad, &[]);
        assert!(tokens.is_empty());
        assert!(labels.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let doc = TokenizedDocument::new("");
        let (tokens, labels) = annotate(&doc, &[], &[]);
        assert!(tokens.is_empty());
        assert!(labels.is_empty());
    }

    #[test]
    fn test_annotate_text_end_to_end() {
        let required = vec!["python".to_string(), "sql".to_string()];
        let missing = vec!["sql".to_string()];
        let (tokens, labels) = annotate_text("Python and SQL required", &required, &missing);

        assert_eq!(tokens, vec!["Python", "and", "SQL", "required"]);
        assert_eq!(
            labels,
            vec![
                TokenLabel::Matched,
                TokenLabel::Other,
                TokenLabel::Missing,
                TokenLabel::Other,
            ]
        );
    }
}
