//! Exact phrase matching of a skill vocabulary against tokenized documents

use crate::error::{Result, SkillScanError};
use crate::matching::document::{MatchGroup, SkillSpan, TokenizedDocument};
use crate::matching::phrase::SkillPhrase;
use crate::matching::vocabulary::SkillVocabulary;
use aho_corasick::AhoCorasick;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Matcher for literal, case-insensitive skill phrases.
///
/// Patterns are run over the space-joined lowercase fold of a document with
/// an Aho-Corasick automaton, then filtered to token boundaries, so a hit is
/// always a contiguous token subsequence equal to the phrase token for token.
/// There is no longest-match suppression: "data" and "data science" both
/// report over the same region. Occurrences of one phrase never overlap each
/// other (left-to-right, restart after each hit).
pub struct SkillMatcher {
    automaton: AhoCorasick,
    patterns: Vec<PatternInfo>,
}

struct PatternInfo {
    name: String,
    group: MatchGroup,
}

impl SkillMatcher {
    /// Build a matcher over a whole vocabulary, all patterns in the
    /// `Possessed` group. Group tags only matter for annotation.
    pub fn from_vocabulary(vocab: &SkillVocabulary) -> Result<Self> {
        let phrases: Vec<(SkillPhrase, MatchGroup)> = vocab
            .phrases()
            .iter()
            .map(|phrase| (phrase.clone(), MatchGroup::Possessed))
            .collect();
        Self::build(phrases)
    }

    /// Build a matcher from required skill names partitioned against a list
    /// of missing skills: a phrase whose name appears in `missing` is tagged
    /// `Missing`, every other phrase `Possessed`.
    pub fn partitioned(skills: &[String], missing: &[String]) -> Result<Self> {
        let missing_set: HashSet<&str> = missing.iter().map(String::as_str).collect();
        let phrases: Vec<(SkillPhrase, MatchGroup)> = skills
            .iter()
            .map(|skill| {
                let group = if missing_set.contains(skill.as_str()) {
                    MatchGroup::Missing
                } else {
                    MatchGroup::Possessed
                };
                (SkillPhrase::build(skill), group)
            })
            .collect();
        Self::build(phrases)
    }

    fn build(phrases: Vec<(SkillPhrase, MatchGroup)>) -> Result<Self> {
        let patterns: Vec<PatternInfo> = phrases
            .iter()
            .map(|(phrase, group)| PatternInfo {
                name: phrase.name(),
                group: *group,
            })
            .collect();

        let pattern_strings: Vec<&str> = patterns.iter().map(|p| p.name.as_str()).collect();
        let automaton = AhoCorasick::new(&pattern_strings).map_err(|e| {
            SkillScanError::Processing(format!("Failed to build skill matcher: {}", e))
        })?;

        Ok(Self {
            automaton,
            patterns,
        })
    }

    /// Number of phrase patterns loaded into the automaton.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Every occurrence of every phrase as a token span, in document order.
    pub fn match_spans(&self, doc: &TokenizedDocument) -> Vec<SkillSpan> {
        if doc.is_empty() || self.patterns.is_empty() {
            return Vec::new();
        }

        // Join the folded tokens with single spaces and remember where each
        // token starts and ends, so byte hits map back to token indexes.
        let folded = doc.folded();
        let mut joined = String::new();
        let mut start_index = HashMap::new();
        let mut end_index = HashMap::new();
        for (idx, token) in folded.iter().enumerate() {
            if idx > 0 {
                joined.push(' ');
            }
            start_index.insert(joined.len(), idx);
            joined.push_str(token);
            end_index.insert(joined.len(), idx + 1);
        }

        // Overlapping search reports every phrase at every position; only
        // hits aligned to token boundaries are real phrase occurrences.
        let mut hits: Vec<(usize, usize, usize)> = Vec::new();
        for mat in self.automaton.find_overlapping_iter(&joined) {
            let (Some(&start), Some(&end)) =
                (start_index.get(&mat.start()), end_index.get(&mat.end()))
            else {
                continue;
            };
            hits.push((mat.pattern().as_usize(), start, end));
        }

        // Drop occurrences of the same phrase that overlap an earlier one.
        hits.sort_by_key(|&(pid, start, end)| (pid, start, end));
        let mut last_end: HashMap<usize, usize> = HashMap::new();
        let mut spans: Vec<SkillSpan> = Vec::new();
        for (pid, start, end) in hits {
            let floor = last_end.get(&pid).copied().unwrap_or(0);
            if start < floor {
                continue;
            }
            last_end.insert(pid, end);
            let info = &self.patterns[pid];
            spans.push(SkillSpan {
                start,
                end,
                skill: info.name.clone(),
                group: info.group,
            });
        }

        spans.sort_by_key(|span| (span.start, span.end));
        spans
    }

    /// One skill name per occurrence, in document order, duplicates kept.
    pub fn extract_skill_names(&self, doc: &TokenizedDocument) -> Vec<String> {
        self.match_spans(doc)
            .into_iter()
            .map(|span| span.skill)
            .collect()
    }

    /// Deduplicated lowercase skill names with at least one occurrence.
    pub fn extract_skills(&self, doc: &TokenizedDocument) -> BTreeSet<String> {
        self.extract_skill_names(doc).into_iter().collect()
    }
}
