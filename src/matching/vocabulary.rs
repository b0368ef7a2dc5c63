//! Skill vocabularies and their on-disk pattern representation

use crate::matching::phrase::SkillPhrase;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Rule label carried by every serialized pattern.
pub const SKILL_LABEL: &str = "SKILL";

/// An ordered collection of skill phrases.
///
/// Order matches the source skill list so the generated pattern file is
/// reproducible line for line. Duplicates are not rejected; matching treats
/// them as one skill anyway since extraction collapses to a name set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillVocabulary {
    phrases: Vec<SkillPhrase>,
}

/// One line of the JSONL pattern file:
/// `{"label": "SKILL", "pattern": [{"LOWER": "data"}, {"LOWER": "science"}]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PatternEntry {
    label: String,
    pattern: Vec<PatternToken>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PatternToken {
    #[serde(rename = "LOWER")]
    lower: String,
}

impl SkillVocabulary {
    pub fn new(phrases: Vec<SkillPhrase>) -> Self {
        Self { phrases }
    }

    /// Build from the lines of a skill list file, one phrase per non-blank
    /// line, source order preserved.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = lines
            .into_iter()
            .filter(|line| !line.as_ref().trim().is_empty())
            .map(|line| SkillPhrase::build(line.as_ref().trim()))
            .collect();
        Self { phrases }
    }

    pub fn phrases(&self) -> &[SkillPhrase] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Serialize to the JSONL pattern format, one entry per phrase in
    /// vocabulary order, non-ASCII characters escaped as `\uXXXX`.
    pub fn to_jsonl(&self) -> String {
        let mut out = String::new();
        for phrase in &self.phrases {
            let entry = PatternEntry {
                label: SKILL_LABEL.to_string(),
                pattern: phrase
                    .tokens()
                    .iter()
                    .map(|tok| PatternToken { lower: tok.clone() })
                    .collect(),
            };
            // serde_json never fails on these plain structs
            let json = serde_json::to_string(&entry).unwrap_or_default();
            out.push_str(&ascii_escape(&json));
            out.push('\n');
        }
        out
    }

    /// Parse a JSONL pattern file back into a vocabulary. Malformed lines
    /// and entries with an empty pattern are skipped with a warning; an
    /// empty file yields an empty (still usable) vocabulary.
    pub fn from_jsonl(content: &str) -> Self {
        let mut phrases = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<PatternEntry>(line) {
                Ok(entry) => {
                    let tokens: Vec<String> =
                        entry.pattern.into_iter().map(|tok| tok.lower).collect();
                    match SkillPhrase::from_tokens(tokens) {
                        Some(phrase) => phrases.push(phrase),
                        None => warn!("Skipping pattern with no tokens at line {}", line_no + 1),
                    }
                }
                Err(e) => warn!("Skipping malformed pattern line {}: {}", line_no + 1, e),
            }
        }
        Self { phrases }
    }
}

/// Escape every non-ASCII character in a JSON string as `\uXXXX`, matching
/// the ensure-ASCII convention of the pattern file consumers.
fn ascii_escape(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            let mut buf = [0u16; 2];
            for unit in ch.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

/// Process-wide vocabulary handle, shared read-only across concurrent
/// matching calls.
///
/// The vocabulary behind the handle is never mutated: a reload builds a new
/// `SkillVocabulary` and swaps the `Arc` atomically, so in-flight matches
/// keep reading the generation they started with.
#[derive(Debug, Default)]
pub struct SharedVocabulary {
    inner: RwLock<Arc<SkillVocabulary>>,
}

impl SharedVocabulary {
    pub fn new(vocab: SkillVocabulary) -> Self {
        Self {
            inner: RwLock::new(Arc::new(vocab)),
        }
    }

    /// Snapshot of the current vocabulary generation.
    pub fn current(&self) -> Arc<SkillVocabulary> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the shared vocabulary with a freshly built one.
    pub fn swap(&self, vocab: SkillVocabulary) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(vocab);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_skips_blanks_and_keeps_order() {
        let vocab = SkillVocabulary::from_lines(["Python", "", "  ", "Data Science", "SQL"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.phrases()[0].name(), "python");
        assert_eq!(vocab.phrases()[1].name(), "data science");
        assert_eq!(vocab.phrases()[2].name(), "sql");
    }

    #[test]
    fn test_jsonl_shape() {
        let vocab = SkillVocabulary::from_lines(["Data Science"]);
        let jsonl = vocab.to_jsonl();
        assert_eq!(
            jsonl,
            "{\"label\":\"SKILL\",\"pattern\":[{\"LOWER\":\"data\"},{\"LOWER\":\"science\"}]}\n"
        );
    }

    #[test]
    fn test_jsonl_round_trip() {
        let vocab = SkillVocabulary::from_lines(["Python", "Data Science", "C++"]);
        let parsed = SkillVocabulary::from_jsonl(&vocab.to_jsonl());
        assert_eq!(parsed, vocab);
    }

    #[test]
    fn test_jsonl_ascii_escapes_non_ascii() {
        let vocab = SkillVocabulary::from_lines(["réseau"]);
        let jsonl = vocab.to_jsonl();
        assert!(jsonl.is_ascii());
        assert!(jsonl.contains("r\\u00e9seau"));
        let parsed = SkillVocabulary::from_jsonl(&jsonl);
        assert_eq!(parsed.phrases()[0].name(), "réseau");
    }

    #[test]
    fn test_from_jsonl_skips_malformed_lines() {
        let content = "{\"label\":\"SKILL\",\"pattern\":[{\"LOWER\":\"python\"}]}\n\
                       not json at all\n\
                       {\"label\":\"SKILL\",\"pattern\":[]}\n\
                       {\"label\":\"SKILL\",\"pattern\":[{\"LOWER\":\"sql\"}]}\n";
        let vocab = SkillVocabulary::from_jsonl(content);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.phrases()[0].name(), "python");
        assert_eq!(vocab.phrases()[1].name(), "sql");
    }

    #[test]
    fn test_shared_vocabulary_swap() {
        let shared = SharedVocabulary::new(SkillVocabulary::from_lines(["python"]));
        let before = shared.current();
        shared.swap(SkillVocabulary::from_lines(["python", "sql"]));
        // the old snapshot is untouched, the new one is visible
        assert_eq!(before.len(), 1);
        assert_eq!(shared.current().len(), 2);
    }
}
