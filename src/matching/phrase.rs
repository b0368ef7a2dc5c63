//! Skill phrases: ordered lowercase token sequences used for exact matching

use serde::{Deserialize, Serialize};
use std::fmt;

/// A skill phrase, e.g. "Data Science" -> ["data", "science"].
///
/// Tokens are lowercased and split on whitespace; punctuation stays part of
/// the token ("c++" is one token and matches literally). The token sequence
/// is fixed after construction and always has at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillPhrase {
    tokens: Vec<String>,
}

impl SkillPhrase {
    /// Build a phrase from raw skill text. Whitespace runs collapse into
    /// token boundaries; an all-whitespace input degenerates to a single
    /// token equal to the lowercased whole string. Never fails.
    pub fn build(text: &str) -> Self {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|tok| tok.to_lowercase())
            .collect();

        if tokens.is_empty() {
            return Self {
                tokens: vec![text.to_lowercase()],
            };
        }

        Self { tokens }
    }

    /// Construct directly from already-lowercased tokens, e.g. when parsing
    /// a serialized pattern file. Returns None for an empty token list.
    pub fn from_tokens(tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        false // invariant: at least one token
    }

    /// Canonical skill name: tokens joined by a single space.
    pub fn name(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for SkillPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
