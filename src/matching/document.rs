//! Tokenized documents shared by the matcher and the annotator

use serde::{Deserialize, Serialize};

/// A document split into whitespace-delimited tokens.
///
/// The boundary rule is the same one `SkillPhrase::build` uses, so a phrase
/// built from a vocabulary line and a document built from job text always
/// agree on token boundaries. Original casing is kept for display; matching
/// runs against the lowercase fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedDocument {
    tokens: Vec<String>,
    folded: Vec<String>,
}

impl TokenizedDocument {
    pub fn new(text: &str) -> Self {
        let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        let folded = tokens.iter().map(|tok| tok.to_lowercase()).collect();
        Self { tokens, folded }
    }

    /// Tokens with their original casing, in document order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Lowercase fold of the tokens, index-aligned with `tokens()`.
    pub fn folded(&self) -> &[String] {
        &self.folded
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A half-open token range `[start, end)` matched by one skill phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSpan {
    /// Index of the first covered token.
    pub start: usize,
    /// One past the last covered token.
    pub end: usize,
    /// Canonical (lowercase) name of the phrase that matched.
    pub skill: String,
    /// Which vocabulary partition the phrase belonged to.
    pub group: MatchGroup,
}

/// Vocabulary partition a pattern was registered under.
///
/// Mirrors the possessed/missing split the annotator needs: one scan over the
/// document labels every span with its group, equivalent to two independent
/// passes over the same tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchGroup {
    /// Skills the candidate has.
    Possessed,
    /// Required skills the candidate lacks.
    Missing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenization_preserves_case_and_folds() {
        let doc = TokenizedDocument::new("I study Data Science daily");
        assert_eq!(doc.len(), 5);
        assert_eq!(doc.tokens()[2], "Data");
        assert_eq!(doc.folded()[2], "data");
    }

    #[test]
    fn test_empty_text() {
        let doc = TokenizedDocument::new("   \n\t ");
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }
}
