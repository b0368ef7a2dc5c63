//! Skill extraction and matching engine

pub mod annotate;
pub mod document;
pub mod matcher;
pub mod phrase;
pub mod score;
pub mod vocabulary;

pub use annotate::{annotate, annotate_text, TokenLabel};
pub use document::{MatchGroup, SkillSpan, TokenizedDocument};
pub use matcher::SkillMatcher;
pub use phrase::SkillPhrase;
pub use score::{score, score_list, ScoreResult};
pub use vocabulary::{SharedVocabulary, SkillVocabulary};
