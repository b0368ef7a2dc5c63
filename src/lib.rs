//! Skillscan library: rule-based skill extraction and job matching

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod jobs;
pub mod matching;
pub mod output;

pub use config::Config;
pub use error::{Result, SkillScanError};
