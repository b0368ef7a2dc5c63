//! Input manager: routes files to extractors, loads skill vocabularies

use crate::error::{Result, SkillScanError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use crate::matching::vocabulary::SkillVocabulary;
use log::info;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Extract the plain text of a résumé or job description file.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(SkillScanError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(SkillScanError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Load a skill vocabulary from a line-oriented skill list file,
    /// one phrase per line, blank lines ignored.
    pub async fn load_skill_list(&self, path: &Path) -> Result<SkillVocabulary> {
        let content = fs::read_to_string(path).await.map_err(SkillScanError::Io)?;
        let vocab = SkillVocabulary::from_lines(content.lines());
        info!(
            "Loaded {} skill phrases from {}",
            vocab.len(),
            path.display()
        );
        Ok(vocab)
    }

    /// Load a vocabulary back from a generated JSONL pattern file.
    pub async fn load_pattern_file(&self, path: &Path) -> Result<SkillVocabulary> {
        let content = fs::read_to_string(path).await.map_err(SkillScanError::Io)?;
        Ok(SkillVocabulary::from_jsonl(&content))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
