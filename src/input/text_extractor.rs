//! Text extraction from résumé and job description files

use crate::error::{Result, SkillScanError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// PDF résumés, the format the original analyzer accepted.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(SkillScanError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            SkillScanError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(SkillScanError::Io)?;
        Ok(content)
    }
}

/// Markdown job descriptions, flattened to plain text so formatting never
/// leaks into tokenization.
pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await.map_err(SkillScanError::Io)?;
        Ok(markdown_to_text(&markdown))
    }
}

/// Collect the text events of a Markdown document, dropping all markup.
fn markdown_to_text(markdown: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item) => out.push('\n'),
            _ => {}
        }
    }

    let lines: Vec<&str> = out
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_strips_markup() {
        let md = "# Skills\n\n- **Python** and `SQL`\n- Data Science\n";
        let text = markdown_to_text(md);
        assert!(text.contains("Python and SQL"));
        assert!(text.contains("Data Science"));
        assert!(!text.contains('#'));
        assert!(!text.contains('*'));
        assert!(!text.contains('`'));
    }
}
