//! Input handling: file detection, text extraction, vocabulary loading

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
