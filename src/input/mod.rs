//! Input processing module
//! Handles file detection, text decoding, and input management

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
