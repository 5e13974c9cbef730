//! Input manager for reading resumes and job descriptions

use crate::config::InputConfig;
use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    extractor: PlainTextExtractor,
    allowed_extensions: Vec<String>,
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            extractor: PlainTextExtractor::default(),
            allowed_extensions: vec!["txt".to_string(), "md".to_string(), "text".to_string()],
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn from_config(config: &InputConfig) -> Result<Self> {
        Ok(Self {
            extractor: PlainTextExtractor::new(&config.fallback_encoding)?,
            allowed_extensions: config.allowed_extensions.iter().map(|e| e.to_lowercase()).collect(),
            cache: HashMap::new(),
            enable_cache: true,
        })
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeRankerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        self.validate_extension(path)?;

        let text = match FileType::from_path(path) {
            // Markdown is read verbatim; markup symbols fall out during tokenization
            file_type @ (FileType::Text | FileType::Markdown) => {
                info!("Reading {:?} file as plain text: {}", file_type, path.display());
                self.extractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeRankerError::UnsupportedFormat(format!(
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

    fn validate_extension(&self, path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| {
                ResumeRankerError::UnsupportedFormat(format!("File has no extension: {}", path.display()))
            })?;

        if self.allowed_extensions.contains(&extension) {
            Ok(())
        } else {
            Err(ResumeRankerError::UnsupportedFormat(format!(
                "Unsupported file extension .{} for {}. Allowed: {}",
                extension,
                path.display(),
                self.allowed_extensions.join(", ")
            )))
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
