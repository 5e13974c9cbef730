//! Text extraction with an encoding fallback

use crate::error::{Result, ResumeRankerError};
use encoding_rs::Encoding;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Reads UTF-8 text, retrying with a fallback encoding when the bytes are not valid UTF-8
pub struct PlainTextExtractor {
    fallback: &'static Encoding,
}

impl PlainTextExtractor {
    pub fn new(fallback_label: &str) -> Result<Self> {
        let fallback = Encoding::for_label(fallback_label.as_bytes()).ok_or_else(|| {
            ResumeRankerError::Configuration(format!("Unknown fallback encoding: {}", fallback_label))
        })?;
        Ok(Self { fallback })
    }

    pub fn decode(&self, bytes: Vec<u8>, path: &Path) -> Result<String> {
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                log::warn!(
                    "{} is not valid UTF-8, decoding as {}",
                    path.display(),
                    self.fallback.name()
                );
                let bytes = err.into_bytes();
                let (text, had_errors) = self.fallback.decode_without_bom_handling(&bytes);
                if had_errors {
                    return Err(ResumeRankerError::Decoding(format!(
                        "'{}' is neither UTF-8 nor {}",
                        path.display(),
                        self.fallback.name()
                    )));
                }
                Ok(text.into_owned())
            }
        }
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self { fallback: encoding_rs::WINDOWS_1252 }
    }
}

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        self.decode(bytes, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let extractor = PlainTextExtractor::default();
        let text = extractor.decode("Café résumé".as_bytes().to_vec(), Path::new("a.txt")).unwrap();
        assert_eq!(text, "Café résumé");
    }

    #[test]
    fn test_latin1_fallback() {
        let extractor = PlainTextExtractor::new("latin1").unwrap();
        // "Café" in ISO-8859-1
        let text = extractor.decode(vec![0x43, 0x61, 0x66, 0xE9], Path::new("a.txt")).unwrap();
        assert_eq!(text, "Café");
    }

    #[test]
    fn test_unknown_label() {
        assert!(PlainTextExtractor::new("not-an-encoding").is_err());
    }
}
