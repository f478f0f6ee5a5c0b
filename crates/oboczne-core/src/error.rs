use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Dictionary unavailable: {}: {reason}", path.display())]
    DictionaryUnavailable { path: PathBuf, reason: String },

    #[error("Document unavailable: {}: {reason}", path.display())]
    DocumentUnavailable { path: PathBuf, reason: String },

    #[error("Invalid co-occurrence threshold: {0} (must be at least 2)")]
    InvalidThreshold(usize),

    #[error("Report error: {0}")]
    Report(String),
}

impl Error {
    pub fn dictionary(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::DictionaryUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn document(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::DocumentUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Failures raised while acquiring dictionary or document text.
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::DictionaryUnavailable { .. } | Self::DocumentUnavailable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_kinds() {
        assert!(Error::dictionary("slownik.txt", "missing").is_input_error());
        assert!(Error::document("tekst.docx", "bad zip").is_input_error());
        assert!(!Error::InvalidThreshold(1).is_input_error());
    }

    #[test]
    fn test_error_message_names_path() {
        let err = Error::document("tekst.docx", "no word/document.xml");
        assert_eq!(
            err.to_string(),
            "Document unavailable: tekst.docx: no word/document.xml"
        );
    }
}
