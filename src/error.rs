use thiserror::Error;
use std::io;

/// Custom result type alias for the application
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Errors that can occur while summarizing an archive
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// I/O errors
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// ZIP archive errors (malformed or unsupported archive)
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// An archive entry could not be materialized on disk
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl AnalyzerError {
    /// Checks if this error came from reading or unpacking the archive
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, Self::Zip(_) | Self::Extraction(_))
    }

    /// Checks if this error was caused by bad caller input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_failure_kinds() {
        let zip = AnalyzerError::Zip(zip::result::ZipError::InvalidArchive("bad header"));
        let slip = AnalyzerError::Extraction("entry escapes".into());
        let io = AnalyzerError::IO(io::Error::new(io::ErrorKind::Other, "disk"));

        assert!(zip.is_extraction_failure());
        assert!(slip.is_extraction_failure());
        assert!(!io.is_extraction_failure());
    }

    #[test]
    fn test_client_error() {
        assert!(AnalyzerError::Validation("no file".into()).is_client_error());
        assert!(!AnalyzerError::Config("bad".into()).is_client_error());
    }
}
