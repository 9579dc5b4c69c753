use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("{}", parse_error_display(.message, .file_path, .position))]
    ParseError {
        message: String,
        file_path: Option<PathBuf>,
        position: Option<u64>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn parse_error_display(
    message: &str,
    file_path: &Option<PathBuf>,
    position: &Option<u64>,
) -> String {
    let mut rendered = String::from("Manifest parse error");
    if let Some(path) = file_path {
        rendered.push_str(&format!(" in {}", path.display()));
    }
    if let Some(position) = position {
        rendered.push_str(&format!(" at byte {}", position));
    }
    rendered.push_str(&format!(": {}", message));
    rendered
}

impl DiffError {
    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn parse_error(message: impl Into<String>, position: Option<u64>) -> Self {
        Self::ParseError {
            message: message.into(),
            file_path: None,
            position,
            source: None,
        }
    }

    pub fn parse_error_with_source(
        message: impl Into<String>,
        position: Option<u64>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ParseError {
            message: message.into(),
            file_path: None,
            position,
            source: Some(Box::new(source)),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InternalError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Attach the manifest path to a parse error raised before the path was known.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::ParseError {
                message,
                file_path: None,
                position,
                source,
            } => Self::ParseError {
                message,
                file_path: Some(path.into()),
                position,
                source,
            },
            other => other,
        }
    }

    /// Returns true when the error came from reading the input rather than its content.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::FileSystemError { .. })
    }
}

impl From<std::io::Error> for DiffError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_error_with_path() {
        let path = PathBuf::from("/test/old.xml");
        let error = DiffError::filesystem_error("test message", Some(path.clone()));
        if let DiffError::FileSystemError { path: Some(p), .. } = error {
            assert_eq!(p, path);
        } else {
            panic!("Expected FileSystemError with path");
        }
    }

    #[test]
    fn test_parse_error_display_includes_context() {
        let error = DiffError::parse_error("missing root", Some(12)).in_file("new.xml");
        assert_eq!(
            error.to_string(),
            "Manifest parse error in new.xml at byte 12: missing root"
        );
    }

    #[test]
    fn test_parse_error_display_without_context() {
        let error = DiffError::parse_error("missing root", None);
        assert_eq!(error.to_string(), "Manifest parse error: missing root");
    }

    #[test]
    fn test_in_file_keeps_existing_path() {
        let error = DiffError::parse_error("bad", None)
            .in_file("first.xml")
            .in_file("second.xml");
        if let DiffError::ParseError {
            file_path: Some(p), ..
        } = error
        {
            assert_eq!(p, PathBuf::from("first.xml"));
        } else {
            panic!("Expected ParseError with path");
        }
    }

    #[test]
    fn test_error_conversion_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let diff_error: DiffError = io_error.into();
        assert!(diff_error.is_io());
    }
}
