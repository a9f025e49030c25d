//! Error types surfaced by the extraction engine.

use std::io;
use std::path::PathBuf;

/// Structural problems found by [`crate::options::validate_options`].
///
/// The `Display` text is part of the public contract; callers match on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("'options' parameter is required!")]
    MissingOptions,

    #[error("'options.swaggerDefinition' or 'options.definition' is required!")]
    MissingDefinition,

    #[error("Swagger definition ('options.{key}') should contain an info object!")]
    MissingInfo { key: &'static str },

    #[error("Swagger definition info object ('options.{key}.info') requires title and version properties!")]
    InvalidInfo { key: &'static str },

    #[error("'options.apis' is required and it should be an array!")]
    MissingApis,
}

/// Failures while reading a source file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),
}

impl ReadError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ReadError::FileNotFound { path, source }
        } else {
            ReadError::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_messages_name_the_definition_key() {
        assert_eq!(
            OptionsError::MissingInfo { key: "definition" }.to_string(),
            "Swagger definition ('options.definition') should contain an info object!"
        );
        assert_eq!(
            OptionsError::InvalidInfo {
                key: "swaggerDefinition"
            }
            .to_string(),
            "Swagger definition info object ('options.swaggerDefinition.info') requires title and version properties!"
        );
    }

    #[test]
    fn not_found_is_classified() {
        let err = ReadError::from_io(
            PathBuf::from("missing.js"),
            io::Error::new(io::ErrorKind::NotFound, "nope"),
        );
        assert!(matches!(err, ReadError::FileNotFound { .. }));

        let err = ReadError::from_io(
            PathBuf::from("locked.js"),
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(err, ReadError::Io { .. }));
    }
}
