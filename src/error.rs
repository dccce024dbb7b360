//! Error type shared by the extractor and the template writer.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal failures of a conversion run.
///
/// Invalid network addresses are not errors, they are reported through
/// [`crate::output::DiagnosticSink`] instead.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV in '{}': {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed CSV in '{}' at line {line}: {reason}", .path.display())]
    Quoting {
        path: PathBuf,
        line: u64,
        reason: &'static str,
    },
    #[error("invalid column layout in '{}': {reason}", .path.display())]
    Layout { path: PathBuf, reason: String },
}

/// Failure decoding CSV from a reader, before a file path is attached.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Quoting the `csv` crate would silently accept.
    #[error("line {line}: {reason}")]
    Quoting { line: u64, reason: &'static str },
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        DecodeError::Csv(csv::Error::from(err))
    }
}

impl TemplateError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        TemplateError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Split a csv error into a read failure or a decoding failure.
    pub fn from_csv(path: &Path, source: csv::Error) -> Self {
        if source.is_io_error() {
            TemplateError::io(path, io::Error::other(source))
        } else {
            TemplateError::Format {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn from_decode(path: &Path, err: DecodeError) -> Self {
        match err {
            DecodeError::Csv(source) => TemplateError::from_csv(path, source),
            DecodeError::Quoting { line, reason } => TemplateError::Quoting {
                path: path.to_path_buf(),
                line,
                reason,
            },
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, TemplateError::Io { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(
            self,
            TemplateError::Format { .. } | TemplateError::Quoting { .. }
        )
    }
}
