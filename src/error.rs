use std::io;
use std::path::{Path, PathBuf};

/// What is wrong with a `v` line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected 3 coordinates, found {found}")]
    MissingCoordinate { found: usize },

    #[error("'{token}' is not a number")]
    InvalidNumber { token: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed vertex at line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    #[error("line {line} is not valid UTF-8")]
    Encoding { line: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid scale factor: {0}")]
    InvalidFactor(f64),

    #[error("input and output are the same file: {}", .0.display())]
    SameFile(PathBuf),
}

impl ScaleError {
    pub(crate) fn file_access(path: &Path, source: io::Error) -> ScaleError {
        ScaleError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}
