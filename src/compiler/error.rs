//! Ambient error types
//!
//!     The core pipeline ([crate::compiler::lexer], [crate::compiler::parser],
//!     [crate::compiler::render]) is infallible - it never constructs a [CompileError]. This
//!     type exists for the layers around it that do have real failure modes in a CLI context:
//!     reading a source file that doesn't exist, or loading a malformed configuration file.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// An ambient failure from outside the core compile pipeline.
#[derive(Debug)]
pub enum CompileError {
    /// Reading the source file failed.
    Io { path: PathBuf, source: io::Error },
    /// Writing the rendered output failed.
    OutputIo { path: PathBuf, source: io::Error },
    /// Loading or parsing a configuration file failed.
    Config(String),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            CompileError::OutputIo { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            CompileError::Config(message) => write!(f, "configuration error: {message}"),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Io { source, .. } | CompileError::OutputIo { source, .. } => Some(source),
            CompileError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_path() {
        let err = CompileError::Io {
            path: PathBuf::from("missing.pug"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.pug"));
    }
}
