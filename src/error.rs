//! Crate-wide error type.
//!
//! Each subsystem defines its own error enum; [`Error`] wraps them so
//! application callbacks and the window can use `?` across subsystems.

use std::path::PathBuf;

use crate::binding::BindError;
use crate::chrome::ChromeError;
use crate::compose::ComposeError;
use crate::live::HostError;
use crate::markup::CompileError;
use crate::style::{ParseError, StyleError};

/// Any error the composition layer can raise.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compose(#[from] ComposeError),
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Bind(#[from] BindError),
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error(transparent)]
    StyleParse(#[from] ParseError),
    #[error(transparent)]
    Chrome(#[from] ChromeError),
    #[error(transparent)]
    Host(#[from] HostError),
    #[error("cannot write markup to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias with the crate [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsystem_errors_convert() {
        let err: Error = StyleError::UnknownStyleSelector("Button:hover".into()).into();
        assert!(matches!(err, Error::Style(_)));
        assert_eq!(err.to_string(), "unknown style selector `Button:hover`");

        let err: Error = ChromeError::InvalidEdge(7).into();
        assert!(matches!(err, Error::Chrome(ChromeError::InvalidEdge(7))));
    }

    #[test]
    fn io_error_names_path() {
        let err = Error::Io {
            path: PathBuf::from("/nowhere/main.qml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "cannot write markup to /nowhere/main.qml: missing");
    }
}
