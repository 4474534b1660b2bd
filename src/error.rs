// SPDX-License-Identifier: MPL-2.0
use std::fmt;

pub use crate::domain::error::ViewportError;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Viewport(ViewportError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Config(msg) => write!(f, "configuration error: {msg}"),
            Error::Viewport(err) => write!(f, "viewport error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<ViewportError> for Error {
    fn from(err: ViewportError) -> Self {
        Error::Viewport(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
