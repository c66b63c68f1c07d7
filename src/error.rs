// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Gallery(String),
    Fetch(FetchError),
    Decode(String),
}

/// Failures while retrieving image bytes from their locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    Status(u16),

    /// Connection, TLS or protocol failure.
    Transport(String),

    /// The locator uses a scheme the loader does not understand.
    UnsupportedScheme(String),

    /// A `file` URL that does not name a local path.
    InvalidLocator(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "HTTP status {}", code),
            FetchError::Transport(msg) => write!(f, "transport failure: {}", msg),
            FetchError::UnsupportedScheme(scheme) => {
                write!(f, "unsupported locator scheme: {}", scheme)
            }
            FetchError::InvalidLocator(locator) => write!(f, "invalid file locator: {}", locator),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Fetch(FetchError::Status(status.as_u16())),
            None => Error::Fetch(FetchError::Transport(err.to_string())),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_conversion_preserves_message() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        match err {
            Error::Io(message) => assert!(message.contains("missing")),
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn fetch_error_wraps_into_crate_error() {
        let err: Error = FetchError::Status(404).into();
        assert!(matches!(err, Error::Fetch(FetchError::Status(404))));
        assert_eq!(err.to_string(), "Fetch Error: HTTP status 404");
    }

    #[test]
    fn image_error_conversion_returns_decode_variant() {
        let io_err = io::Error::other("decode failed");
        let error: Error = image_rs::ImageError::IoError(io_err).into();
        match error {
            Error::Decode(message) => assert!(message.contains("decode failed")),
            other => panic!("expected Decode variant, got {other:?}"),
        }
    }
}
