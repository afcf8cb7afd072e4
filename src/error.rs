// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Route(RouteError),
}

/// Errors raised while building or reversing routes.
///
/// Resolving a path never fails (unmatched paths land on the not-found
/// page), so these only surface from table construction and `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The pattern is malformed (missing leading slash, empty or duplicate
    /// parameter name, invalid characters).
    InvalidPattern { pattern: String, reason: String },

    /// A parameter required by the pattern was not supplied.
    MissingParam { pattern: String, param: String },

    /// No route in the table renders the requested page.
    UnknownPage(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid route pattern '{}': {}", pattern, reason)
            }
            RouteError::MissingParam { pattern, param } => {
                write!(f, "Missing parameter '{}' for route '{}'", param, pattern)
            }
            RouteError::UnknownPage(page) => write!(f, "No route renders page {}", page),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Route(e) => write!(f, "Route Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for RouteError {}

impl From<RouteError> for Error {
    fn from(err: RouteError) -> Self {
        Error::Route(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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
