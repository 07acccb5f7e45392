//! The SQL dialects an extractor can be built for.
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DatabaseType {
    MySQL,
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatabaseType::MySQL => write!(f, "MySQL"),
        }
    }
}

impl FromStr for DatabaseType {
    type Err = DatabaseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(DatabaseType::MySQL),
            _ => Err(DatabaseTypeError::Unsupported(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum DatabaseTypeError {
    #[error("Database type {0} is not supported")]
    Unsupported(String),
}
