//! Error types for the dashboard.

use thiserror::Error;

/// Crate-wide error type.
///
/// Only two kinds are recovered from at runtime: data-source failures
/// (the page halts) and missing columns (one chart is skipped).
#[derive(Error, Debug)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV parse error: line {line} has {found} fields, header has {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl Error {
    /// True for failures that leave the page without a dataset.
    pub fn is_data_source(&self) -> bool {
        matches!(
            self,
            Error::Http { .. } | Error::Io { .. } | Error::Csv(_) | Error::RaggedRow { .. }
        )
    }

    /// Name of the missing column, if this is a lookup failure.
    pub fn missing_column(&self) -> Option<&str> {
        match self {
            Error::MissingColumn(name) => Some(name),
            _ => None,
        }
    }
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let missing = Error::MissingColumn("smoking".into());
        assert!(!missing.is_data_source());
        assert_eq!(missing.missing_column(), Some("smoking"));
        assert_eq!(missing.to_string(), "column 'smoking' not found");

        let io = Error::Io {
            path: "df.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(io.is_data_source());
        assert_eq!(io.missing_column(), None);
    }
}
