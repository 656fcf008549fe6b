//! Data layer error types

use thiserror::Error;

/// Errors a data provider can report
#[derive(Error, Debug)]
pub enum DataError {
    /// The backing store could not answer the request
    #[error("Data backend error: {0}")]
    Backend(String),
}

/// Result type alias for data provider operations
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::Backend("connection refused".to_string());
        assert_eq!(err.to_string(), "Data backend error: connection refused");
    }
}
