//! Error types for the PostgreSQL loader.

use catalog_generator::GeneratorError;
use thiserror::Error;

/// Errors that can occur while seeding PostgreSQL.
///
/// Variants separate connection, constraint and statistics failures so that
/// callers can react differently to each.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// Could not establish, or lost, the connection.
    #[error("Connection error: {0}")]
    Connection(#[source] tokio_postgres::Error),

    /// A write violated a constraint (SQLSTATE class 23), e.g. a duplicate code
    /// left behind by an unclean earlier run.
    #[error("Constraint violation on table '{table}': {source}")]
    Constraint {
        table: String,
        #[source]
        source: tokio_postgres::Error,
    },

    /// `ANALYZE` failed.
    #[error("Statistics refresh failed: {0}")]
    Statistics(#[source] tokio_postgres::Error),

    /// Any other statement failure.
    #[error("Query failed ({context}): {source}")]
    Query {
        context: String,
        #[source]
        source: tokio_postgres::Error,
    },

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// SQLSTATE class for integrity constraint violations.
const INTEGRITY_CONSTRAINT_CLASS: &str = "23";

impl PopulateError {
    /// Classify a failed write against `table`.
    pub fn from_write(table: &str, err: tokio_postgres::Error) -> Self {
        if is_constraint_violation(&err) {
            PopulateError::Constraint {
                table: table.to_string(),
                source: err,
            }
        } else {
            Self::from_query(format!("write to {table}"), err)
        }
    }

    /// Classify any other failed statement.
    pub fn from_query(context: impl Into<String>, err: tokio_postgres::Error) -> Self {
        if err.is_closed() {
            PopulateError::Connection(err)
        } else {
            PopulateError::Query {
                context: context.into(),
                source: err,
            }
        }
    }

    /// Short machine-friendly name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PopulateError::Connection(_) => "connection",
            PopulateError::Constraint { .. } => "constraint",
            PopulateError::Statistics(_) => "statistics",
            PopulateError::Query { .. } => "query",
            PopulateError::Generator(_) => "generator",
            PopulateError::Config(_) => "config",
        }
    }
}

fn is_constraint_violation(err: &tokio_postgres::Error) -> bool {
    err.code()
        .is_some_and(|state| is_integrity_sqlstate(state.code()))
}

fn is_integrity_sqlstate(code: &str) -> bool {
    code.starts_with(INTEGRITY_CONSTRAINT_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_postgres::error::SqlState;

    #[test]
    fn test_integrity_sqlstates() {
        assert!(is_integrity_sqlstate(SqlState::UNIQUE_VIOLATION.code()));
        assert!(is_integrity_sqlstate(SqlState::FOREIGN_KEY_VIOLATION.code()));
        assert!(is_integrity_sqlstate(SqlState::NOT_NULL_VIOLATION.code()));
        assert!(!is_integrity_sqlstate(SqlState::UNDEFINED_TABLE.code()));
        assert!(!is_integrity_sqlstate(SqlState::CONNECTION_FAILURE.code()));
    }

    #[test]
    fn test_generator_error_conversion() {
        let err: PopulateError = GeneratorError::NoCategories.into();
        assert_eq!(err.kind(), "generator");
        assert!(err.to_string().contains("no category identifiers"));
    }

    #[test]
    fn test_config_error_display() {
        let err = PopulateError::Config("batch size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: batch size must be positive"
        );
        assert_eq!(err.kind(), "config");
    }
}
