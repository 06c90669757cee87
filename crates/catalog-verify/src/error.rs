//! Error types for catalog verification.

use thiserror::Error;

/// Errors that can occur during verification.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// A verification query failed.
    #[error("Query error ({context}): {source}")]
    Query {
        context: &'static str,
        #[source]
        source: tokio_postgres::Error,
    },

    /// Verification ran but at least one check failed.
    #[error("Verification failed: {failed} of {total} checks failed")]
    VerificationFailed { failed: usize, total: usize },
}
