//! Verification of a seeded catalog.
//!
//! After a run the store must hold exactly the planned number of rows, with
//! well-formed unique keys, resolvable category references and in-range
//! values. [`CatalogVerifier`] checks all of this with aggregate queries so it
//! stays cheap at the default sizes.
//!
//! # Example
//!
//! ```ignore
//! use catalog_verify::CatalogVerifier;
//!
//! let report = CatalogVerifier::new(&client).verify(&plan).await?;
//! assert!(report.is_success(), "{}", report.summary());
//! ```

pub mod error;
pub mod report;
pub mod verifier;

pub use error::VerifyError;
pub use report::{CheckResult, VerificationCounts, VerificationReport};
pub use verifier::CatalogVerifier;
