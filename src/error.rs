//! Error taxonomy for the fallible boundaries of the crate.
//!
//! Only resolution and data access can fail. The scheduling computation is
//! total over its input domain: once a `PlanRequest` exists, a `PlanResult`
//! is always produced and unplaceable courses are reported as data.

use thiserror::Error;

/// Errors raised at the requirement-resolution boundary.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The program selection matched zero known programs. Client fault;
    /// propagated unchanged to the caller.
    #[error("no programs found for the selected options: {selection:?}")]
    NoMatchingPrograms {
        /// The program names that were requested.
        selection: Vec<String>,
    },

    /// The underlying data source was unavailable. Server fault; never
    /// retried inside this crate.
    #[error("data source unavailable: {0}")]
    DataSource(String),
}

/// Errors raised by model constructors when upstream shape is invalid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An entity identifier was empty.
    #[error("{entity} identifier must be non-empty")]
    EmptyIdentifier {
        /// Which entity kind carried the empty identifier.
        entity: &'static str,
    },

    /// A course declared zero credits.
    #[error("course '{course_id}' must carry a positive credit value")]
    ZeroCredits {
        /// The offending course identifier.
        course_id: String,
    },
}
