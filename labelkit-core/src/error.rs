//! Error taxonomy for order processing.
//!
//! Missing reference data (size, color, font, position) is never an error;
//! it falls back to documented defaults. Only structurally invalid orders
//! are rejected.

use thiserror::Error;

/// Validation failures surfaced to the transport layer before any artifact
/// is generated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The order carries no reference id.
    #[error("Reference ID is required")]
    MissingRefId,

    /// The order carries no label line items.
    #[error("At least one label is required")]
    NoLabels,
}
