//! Graph-specific error types.

use bigdecimal::BigDecimal;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and traversal errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A conversion rule carried a zero or negative ratio. Fatal at load
    /// time: the reverse edge weight would be undefined.
    #[error("conversion ratio must be positive: {from} -> {to} = {ratio}")]
    NonPositiveWeight {
        from: String,
        to: String,
        ratio: BigDecimal,
    },

    /// No chain of rules connects the two units.
    #[error("no conversion path from '{from}' to '{to}'")]
    NoPath { from: String, to: String },
}
