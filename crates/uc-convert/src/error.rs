//! Service-level error taxonomy.
//!
//! Three kinds surface to callers: `UnknownUnit` (a token with no rule),
//! `UnableToConvert` (dimensionally incompatible expressions) and
//! `InvalidRule` (malformed rule row, fatal at load time). All are
//! deterministic for given inputs; none are retried or recovered.

use thiserror::Error;
use uc_expr::ExprError;
use uc_graph::GraphError;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// A factor in either expression has no conversion rule.
    #[error("unknown unit: {unit}")]
    UnknownUnit { unit: String },

    /// Both expressions resolve but their power profiles differ. No
    /// partial or approximate conversion is attempted.
    #[error("expressions are not dimensionally compatible")]
    UnableToConvert,

    /// A rule row is malformed or carries a non-positive ratio; the whole
    /// load aborts rather than leaving a half-built graph.
    #[error("invalid rule at line {line}: {reason}")]
    InvalidRule { line: usize, reason: String },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExprError> for ConvertError {
    fn from(err: ExprError) -> Self {
        match err {
            ExprError::UnknownUnit { unit } => ConvertError::UnknownUnit { unit },
            ExprError::Graph(graph) => ConvertError::Graph(graph),
        }
    }
}
