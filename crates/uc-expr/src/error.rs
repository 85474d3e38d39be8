//! Expression evaluation errors.

use thiserror::Error;
use uc_graph::GraphError;

pub type ExprResult<T> = Result<T, ExprError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A factor in the expression has no vertex in the conversion graph.
    #[error("unknown unit: {unit}")]
    UnknownUnit { unit: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
