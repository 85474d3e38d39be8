//! uc-expr: unit expression parsing and evaluation.
//!
//! Provides:
//! - `ParsedExpression`: a unit expression normalized into numerator and
//!   denominator factor lists
//! - `evaluate`: folds an expression over the conversion graph into a
//!   dimensional power profile plus a running ratio

pub mod error;
pub mod eval;
pub mod parse;

// Re-exports for ergonomics
pub use error::{ExprError, ExprResult};
pub use eval::{Evaluation, PowerProfile, evaluate};
pub use parse::ParsedExpression;
