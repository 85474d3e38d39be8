//! uc-convert: the conversion service over the unit graph.
//!
//! Builds the conversion graph once from a flat rule set, then answers
//! `convert` calls: evaluate both unit expressions, check dimensional
//! compatibility of their power profiles, and report the exact ratio.
//!
//! # Example
//!
//! ```
//! use uc_convert::{ConversionService, parse_rules};
//!
//! let rules = parse_rules("km,m,1000\nhour,s,3600\n").unwrap();
//! let service = ConversionService::new(&rules).unwrap();
//!
//! assert_eq!(service.convert("m/s", "km/hour").unwrap(), "1 m / s = 3.6 km / hour");
//! ```

pub mod error;
pub mod rules;
pub mod service;

// Re-exports for ergonomics
pub use error::{ConvertError, ConvertResult};
pub use rules::{Rule, load_rules, parse_rules};
pub use service::ConversionService;
