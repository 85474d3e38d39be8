//! uc-graph: weighted conversion graph.
//!
//! Provides:
//! - Core graph data structures (Vertex, Edge, Component, ConversionGraph)
//! - Incremental graph builder that freezes into an immutable graph
//! - Connected-component decomposition and ratio-path resolution
//!
//! # Example
//!
//! ```
//! use bigdecimal::BigDecimal;
//! use uc_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_rule("km", "m", BigDecimal::from(1000)).unwrap();
//! let graph = builder.build();
//!
//! let km = graph.vertex_by_label("km").unwrap();
//! let m = graph.vertex_by_label("m").unwrap();
//! assert_eq!(graph.components().len(), 1);
//! assert_eq!(graph.ratio_between(km, m).unwrap(), BigDecimal::from(1000));
//! ```

pub mod builder;
pub mod error;
pub mod graph;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Component, ConversionGraph, Edge, Vertex};
