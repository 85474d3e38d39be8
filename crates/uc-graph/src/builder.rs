//! Incremental graph builder.
//!
//! All mutation happens here, before the graph is published: rules are
//! accumulated through `add_vertex`/`add_edge_pair`, then `build()` runs
//! the connected-component decomposition once and freezes the result into
//! an immutable `ConversionGraph`. Online rule updates are a rebuild of a
//! fresh builder followed by swapping the graph, never an in-place edit
//! visible to readers.

use std::collections::HashMap;

use bigdecimal::{BigDecimal, Zero};
use uc_core::decimal;
use uc_core::{ComponentId, EdgeId, VertexId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Component, ConversionGraph, Edge, Vertex};

struct PendingVertex {
    label: String,
    outgoing: Vec<EdgeId>,
    incoming: Vec<EdgeId>,
}

/// Builder for constructing a conversion graph incrementally.
///
/// Use `add_vertex` and `add_edge_pair` (or the `add_rule` convenience)
/// to accumulate the rule set, then call `build()` to decompose and freeze
/// it into an immutable `ConversionGraph`.
#[derive(Default)]
pub struct GraphBuilder {
    vertices: Vec<PendingVertex>,
    edges: Vec<Edge>,
    by_label: HashMap<String, VertexId>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex if the label is not already present.
    ///
    /// Returns whether the vertex set changed, mirroring collection-insert
    /// conventions.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.by_label.contains_key(&label) {
            return false;
        }
        let id = VertexId::from_index(self.vertices.len());
        self.by_label.insert(label.clone(), id);
        self.vertices.push(PendingVertex {
            label,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        });
        true
    }

    /// Look up a vertex added earlier.
    pub fn vertex_by_label(&self, label: &str) -> Option<VertexId> {
        self.by_label.get(label).copied()
    }

    /// Add a reciprocal edge pair: `from -> to` with `weight` and
    /// `to -> from` with `1/weight` (30 significant digits, half-up).
    ///
    /// Requires `weight > 0`. Duplicate pairs between the same vertices are
    /// permitted; lookups see the earliest-inserted edge first.
    pub fn add_edge_pair(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: BigDecimal,
    ) -> GraphResult<()> {
        if weight <= BigDecimal::zero() {
            return Err(GraphError::NonPositiveWeight {
                from: self.vertices[from.index()].label.clone(),
                to: self.vertices[to.index()].label.clone(),
                ratio: weight,
            });
        }

        let reverse_weight = decimal::recip(&weight, decimal::GRAPH_DIGITS);

        let direct = EdgeId::from_index(self.edges.len());
        self.edges.push(Edge {
            id: direct,
            from,
            to,
            weight,
        });
        self.vertices[from.index()].outgoing.push(direct);
        self.vertices[to.index()].incoming.push(direct);

        let reverse = EdgeId::from_index(self.edges.len());
        self.edges.push(Edge {
            id: reverse,
            from: to,
            to: from,
            weight: reverse_weight,
        });
        self.vertices[to.index()].outgoing.push(reverse);
        self.vertices[from.index()].incoming.push(reverse);

        Ok(())
    }

    /// Convenience for rule rows: ensures both vertices exist, then adds
    /// the edge pair.
    pub fn add_rule(&mut self, from: &str, to: &str, ratio: BigDecimal) -> GraphResult<()> {
        self.add_vertex(from);
        self.add_vertex(to);
        // both labels were just ensured
        let v1 = self.by_label[from];
        let v2 = self.by_label[to];
        self.add_edge_pair(v1, v2, ratio)
    }

    /// Decompose into connected components and freeze the graph.
    ///
    /// Runs a depth-first traversal from each not-yet-assigned vertex,
    /// scanning vertices in insertion order, so component ids and
    /// representatives are deterministic for a given rule order. The first
    /// vertex discovered in a component becomes its representative.
    pub fn build(self) -> ConversionGraph {
        let mut assigned: Vec<Option<ComponentId>> = vec![None; self.vertices.len()];
        let mut components: Vec<Component> = Vec::new();

        for start in 0..self.vertices.len() {
            if assigned[start].is_some() {
                continue;
            }
            let id = ComponentId::from_index(components.len());
            let start = VertexId::from_index(start);
            assigned[start.index()] = Some(id);

            let mut members = vec![start];
            let mut stack = vec![start];
            while let Some(&tip) = stack.last() {
                let next = self.vertices[tip.index()]
                    .outgoing
                    .iter()
                    .map(|&e| self.edges[e.index()].to)
                    .find(|v| assigned[v.index()].is_none());
                match next {
                    Some(v) => {
                        assigned[v.index()] = Some(id);
                        members.push(v);
                        stack.push(v);
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
            components.push(Component { id, members });
        }

        tracing::debug!(
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            components = components.len(),
            "conversion graph frozen"
        );

        let vertices = self
            .vertices
            .into_iter()
            .enumerate()
            .map(|(i, pending)| Vertex {
                id: VertexId::from_index(i),
                label: pending.label,
                component: assigned[i].expect("decomposition assigns every vertex"),
                outgoing: pending.outgoing,
                incoming: pending.incoming,
            })
            .collect();

        ConversionGraph {
            vertices,
            edges: self.edges,
            by_label: self.by_label,
            components,
        }
    }
}
