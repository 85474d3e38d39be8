//! Core graph data structures.
//!
//! Vertices are units; every rule materializes as a reciprocal pair of
//! directed edges, so the adjacency relation is symmetric. The weight of a
//! path is the product of its edge weights, and the algorithms here assume
//! every cycle's weight product is 1 (contradictory rule sets are accepted
//! silently; traversal uses whichever edge insertion order presents first).

use std::collections::{HashMap, HashSet};

use bigdecimal::{BigDecimal, One};
use uc_core::decimal;
use uc_core::{ComponentId, EdgeId, VertexId};

use crate::error::{GraphError, GraphResult};

/// A unit in the conversion graph.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: VertexId,
    /// Unit name; unique and case-sensitive inside the graph.
    pub label: String,
    /// Connected component this vertex was assigned to at build time.
    pub component: ComponentId,
    pub(crate) outgoing: Vec<EdgeId>,
    pub(crate) incoming: Vec<EdgeId>,
}

/// A directed conversion edge: 1 unit of `from` = `weight` units of `to`.
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
    pub weight: BigDecimal,
}

/// A maximal set of mutually convertible units.
#[derive(Debug, Clone)]
pub struct Component {
    pub id: ComponentId,
    /// Members in first-visited order.
    pub members: Vec<VertexId>,
}

impl Component {
    /// The unit all ratios in this component are folded against: the first
    /// vertex discovered during decomposition. Stable for a given rule
    /// order, but callers must not rely on *which* unit is chosen.
    pub fn representative(&self) -> VertexId {
        self.members[0]
    }
}

/// The conversion graph: a frozen collection of vertices, reciprocal edge
/// pairs and the connected-component decomposition computed at build time.
///
/// Immutable once built; any number of concurrent readers may query it.
/// Rule updates mean building a fresh graph and swapping it in.
#[derive(Debug, Clone)]
pub struct ConversionGraph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) by_label: HashMap<String, VertexId>,
    pub(crate) components: Vec<Component>,
}

impl ConversionGraph {
    /// Return all vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Return all edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Return the connected components, in discovery order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Get a vertex by ID (returns None if ID out of bounds).
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// O(1) lookup of a vertex by its unit label.
    pub fn vertex_by_label(&self, label: &str) -> Option<VertexId> {
        self.by_label.get(label).copied()
    }

    /// Component the vertex belongs to.
    pub fn component_of(&self, id: VertexId) -> ComponentId {
        self.vertices[id.index()].component
    }

    /// Iterate over a vertex's outgoing edges in insertion order.
    pub fn outgoing_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> {
        self.vertices[id.index()]
            .outgoing
            .iter()
            .map(|&e| &self.edges[e.index()])
    }

    /// Iterate over a vertex's incoming edges in insertion order.
    pub fn incoming_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> {
        self.vertices[id.index()]
            .incoming
            .iter()
            .map(|&e| &self.edges[e.index()])
    }

    /// First edge between the ordered vertex pair, if any.
    ///
    /// Rejects in O(1) when the vertices sit in different components;
    /// otherwise scans `from`'s outgoing edges in insertion order, so with
    /// duplicate rules the earliest-inserted edge wins.
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        if self.component_of(from) != self.component_of(to) {
            return None;
        }
        self.outgoing_edges(from).find(|edge| edge.to == to)
    }

    /// Conversion ratio from `from` to `to`: 1 `from` = ratio `to`.
    ///
    /// Walks *a* path found by depth-first search inside the component (no
    /// shortest-path guarantee; a pathological edge order can route an
    /// adjacent pair through the whole component) and folds it from the
    /// target back toward the start, dividing by each walked edge's weight
    /// at 30 significant digits. Under the symmetric-adjacency and
    /// unit-cycle invariants every path yields the same ratio.
    pub fn ratio_between(&self, from: VertexId, to: VertexId) -> GraphResult<BigDecimal> {
        let mut path = self.find_path(from, to).ok_or_else(|| self.no_path(from, to))?;

        let mut ratio = BigDecimal::one();
        let mut current = match path.pop() {
            Some(v) => v,
            None => return Err(self.no_path(from, to)),
        };
        while let Some(next) = path.pop() {
            // consecutive path vertices are adjacent by construction
            let edge = self
                .find_edge(current, next)
                .ok_or_else(|| self.no_path(from, to))?;
            ratio = decimal::div_half_up(&ratio, &edge.weight, decimal::GRAPH_DIGITS);
            current = next;
        }
        Ok(ratio)
    }

    /// Depth-first path search restricted to `from`'s component. Each
    /// vertex is visited at most once and the explicit stack backtracks on
    /// dead ends, so the search always terminates. Note that every visit
    /// and backtrack rescans the tip's outgoing list from the front, so a
    /// long backtracking run costs more than a single pass over the
    /// component's edges.
    ///
    /// Returns the path with `from` first and `to` last.
    fn find_path(&self, from: VertexId, to: VertexId) -> Option<Vec<VertexId>> {
        if self.component_of(from) != self.component_of(to) {
            return None;
        }
        let component = &self.components[self.component_of(from).index()];
        let mut unvisited: HashSet<VertexId> = component.members.iter().copied().collect();
        unvisited.remove(&from);

        let mut path = vec![from];
        while let Some(&tip) = path.last() {
            if tip == to {
                return Some(path);
            }
            match self.unvisited_neighbor(tip, &unvisited) {
                Some(next) => {
                    unvisited.remove(&next);
                    path.push(next);
                }
                None => {
                    path.pop();
                }
            }
        }
        None
    }

    /// First not-yet-visited neighbor of `vertex`, in edge insertion order.
    fn unvisited_neighbor(
        &self,
        vertex: VertexId,
        unvisited: &HashSet<VertexId>,
    ) -> Option<VertexId> {
        self.outgoing_edges(vertex)
            .map(|edge| edge.to)
            .find(|to| unvisited.contains(to))
    }

    fn no_path(&self, from: VertexId, to: VertexId) -> GraphError {
        GraphError::NoPath {
            from: self.vertices[from.index()].label.clone(),
            to: self.vertices[to.index()].label.clone(),
        }
    }
}
