//! Incremental flowsheet builder.

use std::collections::HashSet;

use crate::error::GraphResult;
use crate::flowsheet::Flowsheet;
use crate::indexing::NodeIndex;
use crate::model::{Edge, ObjectNode, ThermodynamicContext};
use crate::validate;

/// Builder for assembling a flowsheet from partially trusted input.
///
/// The builder never rejects the whole flowsheet: incomplete or duplicate nodes, dangling edges and repeated
/// (source, target) pairs are skipped with a diagnostic and the first
/// occurrence is kept. Call `build()` to freeze the result.
#[derive(Debug, Default)]
pub struct FlowsheetBuilder {
    nodes: Vec<ObjectNode>,
    edges: Vec<Edge>,
    thermodynamics: ThermodynamicContext,
    index: NodeIndex,
    edge_pairs: HashSet<(String, String)>,
}

impl FlowsheetBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Returns `false` if it was skipped.
    pub fn add_node(&mut self, node: ObjectNode) -> bool {
        if node.id.is_empty() || node.node_type.is_empty() {
            tracing::warn!(
                id = %node.id,
                node_type = %node.node_type,
                "Skipping simulation object without id or type"
            );
            return false;
        }
        if !self.index.insert(node.id.clone(), self.nodes.len()) {
            tracing::warn!(id = %node.id, "Skipping simulation object with duplicate id");
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Add an edge. Returns `false` if it was skipped.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if !self.index.contains(&edge.source_id) || !self.index.contains(&edge.target_id) {
            tracing::warn!(
                source_id = %edge.source_id,
                target_id = %edge.target_id,
                "Dropping connection to unknown simulation object"
            );
            return false;
        }
        let pair = (edge.source_id.clone(), edge.target_id.clone());
        if !self.edge_pairs.insert(pair) {
            tracing::debug!(
                source_id = %edge.source_id,
                target_id = %edge.target_id,
                "Dropping duplicate connection"
            );
            return false;
        }
        self.edges.push(edge);
        true
    }

    pub fn set_thermodynamics(&mut self, thermodynamics: ThermodynamicContext) {
        self.thermodynamics = thermodynamics;
    }

    /// Node previously added under `id`.
    pub fn node(&self, id: &str) -> Option<&ObjectNode> {
        self.index.get(id).map(|i| &self.nodes[i])
    }

    /// Nodes accepted so far, in insertion order.
    pub fn nodes(&self) -> &[ObjectNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Freeze into a validated [`Flowsheet`].
    pub fn build(self) -> GraphResult<Flowsheet> {
        validate::validate_nodes(&self.nodes)?;
        validate::validate_edges(&self.nodes, &self.edges)?;
        Ok(Flowsheet {
            nodes: self.nodes,
            edges: self.edges,
            thermodynamics: self.thermodynamics,
        })
    }
}
