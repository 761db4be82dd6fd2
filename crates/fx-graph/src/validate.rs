//! Flowsheet invariant checks.

use std::collections::HashSet;

use crate::error::{GraphError, GraphResult};
use crate::model::{Edge, ObjectNode};

/// Check node ids are non-empty and unique, and every node has a type.
pub(crate) fn validate_nodes(nodes: &[ObjectNode]) -> GraphResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(nodes.len());
    for (position, node) in nodes.iter().enumerate() {
        if node.id.is_empty() {
            return Err(GraphError::IncompleteNode {
                position,
                what: "id",
            });
        }
        if node.node_type.is_empty() {
            return Err(GraphError::IncompleteNode {
                position,
                what: "type",
            });
        }
        if !seen.insert(node.id.as_str()) {
            return Err(GraphError::DuplicateNodeId {
                id: node.id.clone(),
            });
        }
    }
    Ok(())
}

/// Check every edge references known nodes and no (source, target) pair repeats.
pub(crate) fn validate_edges(nodes: &[ObjectNode], edges: &[Edge]) -> GraphResult<()> {
    let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut pairs: HashSet<(&str, &str)> = HashSet::with_capacity(edges.len());

    for edge in edges {
        for endpoint in [&edge.source_id, &edge.target_id] {
            if !ids.contains(endpoint.as_str()) {
                return Err(GraphError::InvalidNodeRef {
                    edge: edge.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }
        if !pairs.insert((edge.source_id.as_str(), edge.target_id.as_str())) {
            return Err(GraphError::DuplicateEdge {
                source_id: edge.source_id.clone(),
                target_id: edge.target_id.clone(),
            });
        }
    }
    Ok(())
}
