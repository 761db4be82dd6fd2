//! Id-keyed lookup for flowsheet nodes.
//!
//! Edges join nodes purely by id, so every stage after node parsing works
//! against this table instead of scanning the node list.

use std::collections::HashMap;

use crate::model::ObjectNode;

/// Maps node ids to their position in the node list.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    by_id: HashMap<String, usize>,
}

impl NodeIndex {
    /// Build from a node list. If ids repeat, the first occurrence is indexed.
    pub fn from_nodes(nodes: &[ObjectNode]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            by_id.entry(node.id.clone()).or_insert(i);
        }
        Self { by_id }
    }

    /// Position of the node with `id`.
    pub fn get(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub(crate) fn insert(&mut self, id: String, position: usize) -> bool {
        if self.by_id.contains_key(&id) {
            return false;
        }
        self.by_id.insert(id, position);
        true
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
