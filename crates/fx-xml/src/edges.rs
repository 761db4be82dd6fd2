//! Connections derived from graphic connector attachments.

use std::collections::HashSet;

use fx_graph::{Edge, NodeIndex, ObjectNode};

use crate::document::{Document, Element};
use crate::nodes::graphic_objects;
use crate::number::parse_bool;

/// Derive edges from the output connectors of each node's graphic.
///
/// Runs after node parsing: endpoints are looked up by id in `nodes`, and
/// connectors pointing at unknown objects are dropped. The first connection
/// between an ordered (source, target) pair wins.
pub fn generate_edges(doc: &Document, nodes: &[ObjectNode]) -> Vec<Edge> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let index = NodeIndex::from_nodes(nodes);
    let mut visited = HashSet::new();
    let mut pairs = HashSet::new();
    let mut edges = Vec::new();

    for graphic in graphic_objects(doc) {
        let Some(source) = graphic
            .field("Name")
            .and_then(|name| index.get(name))
            .map(|i| &nodes[i])
        else {
            continue;
        };
        // Later graphics repeating a name are ignored, as for node graphics.
        if !visited.insert(source.id.as_str()) {
            continue;
        }

        for target_id in attached_targets(graphic) {
            let Some(target) = index.get(target_id).map(|i| &nodes[i]) else {
                tracing::debug!(
                    source_id = %source.id,
                    target_id,
                    "Dropping connection to unknown simulation object"
                );
                continue;
            };
            if !pairs.insert((source.id.as_str(), target.id.as_str())) {
                continue;
            }
            edges.push(Edge::between(source, target));
        }
    }

    tracing::debug!(edges = edges.len(), "Derived connections");
    edges
}

/// Target ids of the attached output connectors of a graphic.
fn attached_targets(graphic: &Element) -> impl Iterator<Item = &str> {
    graphic
        .child("OutputConnectors")
        .into_iter()
        .flat_map(|c| c.children_named("Connector"))
        .filter(|c| c.field("IsAttached").and_then(parse_bool) == Some(true))
        .filter_map(|c| c.field("AttachedToObjID"))
}
