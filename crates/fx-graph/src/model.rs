//! Core flowsheet data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::property::Property;

/// What flows along a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionKind {
    Material,
    Energy,
    Information,
}

impl ConnectionKind {
    /// Classify a connection from the type names of its endpoints.
    ///
    /// Energy is checked before Material on both endpoints, so a material
    /// stream feeding an energy stream is an energy connection. Anything
    /// else is Information.
    pub fn classify(source_type: &str, target_type: &str) -> Self {
        if source_type.contains("Energy") || target_type.contains("Energy") {
            Self::Energy
        } else if source_type.contains("Material") || target_type.contains("Material") {
            Self::Material
        } else {
            Self::Information
        }
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Material => write!(f, "Material"),
            Self::Energy => write!(f, "Energy"),
            Self::Information => write!(f, "Information"),
        }
    }
}

/// Drawing-surface position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Optional graphical metadata of a simulation object.
///
/// Each field is parsed on its own; a malformed field is `None` without
/// affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphicalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flipped_horizontal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flipped_vertical: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// A simulation object (unit operation, stream, ...) in the flowsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectNode {
    /// Canonical internal identifier, unique within one flowsheet.
    pub id: String,
    /// Display tag, falls back to `id`.
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphics: Option<GraphicalInfo>,
}

impl ObjectNode {
    /// A node named after its id, without properties or graphics.
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            node_type: node_type.into(),
            properties: Vec::new(),
            graphics: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_graphics(mut self, graphics: GraphicalInfo) -> Self {
        self.graphics = Some(graphics);
        self
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub name: String,
    pub source_id: String,
    pub target_id: String,
    pub connection_kind: ConnectionKind,
}

impl Edge {
    /// Edge from `source` to `target`, classified by their types.
    pub fn between(source: &ObjectNode, target: &ObjectNode) -> Self {
        Self {
            id: format!("{}->{}", source.id, target.id),
            name: format!("{} -> {}", source.name, target.name),
            source_id: source.id.clone(),
            target_id: target.id.clone(),
            connection_kind: ConnectionKind::classify(&source.node_type, &target.node_type),
        }
    }
}

/// Components and property packages configured in the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermodynamicContext {
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub property_packages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_wins_over_material() {
        assert_eq!(
            ConnectionKind::classify("MaterialStream", "EnergyStream"),
            ConnectionKind::Energy
        );
        assert_eq!(
            ConnectionKind::classify("EnergyStream", "MaterialStream"),
            ConnectionKind::Energy
        );
    }

    #[test]
    fn material_and_information() {
        assert_eq!(
            ConnectionKind::classify("Pump", "MaterialStream"),
            ConnectionKind::Material
        );
        assert_eq!(
            ConnectionKind::classify("Adjust", "Pump"),
            ConnectionKind::Information
        );
    }

    #[test]
    fn node_defaults_name_to_id() {
        let node = ObjectNode::new("MAT-1", "MaterialStream");
        assert_eq!(node.name, "MAT-1");
        let node = node.with_name("Feed");
        assert_eq!(node.name, "Feed");
        assert!(node.graphics.is_none());
    }

    #[test]
    fn edge_between_uses_ids_and_names() {
        let a = ObjectNode::new("A", "MaterialStream").with_name("Feed");
        let b = ObjectNode::new("B", "Heater").with_name("HX-1");
        let e = Edge::between(&a, &b);
        assert_eq!(e.source_id, "A");
        assert_eq!(e.target_id, "B");
        assert_eq!(e.id, "A->B");
        assert_eq!(e.name, "Feed -> HX-1");
        assert_eq!(e.connection_kind, ConnectionKind::Material);
    }
}
