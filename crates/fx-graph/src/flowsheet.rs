//! The validated flowsheet.

use serde::Serialize;

use crate::model::{Edge, ObjectNode, ThermodynamicContext};

/// Nodes, edges and thermodynamic context of one parsed model.
///
/// Only [`FlowsheetBuilder::build`](crate::FlowsheetBuilder::build) creates
/// one: node ids are unique, and every edge references nodes of this
/// flowsheet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flowsheet {
    pub(crate) nodes: Vec<ObjectNode>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) thermodynamics: ThermodynamicContext,
}

impl Flowsheet {
    pub fn nodes(&self) -> &[ObjectNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn thermodynamics(&self) -> &ThermodynamicContext {
        &self.thermodynamics
    }

    /// Split into parts.
    pub fn into_parts(self) -> (Vec<ObjectNode>, Vec<Edge>, ThermodynamicContext) {
        (self.nodes, self.edges, self.thermodynamics)
    }
}
