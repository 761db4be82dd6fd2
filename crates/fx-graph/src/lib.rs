//! fx-graph: normalized flowsheet model.
//!
//! Provides:
//! - Simulation object nodes with optional graphical metadata
//! - Connection edges classified as material, energy or information
//! - Thermodynamic context (components, property packages)
//! - The typed property envelope shared by extraction and live I/O
//! - A builder that enforces id uniqueness, edge references and edge dedup
//!
//! # Example
//!
//! ```
//! use fx_graph::{ConnectionKind, Edge, FlowsheetBuilder, ObjectNode};
//!
//! let feed = ObjectNode::new("MSTR-1", "DWSIM.Thermodynamics.Streams.MaterialStream");
//! let pump = ObjectNode::new("PUMP-1", "DWSIM.UnitOperations.UnitOperations.Pump");
//! let edge = Edge::between(&feed, &pump);
//!
//! let mut builder = FlowsheetBuilder::new();
//! builder.add_node(feed);
//! builder.add_node(pump);
//! builder.add_edge(edge);
//! let sheet = builder.build().unwrap();
//!
//! assert_eq!(sheet.nodes().len(), 2);
//! assert_eq!(sheet.edges()[0].connection_kind, ConnectionKind::Material);
//! ```

pub mod builder;
pub mod error;
pub mod flowsheet;
pub mod indexing;
pub mod model;
pub mod property;
pub(crate) mod validate;

pub use builder::FlowsheetBuilder;
pub use error::{GraphError, GraphResult};
pub use flowsheet::Flowsheet;
pub use indexing::NodeIndex;
pub use model::{ConnectionKind, Edge, GraphicalInfo, ObjectNode, Position, ThermodynamicContext};
pub use property::{Property, PropertyValue, SourceRef, UnitRef, ValueType};
