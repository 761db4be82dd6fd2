//! fx-xml: flowsheet document parsing.
//!
//! Provides:
//! - `Document`, a read-only element tree built with `quick-xml`
//! - Node parsing from simulation objects, joined to graphic objects by name
//! - Edge derivation from graphic connector attachments (second pass, by id)
//! - Thermodynamic context (components, property packages)
//! - Locale-invariant number and boolean parsing
//!
//! Only an unreadable document is an error. Individual malformed objects,
//! fields and connections are skipped with a `tracing` diagnostic.
//!
//! # Example
//!
//! ```
//! use fx_xml::{Document, NodeOptions, extract_thermodynamics, generate_edges, parse_nodes};
//!
//! let doc = Document::parse(
//!     r#"<DWSIM_Simulation_Data>
//!          <SimulationObjects>
//!            <SimulationObject><Name>A</Name><Type>MaterialStream</Type></SimulationObject>
//!            <SimulationObject><Name>B</Name><Type>Pump</Type></SimulationObject>
//!          </SimulationObjects>
//!          <GraphicObjects>
//!            <GraphicObject>
//!              <Name>A</Name>
//!              <OutputConnectors><Connector IsAttached="true" AttachedToObjID="B"/></OutputConnectors>
//!            </GraphicObject>
//!          </GraphicObjects>
//!        </DWSIM_Simulation_Data>"#,
//! )
//! .unwrap();
//!
//! let nodes = parse_nodes(&doc, &NodeOptions::default());
//! let edges = generate_edges(&doc, &nodes);
//! assert_eq!(nodes.len(), 2);
//! assert_eq!(edges[0].id, "A->B");
//! assert!(extract_thermodynamics(&doc).components.is_empty());
//! ```

pub mod document;
pub mod edges;
pub mod error;
pub mod nodes;
pub mod number;
pub mod properties;
pub mod thermo;

pub use document::{Document, Element};
pub use edges::generate_edges;
pub use error::{ParseError, ParseResult};
pub use nodes::{
    DEFAULT_MAX_PROPERTIES, GraphicIndex, NodeOptions, graphic_objects, graphical_info,
    parse_node, parse_nodes, simulation_objects,
};
pub use number::{native_from_text, parse_bool, parse_f64, parse_finite};
pub use properties::IDENTITY_FIELDS;
pub use thermo::extract_thermodynamics;
