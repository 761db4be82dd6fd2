//! Simulation objects to flowsheet nodes.

use std::collections::{HashMap, HashSet};

use fx_graph::{GraphicalInfo, ObjectNode, Position, SourceRef};
use fx_props::PropertyResolver;

use crate::document::{Document, Element};
use crate::number::{parse_bool, parse_finite};
use crate::properties::extract_properties;

pub const SIMULATION_OBJECTS: &str = "SimulationObjects";
pub const SIMULATION_OBJECT: &str = "SimulationObject";
pub const GRAPHIC_OBJECTS: &str = "GraphicObjects";
pub const GRAPHIC_OBJECT: &str = "GraphicObject";

/// Default cap on properties collected per node.
pub const DEFAULT_MAX_PROPERTIES: usize = 100;

/// What to collect for each node.
#[derive(Debug, Clone, Copy)]
pub struct NodeOptions<'a> {
    pub max_properties_per_node: usize,
    pub include_graphics: bool,
    pub extract_properties: bool,
    /// Alias table used to name document properties.
    pub labels: Option<&'a PropertyResolver>,
}

impl Default for NodeOptions<'_> {
    fn default() -> Self {
        Self {
            max_properties_per_node: DEFAULT_MAX_PROPERTIES,
            include_graphics: true,
            extract_properties: true,
            labels: None,
        }
    }
}

/// Graphic elements keyed by their `Name` field; the first definition wins.
#[derive(Debug, Default)]
pub struct GraphicIndex<'d> {
    by_name: HashMap<&'d str, &'d Element>,
}

impl<'d> GraphicIndex<'d> {
    pub fn new(doc: &'d Document) -> Self {
        let mut by_name = HashMap::new();
        for graphic in graphic_objects(doc) {
            let Some(name) = graphic.field("Name") else {
                continue;
            };
            if by_name.contains_key(name) {
                tracing::warn!(name, "Ignoring duplicate graphic definition");
                continue;
            }
            by_name.insert(name, graphic);
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'d Element> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Simulation-object elements, restricted to the direct children of the
/// simulation-objects container.
pub fn simulation_objects(doc: &Document) -> impl Iterator<Item = &Element> {
    doc.container(SIMULATION_OBJECTS)
        .into_iter()
        .flat_map(|c| c.children_named(SIMULATION_OBJECT))
}

/// Graphic-object elements, restricted to the direct children of the
/// graphic-objects container.
pub fn graphic_objects(doc: &Document) -> impl Iterator<Item = &Element> {
    doc.container(GRAPHIC_OBJECTS)
        .into_iter()
        .flat_map(|c| c.children_named(GRAPHIC_OBJECT))
}

/// Build the node of one simulation object.
///
/// Returns `None` for an object without an id or a type.
pub fn parse_node(
    object: &Element,
    graphics: &GraphicIndex<'_>,
    options: &NodeOptions<'_>,
) -> Option<ObjectNode> {
    let id = object.field("ComponentName").or_else(|| object.field("Name"));
    let node_type = object.field("Type");
    let (Some(id), Some(node_type)) = (id, node_type) else {
        tracing::warn!(
            id = id.unwrap_or_default(),
            node_type = node_type.unwrap_or_default(),
            "Skipping simulation object without id or type"
        );
        return None;
    };

    let graphic = graphics.get(id);
    let name = graphic
        .and_then(|g| g.field("Tag"))
        .or_else(|| object.field("Tag"))
        .unwrap_or(id);

    let mut node = ObjectNode::new(id, node_type).with_name(name);
    if options.include_graphics {
        node.graphics = graphic.map(graphical_info);
    }
    if options.extract_properties {
        let source = SourceRef {
            object_type: node_type.to_string(),
            object_name: id.to_string(),
            native_key: String::new(),
        };
        node.properties = extract_properties(
            object,
            &source,
            options.max_properties_per_node,
            options.labels,
        );
    }
    Some(node)
}

/// Parse every simulation object into a node, in document order.
///
/// Invalid objects and repeated ids are skipped with a diagnostic.
pub fn parse_nodes(doc: &Document, options: &NodeOptions<'_>) -> Vec<ObjectNode> {
    let graphics = GraphicIndex::new(doc);
    let mut seen = HashSet::new();
    let mut nodes = Vec::new();

    for object in simulation_objects(doc) {
        let Some(node) = parse_node(object, &graphics, options) else {
            continue;
        };
        if !seen.insert(node.id.clone()) {
            tracing::warn!(id = %node.id, "Skipping simulation object with duplicate id");
            continue;
        }
        nodes.push(node);
    }

    tracing::debug!(
        nodes = nodes.len(),
        graphics = graphics.len(),
        "Parsed simulation objects"
    );
    nodes
}

/// Graphical metadata of one graphic element. Fields parse independently.
pub fn graphical_info(graphic: &Element) -> GraphicalInfo {
    let number = |name: &str| graphic.field(name).and_then(parse_finite);
    let flag = |name: &str| graphic.field(name).and_then(parse_bool);

    let position = match (number("X"), number("Y")) {
        (Some(x), Some(y)) => Some(Position { x, y }),
        _ => None,
    };
    GraphicalInfo {
        position,
        width: number("Width"),
        height: number("Height"),
        angle: number("Rotation"),
        flipped_horizontal: flag("FlippedH"),
        flipped_vertical: flag("FlippedV"),
        active: flag("Active"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_graphic_fields_are_independent() {
        let doc = Document::parse(
            r#"<GraphicObject X="10.5" Y="1,5">
                 <Width>abc</Width>
                 <Height>40</Height>
                 <Rotation>90</Rotation>
                 <FlippedH>maybe</FlippedH>
                 <FlippedV>True</FlippedV>
               </GraphicObject>"#,
        )
        .unwrap();
        let info = graphical_info(doc.root());
        assert_eq!(info.position, None);
        assert_eq!(info.width, None);
        assert_eq!(info.height, Some(40.0));
        assert_eq!(info.angle, Some(90.0));
        assert_eq!(info.flipped_horizontal, None);
        assert_eq!(info.flipped_vertical, Some(true));
        assert_eq!(info.active, None);
    }

    #[test]
    fn object_outside_container_is_ignored() {
        let doc = Document::parse(
            "<Root>
               <SimulationObjects>
                 <SimulationObject><Name>A</Name><Type>Pump</Type></SimulationObject>
               </SimulationObjects>
               <Other>
                 <SimulationObject><Name>B</Name><Type>Pump</Type></SimulationObject>
               </Other>
             </Root>",
        )
        .unwrap();
        let nodes = parse_nodes(&doc, &NodeOptions::default());
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, "A");
    }

    #[test]
    fn id_and_name_fallbacks() {
        let doc = Document::parse(
            "<SimulationObjects>
               <SimulationObject><ComponentName>MAT-1</ComponentName><Name>ignored</Name><Type>MaterialStream</Type></SimulationObject>
               <SimulationObject><Name>MAT-2</Name><Type>MaterialStream</Type><Tag>Feed</Tag></SimulationObject>
               <SimulationObject><Type>Pump</Type></SimulationObject>
               <SimulationObject><Name>MAT-3</Name></SimulationObject>
               <SimulationObject><Name>MAT-1</Name><Type>Pump</Type></SimulationObject>
             </SimulationObjects>",
        )
        .unwrap();
        let nodes = parse_nodes(&doc, &NodeOptions::default());
        let ids: Vec<_> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["MAT-1", "MAT-2"]);
        assert_eq!(nodes[0].name, "MAT-1");
        assert_eq!(nodes[1].name, "Feed");
        assert_eq!(nodes[0].node_type, "MaterialStream");
    }

    #[test]
    fn options_turn_off_graphics_and_properties() {
        let doc = Document::parse(
            "<Root>
               <SimulationObjects>
                 <SimulationObject><Name>A</Name><Type>Pump</Type><Power>5</Power></SimulationObject>
               </SimulationObjects>
               <GraphicObjects>
                 <GraphicObject><Name>A</Name><Tag>P-100</Tag><X>1</X><Y>2</Y></GraphicObject>
               </GraphicObjects>
             </Root>",
        )
        .unwrap();
        let options = NodeOptions {
            include_graphics: false,
            extract_properties: false,
            ..NodeOptions::default()
        };
        let nodes = parse_nodes(&doc, &options);
        assert!(nodes[0].graphics.is_none());
        assert!(nodes[0].properties.is_empty());
        // Tag still names the node.
        assert_eq!(nodes[0].name, "P-100");

        let nodes = parse_nodes(&doc, &NodeOptions::default());
        assert_eq!(
            nodes[0].graphics.as_ref().unwrap().position,
            Some(Position { x: 1.0, y: 2.0 })
        );
        assert_eq!(nodes[0].properties.len(), 1);
    }
}
