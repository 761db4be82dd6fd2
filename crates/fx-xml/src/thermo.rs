//! Components and property packages.

use fx_graph::ThermodynamicContext;

use crate::document::{Document, Element};

pub const COMPOUNDS: &str = "Compounds";
pub const PROPERTY_PACKAGES: &str = "PropertyPackages";

/// Read the components and property packages configured in the model.
///
/// Each section is read on its own; a missing section is empty.
pub fn extract_thermodynamics(doc: &Document) -> ThermodynamicContext {
    ThermodynamicContext {
        components: section_names(doc, COMPOUNDS, &["Name", "ComponentName"]),
        property_packages: section_names(doc, PROPERTY_PACKAGES, &["ComponentName", "Tag", "Name"]),
    }
}

/// Non-empty name fields of the direct children of a section, in order.
fn section_names(doc: &Document, section: &str, fields: &[&str]) -> Vec<String> {
    let Some(container) = doc.container(section) else {
        tracing::debug!(section, "Section not present");
        return Vec::new();
    };
    let names: Vec<String> = container
        .children()
        .iter()
        .filter_map(|entry| first_field(entry, fields))
        .map(str::to_string)
        .collect();
    tracing::debug!(section, count = names.len(), "Read section");
    names
}

fn first_field<'e>(entry: &'e Element, fields: &[&str]) -> Option<&'e str> {
    fields.iter().find_map(|f| entry.field(f))
}
