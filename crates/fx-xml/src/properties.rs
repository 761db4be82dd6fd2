//! Document properties of a simulation object.

use fx_graph::{Property, SourceRef};
use fx_props::{NativeKind, NativeValue, PropertyResolver, coerce};

use crate::document::Element;
use crate::number::native_from_text;

/// Fields that identify an object rather than describe it.
pub const IDENTITY_FIELDS: [&str; 5] = ["Name", "ComponentName", "ComponentDescription", "Type", "Tag"];

/// Collect up to `limit` properties from the child elements of `object`.
///
/// Leaf elements become scalars; an element whose children are all leaves
/// becomes an array. Values are coerced like live reads, so null, non-finite
/// and empty values are dropped.
pub(crate) fn extract_properties(
    object: &Element,
    source: &SourceRef,
    limit: usize,
    labels: Option<&PropertyResolver>,
) -> Vec<Property> {
    let mut out = Vec::new();
    let candidates = object
        .children()
        .iter()
        .filter(|c| !IDENTITY_FIELDS.contains(&c.name()));

    for element in candidates {
        if out.len() == limit {
            tracing::warn!(
                node_id = %source.object_name,
                limit,
                "Property limit reached, remaining properties skipped"
            );
            break;
        }
        let Some(raw) = native_value(element) else {
            tracing::trace!(node_id = %source.object_name, key = element.name(), "Skipping nested element");
            continue;
        };
        let Some(declared) = NativeKind::of(&raw).value_type() else {
            continue;
        };

        let key = element.name();
        let name = labels.map_or(key, |l| l.display_label(key));
        match coerce(name, &raw, declared, None) {
            Ok(Some(value)) => out.push(Property::new(
                name,
                value,
                None,
                true,
                SourceRef {
                    native_key: key.to_string(),
                    ..source.clone()
                },
            )),
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(node_id = %source.object_name, key, error = %e, "Skipping property");
            }
        }
    }
    out
}

/// Native value of one property element; `None` for deeper structures.
fn native_value(element: &Element) -> Option<NativeValue> {
    if element.is_leaf() {
        return Some(native_from_text(element.text()));
    }
    if !element.children().iter().all(Element::is_leaf) {
        return None;
    }
    let items: Vec<NativeValue> = element
        .children()
        .iter()
        .map(|c| native_from_text(c.text()))
        .filter(|v| *v != NativeValue::Null)
        .collect();
    Some(NativeValue::List(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use fx_graph::PropertyValue;

    fn source() -> SourceRef {
        SourceRef {
            object_type: "MaterialStream".into(),
            object_name: "MAT-1".into(),
            native_key: String::new(),
        }
    }

    fn object(xml: &str) -> Document {
        Document::parse(xml).unwrap()
    }

    #[test]
    fn leaf_and_list_values() {
        let doc = object(
            "<SimulationObject>
               <Name>MAT-1</Name>
               <Type>MaterialStream</Type>
               <Temperature>298.15</Temperature>
               <Phase>Vapor</Phase>
               <Calculated>true</Calculated>
               <MoleFractions><double>0.25</double><double>0.75</double></MoleFractions>
               <Blank/>
               <Bad>NaN</Bad>
               <Nested><A><B>1</B></A></Nested>
             </SimulationObject>",
        );
        let props = extract_properties(doc.root(), &source(), 100, None);
        let names: Vec<_> = props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Temperature", "Phase", "Calculated", "MoleFractions"]);

        assert_eq!(props[0].value, PropertyValue::Double(298.15));
        assert_eq!(props[2].value, PropertyValue::Double(1.0));
        assert_eq!(props[3].value, PropertyValue::DoubleArray(vec![0.25, 0.75]));
        assert!(props.iter().all(|p| p.read_only && p.unit.is_none()));
        assert_eq!(props[1].source_ref.native_key, "Phase");
        assert_eq!(props[1].source_ref.object_name, "MAT-1");
    }

    #[test]
    fn mixed_list_is_skipped() {
        let doc = object("<O><L><a>1</a><b>x</b></L><Ok>2</Ok></O>");
        let props = extract_properties(doc.root(), &source(), 100, None);
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].name, "Ok");
    }

    #[test]
    fn stops_at_limit() {
        let doc = object("<O><A>1</A><B>2</B><C>3</C></O>");
        let props = extract_properties(doc.root(), &source(), 2, None);
        let names: Vec<_> = props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(extract_properties(doc.root(), &source(), 0, None).is_empty());
    }

    #[test]
    fn alias_labels_rename() {
        let doc = object("<O><PROP_MS_0>300</PROP_MS_0></O>");
        let labels = PropertyResolver::new([("PROP_MS_0", "Temperature")]);
        let props = extract_properties(doc.root(), &source(), 100, Some(&labels));
        assert_eq!(props[0].name, "Temperature");
        assert_eq!(props[0].source_ref.native_key, "PROP_MS_0");
    }
}
