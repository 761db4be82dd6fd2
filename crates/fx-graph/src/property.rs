//! Typed property envelope.

use fx_units::QuantityKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Double,
    String,
    DoubleArray,
    StringArray,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double => write!(f, "Double"),
            Self::String => write!(f, "String"),
            Self::DoubleArray => write!(f, "DoubleArray"),
            Self::StringArray => write!(f, "StringArray"),
        }
    }
}

/// Property value, tagged by its [`ValueType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PropertyValue {
    Double(f64),
    String(String),
    DoubleArray(Vec<f64>),
    StringArray(Vec<String>),
}

impl PropertyValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Double(_) => ValueType::Double,
            Self::String(_) => ValueType::String,
            Self::DoubleArray(_) => ValueType::DoubleArray,
            Self::StringArray(_) => ValueType::StringArray,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

/// Unit a Double property is expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRef {
    pub name: String,
    /// `None` when the unit could not be classified.
    pub quantity_kind: Option<QuantityKind>,
}

/// Where in the simulator a property value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    pub object_type: String,
    pub object_name: String,
    pub native_key: String,
}

/// A single named property of a simulation object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    pub value_type: ValueType,
    pub value: PropertyValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitRef>,
    pub read_only: bool,
    pub source_ref: SourceRef,
}

impl Property {
    /// Build a property; `value_type` always follows `value`.
    pub fn new(
        name: impl Into<String>,
        value: PropertyValue,
        unit: Option<UnitRef>,
        read_only: bool,
        source_ref: SourceRef,
    ) -> Self {
        Self {
            name: name.into(),
            value_type: value.value_type(),
            value,
            unit,
            read_only,
            source_ref,
        }
    }
}
