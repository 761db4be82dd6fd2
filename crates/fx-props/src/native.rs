//! Simulator-native values.
//!
//! The simulator hands out property values whose type is only known at run
//! time. They are inspected once into [`NativeValue`] and classified into a
//! [`NativeKind`]; nothing past this module looks at runtime types.

use fx_graph::ValueType;
use std::fmt;

/// A property value exactly as the simulator produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    /// No value (null reference).
    Null,
    /// Double or single precision float.
    Float(f64),
    Int(i64),
    Bool(bool),
    Text(String),
    List(Vec<NativeValue>),
    /// Any other runtime type, by type name.
    Opaque(String),
}

/// Semantic classification of a native value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeKind {
    Double,
    String,
    DoubleArray,
    StringArray,
    Unsupported,
}

impl NativeKind {
    /// Classify a native value.
    ///
    /// Numbers and booleans are doubles. A list is a double array when every
    /// element is numeric, a string array when every element is text. Null,
    /// opaque values and mixed or nested lists are unsupported. An empty list
    /// classifies by nothing, so it is reported as a double array; coercion
    /// drops it before the distinction matters.
    pub fn of(value: &NativeValue) -> Self {
        match value {
            NativeValue::Float(_) | NativeValue::Int(_) | NativeValue::Bool(_) => Self::Double,
            NativeValue::Text(_) => Self::String,
            NativeValue::List(items) => {
                if items.iter().all(NativeValue::is_numeric) {
                    Self::DoubleArray
                } else if items.iter().all(|v| matches!(v, NativeValue::Text(_))) {
                    Self::StringArray
                } else {
                    Self::Unsupported
                }
            }
            NativeValue::Null | NativeValue::Opaque(_) => Self::Unsupported,
        }
    }

    /// The value type this kind maps onto, `None` for unsupported values.
    pub fn value_type(self) -> Option<ValueType> {
        match self {
            Self::Double => Some(ValueType::Double),
            Self::String => Some(ValueType::String),
            Self::DoubleArray => Some(ValueType::DoubleArray),
            Self::StringArray => Some(ValueType::StringArray),
            Self::Unsupported => None,
        }
    }
}

impl fmt::Display for NativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double => write!(f, "Double"),
            Self::String => write!(f, "String"),
            Self::DoubleArray => write!(f, "DoubleArray"),
            Self::StringArray => write!(f, "StringArray"),
            Self::Unsupported => write!(f, "an unsupported type"),
        }
    }
}

impl NativeValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Float(_) | Self::Int(_) | Self::Bool(_))
    }

    /// Numeric view; booleans map to 1.0 / 0.0.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            Self::Bool(true) => Some(1.0),
            Self::Bool(false) => Some(0.0),
            _ => None,
        }
    }

    pub fn kind(&self) -> NativeKind {
        NativeKind::of(self)
    }

    /// Short description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Opaque(type_name) => type_name.clone(),
            other => other.kind().to_string(),
        }
    }
}

impl From<f64> for NativeValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for NativeValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for NativeValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for NativeValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for NativeValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<f64>> for NativeValue {
    fn from(v: Vec<f64>) -> Self {
        Self::List(v.into_iter().map(Self::Float).collect())
    }
}

impl From<Vec<String>> for NativeValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v.into_iter().map(Self::Text).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert_eq!(NativeKind::of(&1.5.into()), NativeKind::Double);
        assert_eq!(NativeKind::of(&7i64.into()), NativeKind::Double);
        assert_eq!(NativeKind::of(&true.into()), NativeKind::Double);
        assert_eq!(NativeKind::of(&"abc".into()), NativeKind::String);
        assert_eq!(NativeKind::of(&NativeValue::Null), NativeKind::Unsupported);
    }

    #[test]
    fn lists() {
        let mixed_numeric = NativeValue::List(vec![1.0.into(), 2i64.into(), false.into()]);
        assert_eq!(mixed_numeric.kind(), NativeKind::DoubleArray);

        let names: NativeValue = vec!["Water".to_string(), "Ethanol".to_string()].into();
        assert_eq!(names.kind(), NativeKind::StringArray);

        let mixed = NativeValue::List(vec![1.0.into(), "x".into()]);
        assert_eq!(mixed.kind(), NativeKind::Unsupported);

        let nested = NativeValue::List(vec![NativeValue::List(vec![])]);
        assert_eq!(nested.kind(), NativeKind::Unsupported);
    }

    #[test]
    fn bool_maps_to_unit_interval() {
        assert_eq!(NativeValue::Bool(true).as_f64(), Some(1.0));
        assert_eq!(NativeValue::Bool(false).as_f64(), Some(0.0));
        assert_eq!(NativeValue::Text("1".into()).as_f64(), None);
    }

    #[test]
    fn describe_names_opaque_type() {
        assert_eq!(
            NativeValue::Opaque("System.Drawing.Color".into()).describe(),
            "System.Drawing.Color"
        );
        assert_eq!(NativeValue::Null.describe(), "null");
        assert_eq!(NativeValue::Float(1.0).describe(), "Double");
    }
}
