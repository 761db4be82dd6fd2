//! Property I/O errors.

use fx_core::FxError;
use fx_graph::ValueType;
use fx_units::UnitError;
use thiserror::Error;

pub type PropertyResult<T> = Result<T, PropertyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// Label matches neither a native key nor an alias of one.
    #[error("Property '{label}' not recognized on '{object}'")]
    UnrecognizedProperty { label: String, object: String },

    /// Native value's runtime type does not fit the declared type.
    #[error("Property '{property}' is {found}, requested as {expected}")]
    TypeMismatch {
        property: String,
        expected: ValueType,
        found: String,
    },

    #[error(transparent)]
    Conversion(#[from] UnitError),

    /// Unit given for a dimensionless composite property.
    #[error("Property '{property}' is dimensionless, unit '{unit}' not allowed")]
    UnsupportedUnit { property: String, unit: String },

    /// Object lacks the capability a composite property needs.
    #[error("'{object}' does not support {capability}")]
    UnsupportedCapability {
        object: String,
        capability: &'static str,
    },

    /// Native write reported failure.
    #[error("Simulator rejected write of '{property}' on '{object}'")]
    WriteRejected { property: String, object: String },

    /// Any other failure raised by the simulator.
    #[error("Simulator error on '{object}': {message}")]
    Native { object: String, message: String },

    #[error(transparent)]
    Numeric(#[from] FxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PropertyError::WriteRejected {
            property: "Temperature".into(),
            object: "MSTR-1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Temperature"));
        assert!(msg.contains("MSTR-1"));

        let err = PropertyError::TypeMismatch {
            property: "Composition".into(),
            expected: ValueType::Double,
            found: "DoubleArray".into(),
        };
        assert!(err.to_string().contains("requested as Double"));
    }

    #[test]
    fn unit_error_converts() {
        let err: PropertyError = UnitError::UnknownUnit { unit: "x".into() }.into();
        assert!(matches!(err, PropertyError::Conversion(_)));
    }
}
