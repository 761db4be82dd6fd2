//! Coercion between native values and typed property values.
//!
//! Reads convert native base values into the requested unit (`from_base`);
//! writes convert the caller's value into the base unit (`to_base`). Only
//! Double values are ever unit-converted.

use fx_core::{ensure_finite, meaningful};
use fx_graph::{PropertyValue, ValueType};
use fx_units::{from_base, to_base};

use crate::error::{PropertyError, PropertyResult};
use crate::native::NativeValue;

/// Coerce a native value read from the simulator into `declared`.
///
/// Returns `Ok(None)` when the value is not worth exporting: null, a
/// non-finite double, or an empty list. Fails with `TypeMismatch` when the
/// native type does not map onto `declared`.
pub fn coerce(
    property: &str,
    raw: &NativeValue,
    declared: ValueType,
    unit: Option<&str>,
) -> PropertyResult<Option<PropertyValue>> {
    match raw {
        NativeValue::Null => return Ok(None),
        NativeValue::List(items) if items.is_empty() => return Ok(None),
        _ => {}
    }

    let kind = raw.kind();
    if kind.value_type() != Some(declared) {
        return Err(PropertyError::TypeMismatch {
            property: property.to_string(),
            expected: declared,
            found: raw.describe(),
        });
    }

    if unit.is_some() && declared != ValueType::Double {
        tracing::debug!(property, ?declared, "Ignoring unit on non-scalar property");
    }

    let value = match (declared, raw) {
        (ValueType::Double, _) => {
            let Some(v) = raw.as_f64().and_then(meaningful) else {
                return Ok(None);
            };
            let v = match unit {
                Some(unit) => from_base(unit, v)?,
                None => v,
            };
            PropertyValue::Double(v)
        }
        (ValueType::String, NativeValue::Text(s)) => PropertyValue::String(s.clone()),
        (ValueType::DoubleArray, NativeValue::List(items)) => {
            PropertyValue::DoubleArray(items.iter().filter_map(NativeValue::as_f64).collect())
        }
        (ValueType::StringArray, NativeValue::List(items)) => PropertyValue::StringArray(
            items
                .iter()
                .filter_map(|v| match v {
                    NativeValue::Text(s) => Some(s.clone()),
                    _ => None,
                })
                .collect(),
        ),
        _ => {
            return Err(PropertyError::TypeMismatch {
                property: property.to_string(),
                expected: declared,
                found: raw.describe(),
            });
        }
    };
    Ok(Some(value))
}

/// Convert a typed value into the native representation for a write.
pub fn to_native(value: &PropertyValue, unit: Option<&str>) -> PropertyResult<NativeValue> {
    let native = match value {
        PropertyValue::Double(v) => {
            let v = ensure_finite(*v, "property value")?;
            let v = match unit {
                Some(unit) => to_base(unit, v)?,
                None => v,
            };
            NativeValue::Float(v)
        }
        PropertyValue::String(s) => NativeValue::Text(s.clone()),
        PropertyValue::DoubleArray(values) => NativeValue::from(values.clone()),
        PropertyValue::StringArray(values) => NativeValue::from(values.clone()),
    };
    Ok(native)
}

/// Reject a unit for a property that is dimensionless by definition.
pub fn ensure_dimensionless(property: &str, unit: Option<&str>) -> PropertyResult<()> {
    match unit.map(str::trim) {
        Some(unit) if !unit.is_empty() => Err(PropertyError::UnsupportedUnit {
            property: property.to_string(),
            unit: unit.to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn double_from_base_unit() {
        let v = coerce("T", &NativeValue::Float(373.15), ValueType::Double, Some("C"))
            .unwrap()
            .unwrap();
        assert!((v.as_f64().unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn int_and_bool_are_doubles() {
        assert_eq!(
            coerce("n", &NativeValue::Int(3), ValueType::Double, None).unwrap(),
            Some(PropertyValue::Double(3.0))
        );
        assert_eq!(
            coerce("b", &NativeValue::Bool(true), ValueType::Double, None).unwrap(),
            Some(PropertyValue::Double(1.0))
        );
        assert_eq!(
            coerce("b", &NativeValue::Bool(false), ValueType::Double, None).unwrap(),
            Some(PropertyValue::Double(0.0))
        );
    }

    #[test]
    fn non_finite_is_absent() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                coerce("x", &NativeValue::Float(v), ValueType::Double, Some("K")).unwrap(),
                None
            );
        }
    }

    #[test]
    fn empty_arrays_are_absent() {
        let empty = NativeValue::List(vec![]);
        assert_eq!(coerce("x", &empty, ValueType::DoubleArray, None).unwrap(), None);
        assert_eq!(coerce("x", &empty, ValueType::StringArray, None).unwrap(), None);
    }

    #[test]
    fn type_mismatch() {
        let err = coerce("x", &NativeValue::Text("a".into()), ValueType::Double, None)
            .unwrap_err();
        assert!(matches!(
            err,
            PropertyError::TypeMismatch { expected: ValueType::Double, .. }
        ));

        let arr: NativeValue = vec![0.5, 0.5].into();
        assert!(coerce("Composition", &arr, ValueType::Double, None).is_err());
        assert!(coerce("x", &NativeValue::Opaque("Color".into()), ValueType::String, None).is_err());
    }

    #[test]
    fn arrays_are_never_unit_converted() {
        let arr: NativeValue = vec![300.0, 400.0].into();
        assert_eq!(
            coerce("x", &arr, ValueType::DoubleArray, Some("C")).unwrap(),
            Some(PropertyValue::DoubleArray(vec![300.0, 400.0]))
        );
    }

    #[test]
    fn unknown_unit_is_conversion_error() {
        let err = coerce("x", &NativeValue::Float(1.0), ValueType::Double, Some("furlong"))
            .unwrap_err();
        assert!(matches!(err, PropertyError::Conversion(_)));
    }

    #[test]
    fn to_native_converts_to_base() {
        let native = to_native(&PropertyValue::Double(1.0), Some("bar")).unwrap();
        assert_eq!(native, NativeValue::Float(1e5));

        let native = to_native(&PropertyValue::StringArray(vec!["a".into()]), Some("bar")).unwrap();
        assert_eq!(native, NativeValue::List(vec![NativeValue::Text("a".into())]));
    }

    #[test]
    fn to_native_rejects_nan() {
        assert!(matches!(
            to_native(&PropertyValue::Double(f64::NAN), None),
            Err(PropertyError::Numeric(_))
        ));
    }

    #[test]
    fn dimensionless_check() {
        assert!(ensure_dimensionless("Composition", None).is_ok());
        assert!(ensure_dimensionless("Composition", Some("  ")).is_ok());
        assert!(matches!(
            ensure_dimensionless("Composition", Some("%")),
            Err(PropertyError::UnsupportedUnit { .. })
        ));
    }

    proptest! {
        #[test]
        fn finite_doubles_survive(v in -1.0e12f64..1.0e12) {
            let out = coerce("x", &NativeValue::Float(v), ValueType::Double, None).unwrap();
            prop_assert_eq!(out, Some(PropertyValue::Double(v)));
        }

        #[test]
        fn write_then_read_round_trips(v in -1.0e6f64..1.0e6) {
            let native = to_native(&PropertyValue::Double(v), Some("F")).unwrap();
            let back = coerce("x", &native, ValueType::Double, Some("F")).unwrap().unwrap();
            prop_assert!((back.as_f64().unwrap() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
