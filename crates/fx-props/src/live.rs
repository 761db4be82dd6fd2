//! Get/set of single properties on a live simulation object.

use fx_core::ensure_finite;
use fx_graph::{Property, PropertyValue, SourceRef, UnitRef, ValueType};
use fx_units::{UnitClassifier, UnitTable};

use crate::coerce::{coerce, ensure_dimensionless, to_native};
use crate::error::{PropertyError, PropertyResult};
use crate::native::{NativeKind, NativeValue};
use crate::resolver::PropertyResolver;

/// Overall mole-fraction vector of a material stream.
pub const COMPOSITION: &str = "Composition";
/// Component identifiers of a material stream.
pub const COMPONENTS: &str = "Components";

/// Which key set of an object to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAccess {
    Read,
    Write,
}

/// Failure signalled by the simulator side of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeFault {
    /// The object does not implement the operation.
    Unsupported,
    /// The operation ran and failed.
    Failed(String),
}

/// A live simulation object as exposed by the simulator host.
///
/// Values cross this boundary in base units. Capability methods default to
/// `NativeFault::Unsupported`; material-stream-like objects override them.
pub trait SimObject {
    fn object_type(&self) -> &str;

    fn object_name(&self) -> &str;

    /// Native keys readable or writable on this object.
    fn property_keys(&self, access: PropertyAccess) -> Vec<String>;

    fn property_value(&self, key: &str) -> Result<NativeValue, NativeFault>;

    /// Returns `Ok(false)` when the simulator refused the value.
    fn set_property_value(&mut self, key: &str, value: NativeValue) -> Result<bool, NativeFault>;

    /// Unit symbol the native value of `key` is expressed in.
    fn property_unit(&self, _key: &str) -> Option<String> {
        None
    }

    fn overall_composition(&self) -> Result<Vec<f64>, NativeFault> {
        Err(NativeFault::Unsupported)
    }

    fn set_overall_composition(&mut self, _fractions: &[f64]) -> Result<(), NativeFault> {
        Err(NativeFault::Unsupported)
    }

    fn component_ids(&self) -> Result<Vec<String>, NativeFault> {
        Err(NativeFault::Unsupported)
    }
}

/// Property get/set against live objects.
///
/// Holds no per-call state; each call is one synchronous round trip.
pub struct PropertyIo<'a> {
    resolver: &'a PropertyResolver,
    classifier: &'a dyn UnitClassifier,
}

impl<'a> PropertyIo<'a> {
    /// I/O using the built-in unit table for classification.
    pub fn new(resolver: &'a PropertyResolver) -> Self {
        Self {
            resolver,
            classifier: &UnitTable,
        }
    }

    pub fn with_classifier(resolver: &'a PropertyResolver, classifier: &'a dyn UnitClassifier) -> Self {
        Self {
            resolver,
            classifier,
        }
    }

    /// Read one property.
    ///
    /// `Ok(None)` means the simulator holds no meaningful value (NaN,
    /// infinity, empty list).
    pub fn get_property(
        &self,
        object: &dyn SimObject,
        label: &str,
        declared: ValueType,
        unit: Option<&str>,
    ) -> PropertyResult<Option<Property>> {
        match label {
            COMPOSITION => {
                expect_type(label, declared, ValueType::DoubleArray)?;
                ensure_dimensionless(label, unit)?;
                let fractions = capability(object, "composition", object.overall_composition())?;
                let value = coerce(label, &NativeValue::from(fractions), declared, None)?;
                Ok(value.map(|v| self.envelope(object, label, label, v, None, false)))
            }
            COMPONENTS => {
                expect_type(label, declared, ValueType::StringArray)?;
                ensure_dimensionless(label, unit)?;
                let ids = capability(object, "component list", object.component_ids())?;
                let value = coerce(label, &NativeValue::from(ids), declared, None)?;
                Ok(value.map(|v| self.envelope(object, label, label, v, None, true)))
            }
            _ => self.get_generic(object, label, declared, unit),
        }
    }

    fn get_generic(
        &self,
        object: &dyn SimObject,
        label: &str,
        declared: ValueType,
        unit: Option<&str>,
    ) -> PropertyResult<Option<Property>> {
        let readable = object.property_keys(PropertyAccess::Read);
        let key = self
            .resolver
            .require_key(label, &readable, object.object_name())?;
        let raw = native(object, object.property_value(key))?;

        let Some(value) = coerce(label, &raw, declared, unit)? else {
            tracing::debug!(
                object = %object.object_name(),
                property = %label,
                "Property has no meaningful value"
            );
            return Ok(None);
        };

        // Without a requested unit the value stays in the simulator's unit.
        let unit_name = match (declared, unit) {
            (ValueType::Double, Some(u)) => Some(u.to_string()),
            (ValueType::Double, None) => object.property_unit(key),
            _ => None,
        };
        let read_only = !object
            .property_keys(PropertyAccess::Write)
            .iter()
            .any(|k| k == key);

        Ok(Some(self.envelope(
            object,
            label,
            key,
            value,
            unit_name.as_deref(),
            read_only,
        )))
    }

    /// Write one property.
    pub fn set_property(
        &self,
        object: &mut dyn SimObject,
        label: &str,
        value: &PropertyValue,
        unit: Option<&str>,
    ) -> PropertyResult<()> {
        if label == COMPOSITION {
            let PropertyValue::DoubleArray(fractions) = value else {
                return Err(PropertyError::TypeMismatch {
                    property: label.to_string(),
                    expected: value.value_type(),
                    found: ValueType::DoubleArray.to_string(),
                });
            };
            ensure_dimensionless(label, unit)?;
            for f in fractions {
                ensure_finite(*f, "mole fraction")?;
            }
            let name = object.object_name().to_string();
            return match object.set_overall_composition(fractions) {
                Ok(()) => Ok(()),
                Err(NativeFault::Unsupported) => Err(PropertyError::UnsupportedCapability {
                    object: name,
                    capability: "composition",
                }),
                Err(NativeFault::Failed(message)) => Err(PropertyError::Native {
                    object: name,
                    message,
                }),
            };
        }

        let writable = object.property_keys(PropertyAccess::Write);
        let key = self
            .resolver
            .require_key(label, &writable, object.object_name())?
            .to_string();
        let native_value = to_native(value, unit)?;
        let name = object.object_name().to_string();

        match object.set_property_value(&key, native_value) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PropertyError::WriteRejected {
                property: label.to_string(),
                object: name,
            }),
            Err(NativeFault::Unsupported) => Err(PropertyError::WriteRejected {
                property: label.to_string(),
                object: name,
            }),
            Err(NativeFault::Failed(message)) => Err(PropertyError::Native {
                object: name,
                message,
            }),
        }
    }

    /// Read every readable property whose type can be inferred, up to `limit`.
    ///
    /// Failures on individual properties are logged and skipped.
    pub fn read_all(&self, object: &dyn SimObject, limit: usize) -> Vec<Property> {
        let keys = object.property_keys(PropertyAccess::Read);
        let writable = object.property_keys(PropertyAccess::Write);
        let mut out = Vec::new();

        for key in &keys {
            if out.len() >= limit {
                tracing::warn!(
                    object = %object.object_name(),
                    limit,
                    available = keys.len(),
                    "Property limit reached, remaining properties skipped"
                );
                break;
            }
            let raw = match object.property_value(key) {
                Ok(raw) => raw,
                Err(fault) => {
                    tracing::warn!(
                        object = %object.object_name(),
                        key = %key,
                        ?fault,
                        "Skipping unreadable property"
                    );
                    continue;
                }
            };
            let Some(declared) = NativeKind::of(&raw).value_type() else {
                continue;
            };
            let label = self.resolver.display_label(key);
            match coerce(label, &raw, declared, None) {
                Ok(Some(value)) => {
                    let unit = match declared {
                        ValueType::Double => object.property_unit(key),
                        _ => None,
                    };
                    let read_only = !writable.contains(key);
                    out.push(self.envelope(object, label, key, value, unit.as_deref(), read_only));
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(object = %object.object_name(), key = %key, error = %e, "Skipping property");
                }
            }
        }
        out
    }

    fn envelope(
        &self,
        object: &dyn SimObject,
        label: &str,
        key: &str,
        value: PropertyValue,
        unit: Option<&str>,
        read_only: bool,
    ) -> Property {
        let unit = unit.map(|name| UnitRef {
            name: name.to_string(),
            quantity_kind: self.classifier.unit_type(name),
        });
        Property::new(
            label,
            value,
            unit,
            read_only,
            SourceRef {
                object_type: object.object_type().to_string(),
                object_name: object.object_name().to_string(),
                native_key: key.to_string(),
            },
        )
    }
}

fn expect_type(property: &str, requested: ValueType, required: ValueType) -> PropertyResult<()> {
    if requested == required {
        Ok(())
    } else {
        Err(PropertyError::TypeMismatch {
            property: property.to_string(),
            expected: requested,
            found: required.to_string(),
        })
    }
}

fn capability<T>(
    object: &dyn SimObject,
    capability: &'static str,
    result: Result<T, NativeFault>,
) -> PropertyResult<T> {
    result.map_err(|fault| match fault {
        NativeFault::Unsupported => PropertyError::UnsupportedCapability {
            object: object.object_name().to_string(),
            capability,
        },
        NativeFault::Failed(message) => PropertyError::Native {
            object: object.object_name().to_string(),
            message,
        },
    })
}

fn native(object: &dyn SimObject, result: Result<NativeValue, NativeFault>) -> PropertyResult<NativeValue> {
    result.map_err(|fault| PropertyError::Native {
        object: object.object_name().to_string(),
        message: match fault {
            NativeFault::Unsupported => "operation not supported".to_string(),
            NativeFault::Failed(message) => message,
        },
    })
}
