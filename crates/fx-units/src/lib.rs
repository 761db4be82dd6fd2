//! fx-units: physical unit conversion for simulator property values.
//!
//! Provides:
//! - A fixed unit table keyed by the unit strings simulators report
//! - Conversion to and from the SI base value used as interchange format
//! - Classification of a unit string into a quantity kind
//! - A typed bridge from base values into `uom` quantities
//!
//! # Example
//!
//! ```
//! use fx_units::{classify, from_base, to_base, QuantityKind};
//!
//! let kelvin = to_base("C", 25.0).unwrap();
//! assert!((kelvin - 298.15).abs() < 1e-12);
//! assert!((from_base("C", kelvin).unwrap() - 25.0).abs() < 1e-12);
//! assert_eq!(classify("kPa"), Some(QuantityKind::Pressure));
//! assert_eq!(classify("parsec"), None);
//! ```

pub mod error;
pub mod quantity;
pub mod table;
pub mod typed;

pub use error::{UnitError, UnitResult};
pub use quantity::QuantityKind;
pub use table::{
    UnitClassifier, UnitDef, UnitTable, classify, convert, from_base, lookup, supported_units,
    to_base,
};
pub use typed::{BaseValue, TypedQuantity};
