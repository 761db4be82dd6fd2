//! Unit conversion errors.

use crate::quantity::QuantityKind;
use thiserror::Error;

pub type UnitResult<T> = Result<T, UnitError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Unit string not present in the unit table.
    #[error("Unknown unit '{unit}'")]
    UnknownUnit { unit: String },

    /// Two units of different quantity kinds were combined.
    #[error("Cannot convert '{from}' ({from_kind}) to '{to}' ({to_kind})")]
    KindMismatch {
        from: String,
        from_kind: QuantityKind,
        to: String,
        to_kind: QuantityKind,
    },
}
