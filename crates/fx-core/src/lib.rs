//! fx-core: shared foundation for the flowsheet exchange crates.
//!
//! Contains:
//! - units (uom SI types + constructors for base-unit values)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{FxError, FxResult};
pub use numeric::*;
pub use units::*;
