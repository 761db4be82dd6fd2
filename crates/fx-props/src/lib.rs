//! fx-props: translation between simulator-native and typed property values.
//!
//! Provides:
//! - `NativeValue`, the closed union every dynamically typed simulator value is
//!   inspected into at the I/O boundary
//! - `PropertyResolver`, mapping caller labels onto native keys via an alias table
//! - Coercion of native values into typed `PropertyValue`s (and back), with
//!   unit conversion and filtering of non-finite numbers
//! - `SimObject`, the narrow interface to a live simulation object, and
//!   `PropertyIo` for single-property get/set against it
//!
//! Nothing here locks: callers serialize access to the simulator instance.

pub mod coerce;
pub mod error;
pub mod live;
pub mod native;
pub mod resolver;

pub use coerce::{coerce, ensure_dimensionless, to_native};
pub use error::{PropertyError, PropertyResult};
pub use live::{COMPONENTS, COMPOSITION, NativeFault, PropertyAccess, PropertyIo, SimObject};
pub use native::{NativeKind, NativeValue};
pub use resolver::PropertyResolver;
