use thiserror::Error;

pub type FxResult<T> = Result<T, FxError>;

/// Errors shared by every exchange crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    /// NaN or infinity where a real number must cross into the simulator.
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
