//! Application service layer for flowsheet exchange.
//!
//! Ties archive extraction, document parsing and graph building together
//! behind one call, configured from YAML. Used by the CLI and by hosts that
//! embed the extractor.

pub mod config;
pub mod error;
pub mod service;

pub use config::{AliasEntry, ExtractorConfig};
pub use error::{AppError, AppResult};
pub use service::{CancelToken, FlowsheetModel, archive_digest, extract_flowsheet, extract_many};
