//! fx-archive: unpacking of single-file compressed model archives.
//!
//! A model archive is a zip package whose one top-level XML member describes
//! the flowsheet. Extraction writes that member into a uniquely named
//! directory next to the archive (not the system temp dir, which may be on
//! another device or unwritable for the service account). The directory is
//! released by [`cleanup`], or automatically when an [`ExtractedXml`] guard
//! goes out of scope.

pub mod error;
pub mod extract;

pub use error::{ArchiveError, ArchiveResult};
pub use extract::{ExtractedXml, TEMP_DIR_PREFIX, cleanup, extract, is_temp_dir_name};
