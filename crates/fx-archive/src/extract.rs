//! Extraction of the flowsheet XML member and release of its directory.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{ArchiveError, ArchiveResult};

/// Prefix of every directory created by [`extract`].
pub const TEMP_DIR_PREFIX: &str = ".fx-extract-";

const RANDOM_SUFFIX_LEN: usize = 6;

/// Whether `name` follows the extraction directory naming scheme.
///
/// Only such directories are ever removed by [`cleanup`].
pub fn is_temp_dir_name(name: &OsStr) -> bool {
    let Some(name) = name.to_str() else {
        return false;
    };
    let Some(suffix) = name.strip_prefix(TEMP_DIR_PREFIX) else {
        return false;
    };
    suffix.len() == RANDOM_SUFFIX_LEN && suffix.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Extract the archive's top-level XML member and return the path of the
/// extracted file.
///
/// The caller owns the returned file's directory and must pass the path to
/// [`cleanup`] on every exit path; [`ExtractedXml`] does that on drop.
pub fn extract(archive_path: &Path) -> ArchiveResult<PathBuf> {
    if !archive_path.is_file() {
        return Err(ArchiveError::ArchiveNotFound {
            path: archive_path.to_path_buf(),
        });
    }

    let file = File::open(archive_path).map_err(|e| ArchiveError::io(archive_path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| ArchiveError::Zip {
        path: archive_path.to_path_buf(),
        source: e,
    })?;

    let (index, member_name) = find_xml_member(&mut archive, archive_path)?;

    let parent = archive_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let temp_dir = tempfile::Builder::new()
        .prefix(TEMP_DIR_PREFIX)
        .rand_bytes(RANDOM_SUFFIX_LEN)
        .tempdir_in(parent)
        .map_err(|e| ArchiveError::io(parent, e))?;

    let xml_path = temp_dir.path().join(&member_name);
    {
        let mut entry = archive.by_index(index).map_err(|e| ArchiveError::Zip {
            path: archive_path.to_path_buf(),
            source: e,
        })?;
        let mut out = File::create(&xml_path).map_err(|e| ArchiveError::io(&xml_path, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| ArchiveError::io(&xml_path, e))?;
    }

    // Any error above drops `temp_dir` and removes it; past this point the
    // caller is responsible for the directory.
    let dir = temp_dir.keep();
    tracing::debug!(
        archive = %archive_path.display(),
        dir = %dir.display(),
        member = %member_name,
        "Extracted flowsheet XML"
    );
    Ok(xml_path)
}

/// Locate the first top-level `.xml` member.
fn find_xml_member(
    archive: &mut ZipArchive<File>,
    archive_path: &Path,
) -> ArchiveResult<(usize, String)> {
    let mut found: Option<(usize, String)> = None;

    for i in 0..archive.len() {
        let entry = archive.by_index(i).map_err(|e| ArchiveError::Zip {
            path: archive_path.to_path_buf(),
            source: e,
        })?;
        if entry.is_dir() {
            continue;
        }
        let Some(enclosed) = entry.enclosed_name() else {
            tracing::warn!(member = %entry.name(), "Ignoring archive member with unsafe path");
            continue;
        };
        // Top-level only: a single path component.
        if enclosed.components().count() != 1 {
            continue;
        }
        let is_xml = enclosed
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
        if !is_xml {
            continue;
        }
        let name = enclosed.to_string_lossy().into_owned();
        match &found {
            None => found = Some((i, name)),
            Some((_, first)) => {
                tracing::warn!(
                    archive = %archive_path.display(),
                    used = %first,
                    ignored = %name,
                    "Archive holds more than one XML member"
                );
            }
        }
    }

    found.ok_or_else(|| ArchiveError::NoXmlInArchive {
        path: archive_path.to_path_buf(),
    })
}

/// Remove the extraction directory owning `xml_path`.
///
/// Returns `Ok(false)` without touching the filesystem when the parent
/// directory does not follow the extraction naming scheme or is already gone.
pub fn cleanup(xml_path: &Path) -> ArchiveResult<bool> {
    let Some(dir) = xml_path.parent() else {
        return Ok(false);
    };
    let Some(name) = dir.file_name() else {
        return Ok(false);
    };
    if !is_temp_dir_name(name) {
        tracing::warn!(
            dir = %dir.display(),
            "Refusing to remove directory not created by extraction"
        );
        return Ok(false);
    }
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ArchiveError::io(dir, e)),
    }
}

/// Extracted flowsheet XML whose directory is removed on drop.
///
/// Cleanup failures on drop are logged, never raised.
#[derive(Debug)]
pub struct ExtractedXml {
    archive_path: PathBuf,
    xml_path: PathBuf,
    released: bool,
}

impl ExtractedXml {
    /// Extract `archive_path` and take ownership of the result.
    pub fn open(archive_path: &Path) -> ArchiveResult<Self> {
        let xml_path = extract(archive_path)?;
        Ok(Self {
            archive_path: archive_path.to_path_buf(),
            xml_path,
            released: false,
        })
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Path of the extracted XML file.
    pub fn xml_path(&self) -> &Path {
        &self.xml_path
    }

    /// Read the extracted document.
    pub fn read_to_string(&self) -> ArchiveResult<String> {
        fs::read_to_string(&self.xml_path).map_err(|e| ArchiveError::io(&self.xml_path, e))
    }

    /// Remove the extraction directory now and report the outcome.
    pub fn close(mut self) -> ArchiveResult<()> {
        self.released = true;
        cleanup(&self.xml_path).map(|_| ())
    }
}

impl Drop for ExtractedXml {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = cleanup(&self.xml_path) {
            tracing::warn!(
                xml = %self.xml_path.display(),
                error = %e,
                "Failed to clean up extraction"
            );
        }
    }
}
