//! Per-analysis scratch space and zip extraction.

use crate::error::{AnalyzerError, Result};
use log::{debug, info};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;

/// Name of the folder archives are unpacked into
pub const EXTRACT_DIR_NAME: &str = "project_repo";

const WORKSPACE_PREFIX: &str = "projectbrief-";

/// Uniquely named scratch directory owned by one analysis.
///
/// The directory and everything extracted into it are removed when the
/// workspace is dropped, whichever way the analysis ends.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    extract_dir: PathBuf,
}

impl Workspace {
    /// Creates a fresh workspace below `root`
    pub fn create(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)?;
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(root)?;
        let extract_dir = dir.path().join(EXTRACT_DIR_NAME);
        fs::create_dir(&extract_dir)?;
        debug!("Created workspace {}", dir.path().display());

        Ok(Self { dir, extract_dir })
    }

    /// Top-level directory of the workspace
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Folder the archive is unpacked into
    pub fn extract_dir(&self) -> &Path {
        &self.extract_dir
    }

    /// Unpacks `archive_path` into the extraction folder, returning the number of entries
    pub fn extract(&self, archive_path: &Path) -> Result<usize> {
        extract_archive(archive_path, &self.extract_dir)
    }
}

/// Extracts every entry of a zip archive below `extract_path`, preserving relative paths.
///
/// Entries whose names are absolute or climb out of `extract_path` abort the
/// extraction instead of being written.
pub fn extract_archive(archive_path: &Path, extract_path: &Path) -> Result<usize> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let relative = entry
            .enclosed_name()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                AnalyzerError::Extraction(format!(
                    "Archive entry escapes the extraction directory: {}",
                    entry.name()
                ))
            })?;
        let target = extract_path.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| write_error(&relative, e))?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(&relative, e))?;
        }
        let mut out = File::create(&target).map_err(|e| write_error(&relative, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| write_error(&relative, e))?;
    }

    info!("Extracted {} entries from {}", archive.len(), archive_path.display());
    Ok(archive.len())
}

fn write_error(entry: &Path, err: io::Error) -> AnalyzerError {
    AnalyzerError::Extraction(format!("Failed to extract {}: {}", entry.display(), err))
}
