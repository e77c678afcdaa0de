//! Image file discovery.

use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// File extensions recognized as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "svg"];

/// True when `path` carries one of the recognized image extensions.
pub fn is_image_file(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
    .unwrap_or(false)
}

/// Lists the image files directly inside `dir`, sorted by path.
///
/// Only the directory itself is inspected; subdirectories are handled
/// separately by the scan orchestrator. Entries that cannot be read are
/// logged and skipped rather than failing the whole listing.
pub fn list_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
  let mut files: Vec<PathBuf> = entries(dir)?
    .into_iter()
    .filter(|entry| entry.file_type().is_file())
    .map(walkdir::DirEntry::into_path)
    .filter(|path| is_image_file(path))
    .collect();
  files.sort();
  Ok(files)
}

/// Lists the immediate subdirectories of `dir`, sorted by path.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
  let mut dirs: Vec<PathBuf> = entries(dir)?
    .into_iter()
    .filter(|entry| entry.file_type().is_dir())
    .map(walkdir::DirEntry::into_path)
    .collect();
  dirs.sort();
  Ok(dirs)
}

/// Collects the direct children of `dir`.
fn entries(dir: &Path) -> Result<Vec<walkdir::DirEntry>> {
  if !dir.is_dir() {
    return Err(ScanError::DirectoryNotFound(dir.to_path_buf()));
  }

  let entries = WalkDir::new(dir)
    .min_depth(1)
    .max_depth(1)
    .into_iter()
    .filter_map(|entry| match entry {
      Ok(entry) => Some(entry),
      Err(err) => {
        warn!("skipping unreadable entry in {}: {err}", dir.display());
        None
      }
    })
    .collect();
  Ok(entries)
}
