//! # Photo Renamer
//!
//! Renames the JPEG photos in every immediate subfolder of a root directory
//! to `<transliterated folder name>_<n>.jpg`, numbering files in sorted
//! order of their original names.
//!
//! Renaming is best effort: a file that already carries its target name is
//! left alone, an existing target is never overwritten, and a failed rename
//! is recorded in the report while the walk goes on.

use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::transliteration::folder_stem;

/// Extensions (lowercase, without the dot) treated as photos
pub const PHOTO_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// Errors that stop the renamer before any file is touched
#[derive(Debug, Clone)]
pub enum RenameError {
    /// The root path does not point to a directory
    NotADirectory(PathBuf),
    /// The root or a subfolder could not be listed
    Io(String),
}

impl std::fmt::Display for RenameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenameError::NotADirectory(path) => write!(f, "Not a directory: {}", path.display()),
            RenameError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for RenameError {}

impl From<std::io::Error> for RenameError {
    fn from(err: std::io::Error) -> Self {
        RenameError::Io(err.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Report planned renames without touching the file system
    pub dry_run: bool,
}

/// Outcome of a renamer run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenameReport {
    /// `(from, to)` pairs that were renamed (or would be, in a dry run)
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// Files that already had their target name
    pub already_named: Vec<PathBuf>,
    /// Targets that already existed, so the source file was left alone
    pub collisions: Vec<PathBuf>,
    /// Files whose rename failed, with the error message
    pub failures: Vec<(PathBuf, String)>,
}

impl RenameReport {
    pub fn skipped(&self) -> usize {
        self.collisions.len() + self.failures.len()
    }
}

/// True for `.jpg` / `.jpeg` file names, case-insensitively
pub fn is_photo_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            PHOTO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Rename photos in every immediate subfolder of `root`
pub fn rename_photos_in_folders(
    root: &Path,
    options: &RenameOptions,
) -> Result<RenameReport, RenameError> {
    if !root.is_dir() {
        return Err(RenameError::NotADirectory(root.to_path_buf()));
    }

    let mut folders: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_dir())
        .collect();
    folders.sort();

    let mut report = RenameReport::default();
    for folder in folders {
        rename_photos_in_folder(&folder, options, &mut report)?;
    }

    info!(
        "Renamed {} files, {} already named, {} collisions, {} failures",
        report.renamed.len(),
        report.already_named.len(),
        report.collisions.len(),
        report.failures.len()
    );
    Ok(report)
}

/// Rename the photos of a single folder, appending outcomes to `report`
pub fn rename_photos_in_folder(
    folder: &Path,
    options: &RenameOptions,
    report: &mut RenameReport,
) -> Result<(), RenameError> {
    let folder_name = match folder.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Ok(()),
    };
    let stem = folder_stem(&folder_name);

    let mut files: Vec<String> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file() && is_photo_file(&entry.path()))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();

    for (index, file_name) in files.iter().enumerate() {
        let old_path = folder.join(file_name);
        let new_name = format!("{}_{}.jpg", stem, index + 1);
        let new_path = folder.join(&new_name);

        if old_path == new_path {
            info!("Already named: {}", new_path.display());
            report.already_named.push(old_path);
            continue;
        }

        if new_path.exists() {
            warn!("Target already exists, skipped: {}", new_path.display());
            report.collisions.push(new_path);
            continue;
        }

        if options.dry_run {
            info!("Would rename: {} -> {}", file_name, new_name);
            report.renamed.push((old_path, new_path));
            continue;
        }

        match fs::rename(&old_path, &new_path) {
            Ok(()) => {
                info!("Renamed: {} -> {}", file_name, new_name);
                report.renamed.push((old_path, new_path));
            }
            Err(e) => {
                error!("Failed to rename {}: {}", old_path.display(), e);
                report.failures.push((old_path, e.to_string()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_extensions() {
        assert!(is_photo_file(Path::new("a.jpg")));
        assert!(is_photo_file(Path::new("b.JPEG")));
        assert!(!is_photo_file(Path::new("c.png")));
        assert!(!is_photo_file(Path::new("jpg")));
    }

    #[test]
    fn test_missing_root() {
        let result = rename_photos_in_folders(Path::new("/no/such/root"), &RenameOptions::default());
        assert!(matches!(result, Err(RenameError::NotADirectory(_))));
    }
}
