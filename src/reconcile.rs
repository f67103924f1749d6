//! Orphaned-header detection and removal.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the generated header files this tool manages.
pub const HEADER_EXT: &str = ".h";

/// A header file removed during a sweep
pub struct RemovedHeader {
    pub path: PathBuf,
    pub size: u64,
}

/// Result of reconciling the generated directory against the image directory
#[derive(Default)]
pub struct CleanReport {
    pub removed: Vec<RemovedHeader>,
}

impl CleanReport {
    /// Total bytes freed by the sweep
    pub fn bytes_reclaimed(&self) -> u64 {
        self.removed.iter().map(|h| h.size).sum()
    }
}

/// Extract the base name (filename minus extension) from a directory entry name.
/// Dotfiles like `.gitignore` keep their full name, matching `Path::file_stem`.
fn base_name(file_name: &OsStr) -> String {
    Path::new(file_name)
        .file_stem()
        .unwrap_or(file_name)
        .to_string_lossy()
        .into_owned()
}

/// Collect the base names of every immediate entry of the image directory.
/// Image files sharing a base name (`a.png`, `a.jpg`) collapse to one entry.
pub fn image_base_names(dir: &Path) -> Result<HashSet<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read image directory {}", dir.display()))?;

    let mut names = HashSet::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        names.insert(base_name(&entry.file_name()));
    }

    Ok(names)
}

/// Collect the base names of the generated directory's immediate entries that
/// carry the header extension. Entries with any other extension are ignored.
pub fn generated_base_names(dir: &Path) -> Result<HashSet<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read generated directory {}", dir.display()))?;

    let mut names = HashSet::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let file_name = entry.file_name();
        if file_name.to_string_lossy().ends_with(HEADER_EXT) {
            names.insert(base_name(&file_name));
        }
    }

    Ok(names)
}

/// Delete every generated header whose base name has no corresponding file in
/// the image directory, printing one line per removal. Any filesystem failure
/// aborts the sweep immediately; there is no partial-success bookkeeping.
pub fn clean_generated(img_dir: &Path, generated_dir: &Path) -> Result<CleanReport> {
    let image_names = image_base_names(img_dir)?;
    let generated_names = generated_base_names(generated_dir)?;

    let mut report = CleanReport::default();

    // Generated headers that no longer have a corresponding image file.
    // Set iteration order is unspecified; each removal is independent.
    for base in generated_names.difference(&image_names) {
        let header_path = generated_dir.join(format!("{base}{HEADER_EXT}"));

        // Size is advisory, only used for the final report
        let size = fs::symlink_metadata(&header_path)
            .map(|m| m.len())
            .unwrap_or(0);

        println!("Removing outdated file: {}", header_path.display());
        fs::remove_file(&header_path)
            .with_context(|| format!("Failed to remove {}", header_path.display()))?;

        report.removed.push(RemovedHeader {
            path: header_path,
            size,
        });
    }

    Ok(report)
}
