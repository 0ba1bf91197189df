//! PO catalog discovery and file I/O.
//!
//! Thin wrapper around `polib`: list the catalog files in a directory,
//! parse them, and write them back out.

use std::fs;
use std::path::{Path, PathBuf};

use polib::catalog::Catalog;
use polib::po_file;

use crate::translation::error::{TranslationError, TranslationResult};

/// Returns true if the path looks like a gettext PO catalog file.
pub fn is_po_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("po"))
        .unwrap_or(false)
}

/// Lists the PO catalog files directly inside `dir`, sorted by name.
///
/// The listing is not recursive; anything that is not a regular `.po`
/// file is skipped.
pub fn find_catalog_files(dir: &Path) -> TranslationResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        TranslationError::CatalogError(format!("failed to read directory '{}': {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_po_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Parses a PO catalog from disk.
pub fn load_catalog(path: &Path) -> TranslationResult<Catalog> {
    po_file::parse(path).map_err(|e| {
        TranslationError::CatalogError(format!("failed to parse '{}': {}", path.display(), e))
    })
}

/// Writes a PO catalog to disk.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> TranslationResult<()> {
    po_file::write(catalog, path).map_err(|e| {
        TranslationError::CatalogError(format!("failed to write '{}': {}", path.display(), e))
    })
}
