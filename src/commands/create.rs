use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ViewerError};
use crate::templates;

/// Creates a stub GML file inside an asset folder.
///
/// Spaces become underscores and `.gml` is appended when missing; an
/// existing file is never overwritten.
pub fn create_gml(asset_folder: &Path, file_name: &str) -> Result<PathBuf> {
    if !asset_folder.is_dir() {
        return Err(ViewerError::Custom(format!(
            "invalid asset folder: {}",
            asset_folder.display()
        )));
    }

    let mut name = file_name.replace(' ', "_");
    if !name.to_lowercase().ends_with(".gml") {
        name.push_str(".gml");
    }

    let path = asset_folder.join(&name);
    if path.exists() {
        return Err(ViewerError::Custom(format!(
            "file already exists: {}",
            path.display()
        )));
    }

    let stem = name.strip_suffix(".gml").unwrap_or(&name);
    fs::write(&path, templates::gml_stub(stem))?;
    Ok(path)
}
