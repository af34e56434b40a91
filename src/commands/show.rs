use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::commands::scan::{self, AssetEntry, AssetKind};
use crate::commands::sprite;
use crate::error::{Result, ViewerError};
use crate::summary::{summarize_object, summarize_room};
use crate::yy;

/// Resolves `<category>/<asset>` inside a project and renders the report for
/// its kind: room and object summaries, sprite frame info, or a GML listing
/// for everything else.
pub fn show_asset(root: &Path, target: &str) -> Result<String> {
    let (folder, name) = target.split_once('/').ok_or_else(|| {
        ViewerError::Custom(format!("expected <category>/<asset>, got '{target}'"))
    })?;

    let project = scan::scan_project(root)?;
    let asset = project.find_asset(folder, name).ok_or_else(|| {
        ViewerError::Custom(format!("no asset '{name}' under '{folder}' in {}", root.display()))
    })?;

    match asset.kind {
        AssetKind::Room => summarize_metadata(asset, summarize_room),
        AssetKind::Object => summarize_metadata(asset, summarize_object),
        AssetKind::Sprite => sprite_report(asset),
        AssetKind::Folder => Ok(folder_report(asset)),
    }
}

/// Reads and parses the asset's `.yy` file, then runs the given summarizer.
fn summarize_metadata(asset: &AssetEntry, summarize: fn(&Value) -> String) -> Result<String> {
    let yy_path = asset.yy_path.as_ref().ok_or_else(|| {
        ViewerError::Custom(format!(
            "metadata file not found: {}",
            asset.path.join(format!("{}.yy", asset.name)).display()
        ))
    })?;
    let raw = fs::read_to_string(yy_path)?;
    let doc = yy::load(&raw)?;
    Ok(summarize(&doc))
}

/// Reports the first frame of a sprite with its pixel dimensions.
fn sprite_report(asset: &AssetEntry) -> Result<String> {
    match sprite::first_frame(&asset.path)? {
        Some(frame) => {
            let (width, height) = sprite::png_dimensions(&frame)?;
            let frame_name = frame
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            Ok(format!(
                "Sprite: {}\nFrame: {frame_name}\nSize: {width}x{height}",
                asset.name
            ))
        }
        None => Ok(format!(
            "No .png image frames found in sprite folder:\n{}",
            asset.path.display()
        )),
    }
}

/// Generic asset folders (scripts, notes, ...) just list their GML files.
fn folder_report(asset: &AssetEntry) -> String {
    let mut lines = vec![format!("Selected asset folder: {}", asset.display_name)];
    if asset.gml_files.is_empty() {
        lines.push("(no GML files)".to_string());
    } else {
        lines.push(format!("GML files ({}):", asset.gml_files.len()));
        for gml in &asset.gml_files {
            lines.push(format!("  - {gml}.gml"));
        }
    }
    lines.join("\n")
}
