use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::scan::ProjectScan;
use crate::error::{Result, ViewerError};
use crate::util::relative_to;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub out_path: PathBuf,
    pub gml_count: usize,
    pub yy_count: usize,
}

/// Concatenates every GML file (in display-name order) plus each associated
/// YY file (once) into a single text export.
///
/// A file that fails to read gets an error banner embedded in its place; the
/// export itself carries on.
pub fn export_project(scan: &ProjectScan, out_path: &Path) -> Result<ExportSummary> {
    if scan.gml_files.is_empty() {
        return Err(ViewerError::Custom(
            "no GML files found to export".to_string(),
        ));
    }

    let mut out = String::new();
    out.push_str(&format!(
        "// GML and YY Data Export from Project: {}\n",
        scan.root.display()
    ));
    out.push_str(&format!(
        "// Total GML Files Found: {}\n",
        scan.gml_files.len()
    ));
    out.push_str(&"=".repeat(70));
    out.push_str("\n\n");

    let mut exported_yy: HashSet<&PathBuf> = HashSet::new();
    for entry in &scan.gml_files {
        out.push_str(&format!("// ----- Start GML: {} -----\n", entry.display_name));
        out.push_str(&format!("// ----- GML Path: {} -----\n\n", entry.relative_path));
        match fs::read_to_string(&entry.path) {
            Ok(content) => out.push_str(&content),
            Err(e) => {
                out.push_str(&format!(
                    "// ***** ERROR READING GML FILE: {} *****\n",
                    entry.relative_path
                ));
                out.push_str(&format!("// ***** Error: {e} *****\n"));
            }
        }
        out.push_str("\n\n");
        out.push_str(&"-".repeat(50));
        out.push_str("[End GML]");
        out.push_str(&"-".repeat(70 - 50 - 9));
        out.push_str("\n\n");

        let yy_path = match &entry.yy_path {
            Some(p) if p.is_file() && !exported_yy.contains(p) => p,
            _ => continue,
        };
        let asset_name = yy_path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let relative_yy = relative_to(yy_path, &scan.root);
        out.push_str(&format!("// ----- Associated YY File: {asset_name} -----\n"));
        out.push_str(&format!("// ----- YY Path: {relative_yy} -----\n\n"));
        match fs::read_to_string(yy_path) {
            // YY content goes out raw, untouched by trailing-comma cleanup
            Ok(content) => out.push_str(&content),
            Err(e) => {
                out.push_str(&format!(
                    "// ***** ERROR READING YY FILE: {relative_yy} *****\n"
                ));
                out.push_str(&format!("// ***** Error: {e} *****\n"));
            }
        }
        out.push_str("\n\n");
        out.push_str(&"=".repeat(30));
        out.push_str("[End YY]");
        out.push_str(&"=".repeat(70 - 30 - 8));
        out.push_str("\n\n");
        exported_yy.insert(yy_path);
    }

    fs::write(out_path, out)?;
    Ok(ExportSummary {
        out_path: out_path.to_path_buf(),
        gml_count: scan.gml_files.len(),
        yy_count: exported_yy.len(),
    })
}

/// Default export filename: `<project-basename>_export.txt`.
pub fn default_out_path(root: &Path) -> PathBuf {
    let base = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "project".to_string());
    PathBuf::from(format!("{base}_export.txt"))
}
