use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::util::relative_to;

/// Display name / folder name pairs for the fixed GMS2 asset categories,
/// in the order they appear in the tree.
pub const ASSET_CATEGORIES: [(&str, &str); 10] = [
    ("Objects", "objects"),
    ("Scripts", "scripts"),
    ("Rooms", "rooms"),
    ("Sprites", "sprites"),
    ("Notes", "notes"),
    ("Tile Sets", "tilesets"),
    ("Timelines", "timelines"),
    ("Fonts", "fonts"),
    ("Sounds", "sounds"),
    ("Extensions", "extensions"),
];

/// Top-level directories that never hold GML worth listing.
const SKIPPED_TOP_DIRS: [&str; 6] = ["options", "datafiles", "configs", ".git", ".vscode", "temp"];

/// How an asset folder is displayed and which summarizer applies to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Object,
    Room,
    Sprite,
    Folder,
}

impl AssetKind {
    fn for_category(folder: &str) -> Self {
        match folder {
            "objects" => AssetKind::Object,
            "rooms" => AssetKind::Room,
            "sprites" => AssetKind::Sprite,
            _ => AssetKind::Folder,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GmlFileEntry {
    pub display_name: String,
    pub path: PathBuf,
    pub relative_path: String,
    /// The asset's metadata file, when the GML sits in an asset folder
    /// that has one. Export emits each YY file once.
    pub yy_path: Option<PathBuf>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntry {
    pub name: String,
    pub display_name: String,
    pub path: PathBuf,
    pub kind: AssetKind,
    pub yy_path: Option<PathBuf>,
    pub gml_files: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    pub name: String,
    pub folder: String,
    pub assets: Vec<AssetEntry>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScan {
    pub root: PathBuf,
    pub has_yyp: bool,
    pub categories: Vec<CategoryEntry>,
    /// Every GML file found, sorted by display name. Drives export.
    pub gml_files: Vec<GmlFileEntry>,
    /// GML files that sit outside any known asset folder.
    pub other_gml: Vec<GmlFileEntry>,
}

impl ProjectScan {
    pub fn find_asset(&self, category_folder: &str, name: &str) -> Option<&AssetEntry> {
        self.categories
            .iter()
            .find(|c| c.folder == category_folder)?
            .assets
            .iter()
            .find(|a| a.name == name)
    }
}

/// Scans a project folder: one pass over the category directories to build
/// the asset list, one recursive walk to find GML files and attach them.
pub fn scan_project(root: &Path) -> Result<ProjectScan> {
    let has_yyp = fs::read_dir(root)?.flatten().any(|e| {
        e.path()
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("yyp"))
            .unwrap_or(false)
    });

    let mut categories = Vec::new();
    for (display, folder) in ASSET_CATEGORIES {
        let category_path = root.join(folder);
        if !category_path.is_dir() {
            continue;
        }

        let mut names: Vec<String> = match fs::read_dir(&category_path) {
            Ok(rd) => rd
                .flatten()
                .filter(|e| e.path().is_dir())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();

        let singular = display.strip_suffix('s').unwrap_or(display);
        let assets = names
            .into_iter()
            .map(|name| {
                let path = category_path.join(&name);
                let yy = path.join(format!("{name}.yy"));
                AssetEntry {
                    display_name: format!("{singular}: {name}"),
                    path,
                    kind: AssetKind::for_category(folder),
                    yy_path: yy.is_file().then_some(yy),
                    gml_files: Vec::new(),
                    name,
                }
            })
            .collect();

        categories.push(CategoryEntry {
            name: display.to_string(),
            folder: folder.to_string(),
            assets,
        });
    }

    // Asset folder path -> (category index, asset index), for GML attachment.
    let mut asset_index: HashMap<PathBuf, (usize, usize)> = HashMap::new();
    for (ci, category) in categories.iter().enumerate() {
        for (ai, asset) in category.assets.iter().enumerate() {
            asset_index.insert(asset.path.clone(), (ci, ai));
        }
    }

    let mut gml_paths = Vec::new();
    walk_gml(root, root, &mut gml_paths)?;

    let mut gml_files = Vec::new();
    let mut other_gml = Vec::new();
    for path in gml_paths {
        let relative_path = relative_to(&path, root);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();

        if let Some(&(ci, ai)) = asset_index.get(&parent) {
            let asset = &mut categories[ci].assets[ai];
            asset.gml_files.push(stem.clone());
            gml_files.push(GmlFileEntry {
                display_name: format!("{} / {stem}", asset.display_name),
                path,
                relative_path,
                yy_path: asset.yy_path.clone(),
            });
        } else {
            let entry = GmlFileEntry {
                display_name: relative_path.clone(),
                path,
                relative_path,
                yy_path: None,
            };
            other_gml.push(entry.clone());
            gml_files.push(entry);
        }
    }
    gml_files.sort_by(|a, b| a.display_name.cmp(&b.display_name));

    Ok(ProjectScan {
        root: root.to_path_buf(),
        has_yyp,
        categories,
        gml_files,
        other_gml,
    })
}

/// Collects `.gml` files depth-first with sorted entries. Skipped top-level
/// directories are pruned; an unreadable subdirectory is skipped rather than
/// failing the whole scan.
fn walk_gml(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if dir == root => return Err(e.into()),
        Err(_) => return Ok(()),
    };

    let mut subdirs = Vec::new();
    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else {
            files.push(path);
        }
    }
    subdirs.sort();
    files.sort();

    for file in files {
        let is_gml = file
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gml"))
            .unwrap_or(false);
        if is_gml {
            out.push(file);
        }
    }

    for subdir in subdirs {
        if subdir.parent() == Some(root) {
            let name = subdir
                .file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if SKIPPED_TOP_DIRS.contains(&name.as_str()) {
                continue;
            }
        }
        walk_gml(root, &subdir, out)?;
    }
    Ok(())
}

/// Renders the scan as an ASCII connector tree: project root, categories,
/// assets, GML leaves, plus an "Other GML" branch for stray files.
pub fn render_tree(scan: &ProjectScan) -> String {
    let mut lines = Vec::new();
    let root_name = scan
        .root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| scan.root.display().to_string());
    lines.push(root_name);

    let mut branches: Vec<(String, Vec<(String, Vec<String>)>)> = scan
        .categories
        .iter()
        .map(|c| {
            let assets = c
                .assets
                .iter()
                .map(|a| (a.display_name.clone(), a.gml_files.clone()))
                .collect();
            (c.name.clone(), assets)
        })
        .collect();
    if !scan.other_gml.is_empty() {
        let strays = scan
            .other_gml
            .iter()
            .map(|g| (g.relative_path.clone(), Vec::new()))
            .collect();
        branches.push(("Other GML".to_string(), strays));
    }

    for (i, (category, assets)) in branches.iter().enumerate() {
        let last_category = i + 1 == branches.len();
        let connector = if last_category { "└──" } else { "├──" };
        lines.push(format!("{connector} {category}"));

        let category_cont = if last_category { "    " } else { "│   " };
        for (j, (asset, gml_files)) in assets.iter().enumerate() {
            let last_asset = j + 1 == assets.len();
            let connector = if last_asset { "└──" } else { "├──" };
            lines.push(format!("{category_cont}{connector} {asset}"));

            let asset_cont = format!("{category_cont}{}", if last_asset { "    " } else { "│   " });
            for (k, gml) in gml_files.iter().enumerate() {
                let connector = if k + 1 == gml_files.len() { "└──" } else { "├──" };
                lines.push(format!("{asset_cont}{connector} {gml}"));
            }
        }
    }

    lines.join("\n")
}
