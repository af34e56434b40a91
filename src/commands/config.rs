use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::logs::{format_timestamp, unix_timestamp};
use crate::error::{Result, ViewerError};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub path: String,
    pub last_opened: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    pub version: u32,
    pub projects: Vec<ProjectEntry>,
    pub last_active_project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            projects: vec![],
            last_active_project: None,
            export_dir: None,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gmlview").join("config.json"))
}

pub fn load_config() -> Option<ViewerConfig> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Records a project in the recent list (upsert by path) and marks it as the
/// last active one.
pub fn remember_project(root: &Path) -> Result<ViewerConfig> {
    let path = config_path()
        .ok_or_else(|| ViewerError::Custom("Cannot find home directory".into()))?;

    let mut config = load_config().unwrap_or_default();

    let project = ProjectEntry {
        name: root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string()),
        path: root.display().to_string(),
        last_opened: format_timestamp(unix_timestamp()),
    };

    // Upsert by path
    if let Some(existing) = config.projects.iter_mut().find(|p| p.path == project.path) {
        *existing = project.clone();
    } else {
        config.projects.push(project.clone());
    }
    config.last_active_project = Some(project.path);

    // Write
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| ViewerError::Custom(e.to_string()))?;
    std::fs::write(&path, json)?;

    Ok(config)
}
