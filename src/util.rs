use std::path::Path;

/// Expands a leading `~` in a path to the user's home directory.
/// Also normalizes path separators for the current OS.
pub fn expand_tilde(path: &str) -> String {
    let result = if path.starts_with("~/") || path == "~" {
        if let Some(home) = dirs::home_dir() {
            let rest = &path[1..]; // "/GameMakerProjects/..."
            home.join(&rest[1..]).to_string_lossy().to_string()
        } else {
            path.to_string()
        }
    } else {
        path.to_string()
    };
    // Normalize separators for the current OS
    if cfg!(windows) {
        result.replace('/', "\\")
    } else {
        result
    }
}

/// Returns the final component of a path string. `.yy` files store paths
/// with forward slashes regardless of platform, so this splits on both.
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Returns a path relative to `root` when possible, or the path as written.
pub fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_splits_forward_slashes() {
        assert_eq!(basename("rooms/rm_a/RoomCreationCode.gml"), "RoomCreationCode.gml");
    }

    #[test]
    fn basename_splits_backslashes() {
        assert_eq!(basename("rooms\\rm_a\\code.gml"), "code.gml");
    }

    #[test]
    fn basename_of_bare_name_is_itself() {
        assert_eq!(basename("code.gml"), "code.gml");
    }
}
