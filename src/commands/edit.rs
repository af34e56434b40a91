use crate::error::{Result, ViewerError};
use crate::util::expand_tilde;

/// Opens a file in the user's code editor. GUI editors get the path as an
/// argument and the process is left running detached.
///
/// Editor resolution: `--editor` flag, then `$EDITOR`, then `code`.
pub fn open_in_editor(editor: Option<&str>, path: &str) -> Result<()> {
    let path = expand_tilde(path);
    let editor = editor
        .map(str::to_string)
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "code".to_string());

    std::process::Command::new(&editor)
        .arg(&path)
        .spawn()
        .map_err(|e| ViewerError::Custom(format!("failed to open {editor}: {e}")))?;
    Ok(())
}
