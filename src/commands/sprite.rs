use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Result, ViewerError};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Returns the first `.png` frame in a sprite folder (sorted by filename),
/// or `None` when the folder holds no frames.
pub fn first_frame(folder: &Path) -> Result<Option<PathBuf>> {
    let mut frames: Vec<PathBuf> = fs::read_dir(folder)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.file_name()
                    .map(|n| n.to_string_lossy().to_lowercase().ends_with(".png"))
                    .unwrap_or(false)
        })
        .collect();
    frames.sort();
    Ok(frames.into_iter().next())
}

/// Reads pixel dimensions from a PNG's IHDR chunk. The signature and the
/// IHDR header always occupy the first 24 bytes of a valid file.
pub fn png_dimensions(path: &Path) -> Result<(u32, u32)> {
    let mut file = fs::File::open(path)?;
    let mut header = [0u8; 24];
    file.read_exact(&mut header)?;

    if header[..8] != PNG_SIGNATURE || &header[12..16] != b"IHDR" {
        return Err(ViewerError::Custom(format!(
            "not a PNG file: {}",
            path.display()
        )));
    }

    let width = u32::from_be_bytes([header[16], header[17], header[18], header[19]]);
    let height = u32::from_be_bytes([header[20], header[21], header[22], header[23]]);
    Ok((width, height))
}
