//! Icon discovery: scan a directory for image files and decode them to RGBA.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::debug;

use crate::error::{Result, SpriteError};

/// Extensions accepted as icon sources, matched case-insensitively.
/// Kept in sync with the image-format features enabled in Cargo.toml.
const RECOGNIZED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// A decoded input image. Read once from disk, never mutated.
#[derive(Debug, Clone)]
pub struct Icon {
    /// Filename stem; doubles as the metadata key.
    pub name: String,
    pub image: RgbaImage,
}

impl Icon {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Scan `dir` for recognized image files, sorted by filename, and decode
/// each one fully into memory.
///
/// A missing directory is treated as "no icons" rather than an error; a
/// file that fails to decode aborts the whole run.
pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Vec<Icon>> {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("icon directory {} does not exist, treating as empty", dir.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_recognized_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!("discovered {} icon files in {}", paths.len(), dir.display());
    paths.iter().map(|path| load_icon(path)).collect()
}

fn has_recognized_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            RECOGNIZED_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

fn load_icon(path: &Path) -> Result<Icon> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let image = image::open(path)
        .map_err(|source| SpriteError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    Ok(Icon { name, image })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert!(has_recognized_extension(Path::new("icons/pin.png")));
        assert!(has_recognized_extension(Path::new("icons/PIN.PNG")));
        assert!(has_recognized_extension(Path::new("icons/photo.Jpeg")));
        assert!(!has_recognized_extension(Path::new("icons/notes.txt")));
        assert!(!has_recognized_extension(Path::new("icons/noext")));
    }
}
