//! Export: write the sprite sheet PNG and its JSON metadata.

use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::error::{Result, SpriteError};
use crate::layout::SpriteLayout;

/// Default output filename for the composite image.
pub const SPRITE_IMAGE: &str = "sprite.png";
/// Default output filename for the placement metadata.
pub const SPRITE_METADATA: &str = "sprite.json";

pub fn write_sprite<P: AsRef<Path>>(canvas: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    canvas.save(path).map_err(|source| SpriteError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize the icon-name -> placement map as human-readable JSON.
pub fn write_metadata<P: AsRef<Path>>(layout: &SpriteLayout, path: P) -> Result<()> {
    let mut json = serde_json::to_string_pretty(&layout.placements)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
