//! Compositing: blit decoded icons onto one transparent canvas.

use image::{imageops, RgbaImage};

use crate::icon::Icon;
use crate::layout::SpriteLayout;

/// Allocate a transparent canvas of the layout dimensions and copy each
/// icon into its placement rectangle. Pixels are written as-is, alpha
/// included; nothing is blended against the background.
pub fn composite(icons: &[Icon], layout: &SpriteLayout) -> RgbaImage {
    let mut canvas = RgbaImage::new(layout.width, layout.height);
    for icon in icons {
        if let Some(placement) = layout.placements.get(&icon.name) {
            imageops::replace(
                &mut canvas,
                &icon.image,
                i64::from(placement.x),
                i64::from(placement.y),
            );
        }
    }
    canvas
}
