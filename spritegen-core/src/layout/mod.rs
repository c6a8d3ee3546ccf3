//! Single-row sprite layout: cumulative x offsets with fixed padding.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::icon::Icon;

/// Gap inserted after every icon, including the last one. The trailing gap
/// is part of the canvas width; downstream consumers expect it, so it must
/// not be "fixed" to an n-1 formula.
pub const PADDING: u32 = 2;

/// The rectangle an icon occupies in the sprite, plus the device pixel
/// ratio carried for high-density consumers (always 1 here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "pixelRatio")]
    pub pixel_ratio: u32,
}

/// Canvas dimensions plus the per-icon placement map.
#[derive(Debug, Clone)]
pub struct SpriteLayout {
    pub width: u32,
    pub height: u32,
    pub placements: BTreeMap<String, Placement>,
}

/// Place each icon left to right in the order given. Zero icons yields a
/// fixed 1x1 layout with an empty placement map.
pub fn compute(icons: &[Icon]) -> SpriteLayout {
    if icons.is_empty() {
        return SpriteLayout {
            width: 1,
            height: 1,
            placements: BTreeMap::new(),
        };
    }

    let mut placements = BTreeMap::new();
    let mut x = 0u32;
    let mut height = 0u32;
    for icon in icons {
        let (w, h) = icon.dimensions();
        placements.insert(
            icon.name.clone(),
            Placement {
                x,
                y: 0,
                width: w,
                height: h,
                pixel_ratio: 1,
            },
        );
        x += w + PADDING;
        height = height.max(h);
    }

    // x now includes the trailing padding; that is the canvas width.
    debug!("layout: {}x{} canvas for {} icons", x, height, icons.len());
    SpriteLayout {
        width: x,
        height,
        placements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn icon(name: &str, w: u32, h: u32) -> Icon {
        Icon {
            name: name.to_string(),
            image: RgbaImage::new(w, h),
        }
    }

    #[test]
    fn empty_input_yields_unit_canvas() {
        let layout = compute(&[]);
        assert_eq!((layout.width, layout.height), (1, 1));
        assert!(layout.placements.is_empty());
    }

    #[test]
    fn width_includes_trailing_padding() {
        let layout = compute(&[icon("a", 4, 6), icon("b", 3, 4)]);
        assert_eq!(layout.width, (4 + PADDING) + (3 + PADDING));
        assert_eq!(layout.height, 6);
    }

    #[test]
    fn offsets_accumulate_in_input_order() {
        let icons = [icon("a", 4, 6), icon("b", 3, 4), icon("c", 5, 2)];
        let layout = compute(&icons);
        assert_eq!(layout.placements["a"].x, 0);
        assert_eq!(layout.placements["b"].x, 6);
        assert_eq!(layout.placements["c"].x, 11);
        for p in layout.placements.values() {
            assert_eq!(p.y, 0);
            assert_eq!(p.pixel_ratio, 1);
        }
    }

    #[test]
    fn placements_carry_icon_dimensions() {
        let layout = compute(&[icon("solo", 7, 3)]);
        let p = layout.placements["solo"];
        assert_eq!((p.width, p.height), (7, 3));
        assert_eq!(layout.width, 7 + PADDING);
        assert_eq!(layout.height, 3);
    }
}
