//! Disc rasterization onto RGBA canvases
//!
//! Discs are aliased: every pixel is sampled once at its centre and is either
//! fill, outline or untouched. Nothing here depends on time or randomness, so
//! the same icon always comes out pixel for pixel identical.

use crate::icon_gen::{BoundingBox, IconSpec};
use anyhow::{anyhow, Result};
use image::{Rgba, RgbaImage};
use log::debug;
use std::str::FromStr;

/// Scope blue, the body of the icon
const SCOPE_BLUE: &str = "#61afef";
/// Scope ink, the dark outline and lens tint
const SCOPE_INK: &str = "#282c34";

const OPAQUE: u8 = 255;
const LENS_ALPHA: u8 = 128;

/// Fill and outline of a single disc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscStyle {
    pub fill: Rgba<u8>,
    pub outline: Rgba<u8>,
    /// Outline stroke width in pixels, measured inwards from the disc edge
    pub width: u32,
}

/// The two discs that make up the scope icon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub outer: DiscStyle,
    pub inner: DiscStyle,
}

impl Palette {
    /// Blue body with a dark 2px rim, and a translucent dark lens with a 1px blue rim.
    pub fn scope() -> Result<Self> {
        let blue = css_rgba(SCOPE_BLUE, OPAQUE)?;
        let ink = css_rgba(SCOPE_INK, OPAQUE)?;

        Ok(Self {
            outer: DiscStyle {
                fill: blue,
                outline: ink,
                width: 2,
            },
            inner: DiscStyle {
                fill: css_rgba(SCOPE_INK, LENS_ALPHA)?,
                outline: blue,
                width: 1,
            },
        })
    }
}

/// Parse a CSS colour and attach an explicit alpha
pub fn css_rgba(css: &str, alpha: u8) -> Result<Rgba<u8>> {
    let color = css_color::Srgb::from_str(css).map_err(|_| anyhow!("Invalid CSS color: {css}"))?;

    Ok(Rgba([
        (color.red * 255.).round() as u8,
        (color.green * 255.).round() as u8,
        (color.blue * 255.).round() as u8,
        alpha,
    ]))
}

/// Render the full icon for `spec`: transparent canvas, outer disc, then the lens on top.
pub fn render_icon(spec: &IconSpec, palette: &Palette) -> RgbaImage {
    let mut canvas = RgbaImage::new(spec.size, spec.size);

    let outer = spec.outer_box();
    let inner = spec.inner_box();
    debug!(
        "{}: {}px canvas, outer box {:?}, inner box {:?}",
        spec.filename, spec.size, outer, inner
    );

    draw_disc(&mut canvas, outer, &palette.outer);
    draw_disc(&mut canvas, inner, &palette.inner);

    canvas
}

/// Draw a disc inscribed in `bbox`, including its right and bottom edges.
///
/// Touched pixels are replaced outright, alpha included, so a translucent
/// fill stays translucent on top of whatever was there before.
pub fn draw_disc(canvas: &mut RgbaImage, bbox: BoundingBox, style: &DiscStyle) {
    if canvas.width() == 0 || canvas.height() == 0 {
        return;
    }

    let center_x = (bbox.x0 + bbox.x1 + 1) as f32 / 2.0;
    let center_y = (bbox.y0 + bbox.y1 + 1) as f32 / 2.0;
    let radius = (bbox.x1 - bbox.x0 + 1).min(bbox.y1 - bbox.y0 + 1) as f32 / 2.0;
    let fill_radius = radius - style.width as f32;

    let x_last = bbox.x1.min(canvas.width() - 1);
    let y_last = bbox.y1.min(canvas.height() - 1);

    for y in bbox.y0..=y_last {
        for x in bbox.x0..=x_last {
            let dx = x as f32 + 0.5 - center_x;
            let dy = y as f32 + 0.5 - center_y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance <= fill_radius {
                canvas.put_pixel(x, y, style.fill);
            } else if distance <= radius {
                canvas.put_pixel(x, y, style.outline);
            }
        }
    }
}
