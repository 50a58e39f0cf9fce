use crate::manifest_json::ManifestIcons;
use anyhow::{ensure, Result};
use log::debug;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

#[cfg(feature = "render")]
use crate::draw::{self, Palette};
#[cfg(feature = "render")]
use anyhow::Context;
#[cfg(feature = "render")]
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder,
};
#[cfg(feature = "render")]
use std::{fs::File, io::BufWriter};

/// The icons the extension ships with, in generation order
pub const ICON_SET: [(u32, &str); 3] = [
    (16, "icon16.png"),
    (48, "icon48.png"),
    (128, "icon128.png"),
];

/// Pixel box `[x0, y0, x1, y1]` a disc is inscribed in, both corners included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    /// Square box inset by `margin` on every side of a `size` canvas
    fn inset(size: u32, margin: u32) -> Self {
        Self {
            x0: margin,
            y0: margin,
            x1: size - margin,
            y1: size - margin,
        }
    }

    /// True when `other` lies strictly inside `self`
    pub fn strictly_contains(&self, other: &BoundingBox) -> bool {
        self.x0 < other.x0 && self.y0 < other.y0 && other.x1 < self.x1 && other.y1 < self.y1
    }
}

/// One square icon to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    /// Edge length of the canvas in pixels
    pub size: u32,
    /// File name inside the output directory
    pub filename: String,
}

impl IconSpec {
    pub fn new(size: u32, filename: impl Into<String>) -> Result<Self> {
        let filename = filename.into();
        ensure!(size > 0, "Icon size must be positive");
        ensure!(!filename.is_empty(), "Icon filename must not be empty");

        let spec = Self { size, filename };
        let outer = spec.outer_margin();
        let inner = spec.inner_margin();
        ensure!(
            outer < size - outer,
            "{}px is too small for the outer disc (margin {outer})",
            size
        );
        ensure!(
            inner > outer,
            "{}px leaves no room for the lens (inner margin {inner}, outer margin {outer})",
            size
        );

        Ok(spec)
    }

    pub fn outer_margin(&self) -> u32 {
        self.size / 8
    }

    pub fn inner_margin(&self) -> u32 {
        self.size / 3
    }

    pub fn outer_box(&self) -> BoundingBox {
        BoundingBox::inset(self.size, self.outer_margin())
    }

    pub fn inner_box(&self) -> BoundingBox {
        BoundingBox::inset(self.size, self.inner_margin())
    }
}

/// The fixed 16/48/128 icon set
pub fn icon_set() -> Result<Vec<IconSpec>> {
    ICON_SET
        .iter()
        .map(|&(size, filename)| IconSpec::new(size, filename))
        .collect()
}

/// Something that can turn an [`IconSpec`] into a PNG file
pub trait Rasterizer {
    /// Render `spec` and write it to `out_dir/<filename>`, returning the written path.
    fn render_icon(&self, spec: &IconSpec, out_dir: &Path) -> Result<PathBuf>;
}

/// Draws with the `image` crate and encodes deterministic PNGs
#[cfg(feature = "render")]
#[derive(Debug, Clone)]
pub struct PngRasterizer {
    palette: Palette,
}

#[cfg(feature = "render")]
impl PngRasterizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            palette: Palette::scope()?,
        })
    }
}

#[cfg(feature = "render")]
impl Rasterizer for PngRasterizer {
    fn render_icon(&self, spec: &IconSpec, out_dir: &Path) -> Result<PathBuf> {
        let canvas = draw::render_icon(spec, &self.palette);

        let path = out_dir.join(&spec.filename);
        let file =
            File::create(&path).with_context(|| format!("Can't create {}", path.display()))?;
        let mut out_file = BufWriter::new(file);
        write_png(canvas.as_raw(), &mut out_file, spec.size)
            .with_context(|| format!("Failed to encode {}", path.display()))?;
        out_file
            .flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;

        debug!("wrote {} ({}x{})", path.display(), spec.size, spec.size);
        Ok(path)
    }
}

// Encode image data as PNG with compression
#[cfg(feature = "render")]
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}

/// The drawing capability of this build, if it has one
#[cfg(feature = "render")]
pub fn default_rasterizer() -> Result<Option<Box<dyn Rasterizer>>> {
    Ok(Some(Box::new(PngRasterizer::new()?)))
}

/// The drawing capability of this build, if it has one
#[cfg(not(feature = "render"))]
pub fn default_rasterizer() -> Result<Option<Box<dyn Rasterizer>>> {
    Ok(None)
}

/// What a generation run ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every icon was written, in order
    Created(Vec<PathBuf>),
    /// No drawing capability; manual instructions were printed instead
    Instructions,
}

/// Render the whole icon set into `out_dir`, reporting progress to `out`.
///
/// `out_dir` must already exist. The first failure aborts the run; icons
/// written before it are left in place.
pub fn generate_icons<W: Write>(
    out_dir: &Path,
    rasterizer: Option<&dyn Rasterizer>,
    out: &mut W,
) -> Result<Outcome> {
    let specs = icon_set()?;

    let Some(rasterizer) = rasterizer else {
        debug!("no drawing capability, falling back to manual instructions");
        write_manual_instructions(out, &specs)?;
        return Ok(Outcome::Instructions);
    };

    let dir_name = display_dir(out_dir);
    let mut created = Vec::with_capacity(specs.len());
    for spec in &specs {
        let path = rasterizer.render_icon(spec, out_dir)?;
        writeln!(out, "✓ Created {}/{}", dir_name, spec.filename)?;
        created.push(path);
    }

    let manifest = ManifestIcons::from_specs(&dir_name, &specs);
    writeln!(out)?;
    writeln!(out, "All icons created successfully!")?;
    writeln!(out, "Reference them from manifest.json:")?;
    writeln!(out, "\"icons\": {}", manifest.to_json()?)?;
    writeln!(out, "You can now load the extension in Chrome.")?;

    Ok(Outcome::Created(created))
}

/// Tell the user how to make the icons by hand
pub fn write_manual_instructions<W: Write>(out: &mut W, specs: &[IconSpec]) -> Result<()> {
    let sizes = specs
        .iter()
        .map(|spec| format!("{0}x{0}", spec.size))
        .collect::<Vec<_>>()
        .join(", ");
    let names = specs
        .iter()
        .map(|spec| spec.filename.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(
        out,
        "Image rendering is not available in this build. Creating the icons manually:"
    )?;
    writeln!(out)?;
    writeln!(out, "1. Create {sizes} pixel PNG images")?;
    writeln!(out, "2. Save them as {names} in the icons/ folder")?;
    writeln!(out, "3. You can use any image editor or online tool like:")?;
    writeln!(out, "   - https://favicon.io/favicon-generator/")?;
    writeln!(out, "   - https://www.favicon-generator.org/")?;
    writeln!(out, "   - Or use GIMP/Photoshop/etc.")?;
    Ok(())
}

fn display_dir(out_dir: &Path) -> String {
    out_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| out_dir.display().to_string())
}
