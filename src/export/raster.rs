//! Sheet rasterization

use std::path::PathBuf;

use tiny_skia::{Color, Pixmap, Transform};

use crate::error::RasterError;
use crate::render::svg::sheet_svg;
use crate::sheet::Sheet;

/// Options passed to the rasterizer for each pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    pub transparent_background: bool,
    pub scale: f32,
}

impl RasterOptions {
    /// Transparent background at 2x
    pub fn export() -> Self {
        Self {
            transparent_background: true,
            scale: 2.0,
        }
    }
}

/// Converts the current sheet into a raster surface
pub trait Rasterizer {
    fn rasterize(&self, sheet: &Sheet, options: &RasterOptions) -> Result<Pixmap, RasterError>;
}

/// Rasterizes the sheet's SVG emission with resvg
pub struct SvgRasterizer {
    options: usvg::Options<'static>,
}

impl SvgRasterizer {
    /// Build a rasterizer backed by system fonts plus `font_dirs`
    ///
    /// Returns None when no font faces could be loaded, since card labels
    /// would render blank.
    pub fn load(font_dirs: &[PathBuf]) -> Option<Self> {
        let mut options = usvg::Options::default();

        let db = options.fontdb_mut();
        db.load_system_fonts();
        for dir in font_dirs {
            log::info!("Loading fonts from {}", dir.display());
            db.load_fonts_dir(dir);
        }

        if db.len() == 0 {
            log::warn!("No font faces found; rasterization is unavailable");
            return None;
        }
        log::debug!("Rasterizer loaded {} font faces", db.len());

        Some(Self { options })
    }
}

impl Rasterizer for SvgRasterizer {
    fn rasterize(&self, sheet: &Sheet, options: &RasterOptions) -> Result<Pixmap, RasterError> {
        let svg = sheet_svg(sheet.cards(), sheet.style(), &sheet.layout());
        let tree = usvg::Tree::from_str(&svg, &self.options)
            .map_err(|e| RasterError::Svg(e.to_string()))?;

        let size = tree.size();
        let width = (size.width() * options.scale).ceil() as u32;
        let height = (size.height() * options.scale).ceil() as u32;
        let mut pixmap = Pixmap::new(width, height).ok_or(RasterError::Surface { width, height })?;

        if !options.transparent_background {
            pixmap.fill(Color::WHITE);
        }

        resvg::render(
            &tree,
            Transform::from_scale(options.scale, options.scale),
            &mut pixmap.as_mut(),
        );

        log::debug!(
            "Rasterized {} view at {}x{}",
            sheet.view().as_str(),
            width,
            height
        );
        Ok(pixmap)
    }
}
