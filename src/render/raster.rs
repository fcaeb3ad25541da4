use std::path::Path;

use anyhow::Context;

use crate::foundation::core::Viewport;
use crate::foundation::error::{GraphError, GraphResult};
use crate::graph::render_data::RenderData;
use crate::render::svg::{SvgOptions, to_svg};

const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 image, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl Raster {
    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Write the image as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))
        .map_err(GraphError::from)
    }
}

/// Rasterize an SVG document at its intrinsic size.
pub fn rasterize_svg(svg: &str) -> GraphResult<Raster> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| GraphError::render(format!("parse svg: {e}")))?;

    let size = tree.size();
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| GraphError::render("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut data = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(Raster {
        width,
        height,
        data,
    })
}

/// Render `data` straight to pixels through the SVG exporter.
#[tracing::instrument(skip(data, opts), fields(w = opts.width_px, h = opts.height_px))]
pub fn to_raster(data: &RenderData, viewport: &Viewport, opts: &SvgOptions) -> GraphResult<Raster> {
    rasterize_svg(&to_svg(data, viewport, opts)?)
}

fn to_px(v: f32) -> GraphResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(GraphError::render("svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIM {
        return Err(GraphError::render(format!(
            "raster size too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
