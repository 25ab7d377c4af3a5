use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use log::debug;

use crate::{
    common::{
        error::EncodeFailure,
        metadata::{BorderWidth, MODULE_SCALE},
    },
    encode::SymbolMatrix,
};

// Layout
//------------------------------------------------------------------------------

/// Raster geometry: pixels per module and quiet zone in modules.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Layout {
    pub module_scale: u32,
    pub border: BorderWidth,
}

impl Layout {
    pub fn new(border: BorderWidth) -> Self {
        Self { module_scale: MODULE_SCALE, border }
    }

    pub fn quiet_zone_px(&self) -> u32 {
        self.border.modules() * self.module_scale
    }

    pub fn canvas_size(&self, symbol_width: usize) -> u32 {
        (symbol_width as u32 + 2 * self.border.modules()) * self.module_scale
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(BorderWidth::default())
    }
}

// Rasterizer capability
//------------------------------------------------------------------------------

/// Paints a symbol and serializes it to encoded image bytes.
pub trait Rasterizer {
    fn rasterize(
        &self,
        matrix: &SymbolMatrix,
        layout: Layout,
        fg: Rgb<u8>,
        bg: Rgb<u8>,
    ) -> Result<Vec<u8>, EncodeFailure>;
}

/// Rasterizer producing PNG bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngRasterizer;

impl PngRasterizer {
    pub fn paint(matrix: &SymbolMatrix, layout: Layout, fg: Rgb<u8>, bg: Rgb<u8>) -> RgbImage {
        let total_sz = layout.canvas_size(matrix.width());
        let qz_sz = layout.quiet_zone_px() as i32;
        let module_sz = layout.module_scale;

        let mut canvas = RgbImage::from_pixel(total_sz, total_sz, bg);
        for r in 0..matrix.width() {
            for c in 0..matrix.width() {
                if !matrix.is_dark(c, r) {
                    continue;
                }
                let x = qz_sz + (c as u32 * module_sz) as i32;
                let y = qz_sz + (r as u32 * module_sz) as i32;
                draw_filled_rect_mut(&mut canvas, Rect::at(x, y).of_size(module_sz, module_sz), fg);
            }
        }

        canvas
    }
}

impl Rasterizer for PngRasterizer {
    fn rasterize(
        &self,
        matrix: &SymbolMatrix,
        layout: Layout,
        fg: Rgb<u8>,
        bg: Rgb<u8>,
    ) -> Result<Vec<u8>, EncodeFailure> {
        if layout.module_scale == 0 {
            return Err(EncodeFailure::new("Module scale must be at least 1"));
        }

        let canvas = Self::paint(matrix, layout, fg, bg);
        debug!("Painted {}x{} canvas", canvas.width(), canvas.height());

        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(canvas).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Text rendering for terminals: one character pair per module, light modules drawn solid.
pub fn render_as_string(matrix: &SymbolMatrix, border: BorderWidth) -> String {
    let qz_sz = border.modules() as usize;
    let total_sz = matrix.width() + 2 * qz_sz;

    let mut canvas = String::new();
    for i in 0..total_sz {
        for j in 0..total_sz {
            let in_symbol = (qz_sz..qz_sz + matrix.width()).contains(&i)
                && (qz_sz..qz_sz + matrix.width()).contains(&j);
            let dark = in_symbol && matrix.is_dark(j - qz_sz, i - qz_sz);
            canvas.push_str(if dark { "  " } else { "██" });
        }
        canvas.push('\n');
    }

    canvas
}
