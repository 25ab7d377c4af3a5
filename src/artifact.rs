use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{
    error::{ImageError, ParameterError, ParameterErrorKind},
    imageops::FilterType,
    ImageResult, RgbImage,
};

use crate::{
    common::{metadata::BorderWidth, palette::NamedColor},
    encode::SymbolMatrix,
    render::{render_as_string, Layout},
};

/// A rendered QR code: PNG bytes plus the parameters they were rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrArtifact {
    png: Vec<u8>,
    module_count: usize,
    module_scale: u32,
    border: BorderWidth,
    foreground: NamedColor,
    background: NamedColor,
}

impl QrArtifact {
    pub(crate) fn new(
        png: Vec<u8>,
        module_count: usize,
        layout: Layout,
        foreground: NamedColor,
        background: NamedColor,
    ) -> Self {
        Self {
            png,
            module_count,
            module_scale: layout.module_scale,
            border: layout.border,
            foreground,
            background,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.png
    }

    pub fn len(&self) -> usize {
        self.png.len()
    }

    pub fn is_empty(&self) -> bool {
        self.png.is_empty()
    }

    /// Width of the symbol in modules, quiet zone excluded.
    pub fn module_count(&self) -> usize {
        self.module_count
    }

    /// Pixels per module the image was requested at.
    pub fn module_scale(&self) -> u32 {
        self.module_scale
    }

    pub fn border(&self) -> BorderWidth {
        self.border
    }

    pub fn foreground(&self) -> NamedColor {
        self.foreground
    }

    pub fn background(&self) -> NamedColor {
        self.background
    }

    pub fn decode(&self) -> ImageResult<RgbImage> {
        Ok(image::load_from_memory(&self.png)?.to_rgb8())
    }

    pub fn dimensions(&self) -> ImageResult<(u32, u32)> {
        let img = image::load_from_memory(&self.png)?;
        Ok((img.width(), img.height()))
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.png)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.to_base64())
    }

    /// Thumbnail fitting in a `size` x `size` box, for the preview surface.
    pub fn preview(&self, size: u32) -> ImageResult<RgbImage> {
        let img = image::load_from_memory(&self.png)?;
        Ok(img.resize(size, size, FilterType::Nearest).to_rgb8())
    }

    /// Reads the module grid back out of the encoded image. Fails when the image does not
    /// have the geometry it was rendered for.
    pub fn symbol(&self) -> ImageResult<SymbolMatrix> {
        let img = self.decode()?;
        let scale = self.module_scale;
        let layout = Layout { module_scale: scale, border: self.border };
        let expected = layout.canvas_size(self.module_count);
        if scale == 0 || img.dimensions() != (expected, expected) {
            return Err(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )));
        }

        let qz_sz = layout.quiet_zone_px();
        let dark = self.foreground.pixel();
        Ok(SymbolMatrix::from_fn(self.module_count, |x, y| {
            let px = qz_sz + x as u32 * scale + scale / 2;
            let py = qz_sz + y as u32 * scale + scale / 2;
            *img.get_pixel(px, py) == dark
        }))
    }

    pub fn to_text(&self) -> ImageResult<String> {
        Ok(render_as_string(&self.symbol()?, self.border))
    }
}
