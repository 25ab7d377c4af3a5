use std::{fs, path::Path};

use log::{debug, info, warn};

use crate::{
    artifact::QrArtifact,
    builder::RenderRequest,
    common::{
        error::{RenderResult, SaveError, SaveResult},
        metadata::ECLevel,
    },
    encode::{QrcodeEncoder, SymbolEncoder},
    render::{Layout, PngRasterizer, Rasterizer},
};

/// Validates form input and turns it into a PNG artifact using the injected encoder and
/// rasterizer. Holds no state of its own.
#[derive(Debug, Clone)]
pub struct RenderPipeline<E = QrcodeEncoder, R = PngRasterizer> {
    encoder: E,
    rasterizer: R,
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(QrcodeEncoder, PngRasterizer)
    }
}

impl<E: SymbolEncoder, R: Rasterizer> RenderPipeline<E, R> {
    pub fn new(encoder: E, rasterizer: R) -> Self {
        Self { encoder, rasterizer }
    }

    pub fn render(&self, request: &RenderRequest) -> RenderResult<QrArtifact> {
        debug!("Rendering QR {}...", request.metadata());
        if let Err(e) = request.validate() {
            warn!("Rejected render request: {e}");
            return Err(e);
        }

        let fg = request.fg().pixel();
        let bg = request.bg().pixel();
        let layout = Layout::new(request.border_width());

        debug!("Encoding {} bytes...", request.payload().len());
        let matrix = self.encoder.encode(request.payload().as_bytes(), ECLevel::L).map_err(|e| {
            warn!("Encoder rejected payload: {e}");
            e
        })?;

        debug!("Rasterizing {0}x{0} symbol...", matrix.width());
        let png = self.rasterizer.rasterize(&matrix, layout, fg, bg).map_err(|e| {
            warn!("Rasterizer failed: {e}");
            e
        })?;

        info!(
            "QR generated: {} on {}, {} modules, {} bytes",
            request.fg(),
            request.bg(),
            matrix.width(),
            png.len()
        );
        Ok(QrArtifact::new(png, matrix.width(), layout, request.fg(), request.bg()))
    }
}

/// Writes the held artifact verbatim to `path`. Performs no I/O when nothing is held.
pub fn save(artifact: Option<&QrArtifact>, path: impl AsRef<Path>) -> SaveResult<()> {
    let path = path.as_ref();
    let Some(artifact) = artifact else {
        warn!("Nothing to save to {}", path.display());
        return Err(SaveError::NothingToSave);
    };

    fs::write(path, artifact.as_bytes()).map_err(|e| {
        warn!("Failed to write {}: {e}", path.display());
        SaveError::from(e)
    })?;

    info!("Saved {} bytes to {}", artifact.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod pipeline_tests {
    use std::cell::Cell;

    use image::Rgb;

    use super::{save, RenderPipeline};
    use crate::{
        builder::RenderRequest,
        common::{
            error::{EncodeFailure, RenderError, SaveError},
            metadata::{BorderWidth, ECLevel},
            palette::NamedColor,
        },
        encode::{QrcodeEncoder, SymbolEncoder, SymbolMatrix},
        render::{Layout, PngRasterizer, Rasterizer},
    };

    /// Fixed 21x21 checkerboard. Counts calls and records the level it was asked for.
    #[derive(Default)]
    struct StubEncoder {
        calls: Cell<usize>,
        level: Cell<Option<ECLevel>>,
    }

    impl SymbolEncoder for StubEncoder {
        fn encode(&self, _: &[u8], ec_level: ECLevel) -> Result<SymbolMatrix, EncodeFailure> {
            self.calls.set(self.calls.get() + 1);
            self.level.set(Some(ec_level));
            Ok(SymbolMatrix::from_fn(21, |x, y| (x + y) % 2 == 0))
        }
    }

    struct FailingEncoder;

    impl SymbolEncoder for FailingEncoder {
        fn encode(&self, _: &[u8], _: ECLevel) -> Result<SymbolMatrix, EncodeFailure> {
            Err(EncodeFailure::new("data too long"))
        }
    }

    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn rasterize(
            &self,
            _: &SymbolMatrix,
            _: Layout,
            _: Rgb<u8>,
            _: Rgb<u8>,
        ) -> Result<Vec<u8>, EncodeFailure> {
            Err(EncodeFailure::new("out of memory"))
        }
    }

    /// Ignores the requested scale and paints one pixel per module.
    struct OnePixelRasterizer;

    impl Rasterizer for OnePixelRasterizer {
        fn rasterize(
            &self,
            matrix: &SymbolMatrix,
            layout: Layout,
            fg: Rgb<u8>,
            bg: Rgb<u8>,
        ) -> Result<Vec<u8>, EncodeFailure> {
            let layout = Layout { module_scale: 1, ..layout };
            PngRasterizer.rasterize(matrix, layout, fg, bg)
        }
    }

    #[test]
    fn test_render_with_stub() {
        let pipeline = RenderPipeline::new(StubEncoder::default(), PngRasterizer);
        let artifact = pipeline
            .render(
                RenderRequest::new("anything")
                    .foreground(NamedColor::Maroon)
                    .border(BorderWidth::new(3).unwrap()),
            )
            .unwrap();

        assert_eq!(artifact.module_count(), 21);
        assert_eq!(artifact.dimensions().unwrap(), (270, 270));
        assert_eq!(artifact.foreground(), NamedColor::Maroon);
        assert_eq!(pipeline.encoder.level.get(), Some(ECLevel::L));
    }

    #[test]
    fn test_invalid_request_never_reaches_encoder() {
        let pipeline = RenderPipeline::new(StubEncoder::default(), PngRasterizer);

        let res = pipeline.render(&RenderRequest::new(""));
        assert_eq!(res, Err(RenderError::EmptyContent));

        let res = pipeline.render(RenderRequest::new("X").background(NamedColor::Black));
        assert_eq!(res, Err(RenderError::DuplicateColors));

        assert_eq!(pipeline.encoder.calls.get(), 0);
    }

    #[test]
    fn test_encoder_failure_is_reported() {
        let pipeline = RenderPipeline::new(FailingEncoder, PngRasterizer);
        let res = pipeline.render(&RenderRequest::new("X"));
        assert_eq!(res, Err(RenderError::EncodingError("data too long".into())));
    }

    #[test]
    fn test_rasterizer_failure_is_reported() {
        let pipeline = RenderPipeline::new(StubEncoder::default(), FailingRasterizer);
        let res = pipeline.render(&RenderRequest::new("X"));
        assert_eq!(res, Err(RenderError::EncodingError("out of memory".into())));
    }

    #[test]
    fn test_unexpected_raster_size_is_an_error() {
        let pipeline = RenderPipeline::new(QrcodeEncoder, OnePixelRasterizer);
        let artifact = pipeline.render(&RenderRequest::new("X")).unwrap();

        assert_eq!(artifact.dimensions().unwrap(), (29, 29));
        assert!(artifact.symbol().is_err());
        assert!(artifact.to_text().is_err());
    }

    #[test]
    fn test_save_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qrcode.png");
        assert_eq!(save(None, &path), Err(SaveError::NothingToSave));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_into_missing_directory() {
        let pipeline = RenderPipeline::new(StubEncoder::default(), PngRasterizer);
        let artifact = pipeline.render(&RenderRequest::new("X")).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("qrcode.png");
        assert!(matches!(save(Some(&artifact), &path), Err(SaveError::IoError(_))));
    }
}
