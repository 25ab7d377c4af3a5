use std::fmt::{Display, Error, Formatter};
use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    artifact::QrArtifact,
    builder::RenderRequest,
    common::{
        error::{ParseResult, RenderResult, SaveResult},
        metadata::BorderWidth,
        palette::NamedColor,
    },
    encode::{QrcodeEncoder, SymbolEncoder},
    pipeline::{self, RenderPipeline},
    render::{PngRasterizer, Rasterizer},
};

// Notice
//------------------------------------------------------------------------------

/// Short status text for a toast or status line. Errors carry their own text via `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Generated { foreground: NamedColor, background: NamedColor },
    Saved(PathBuf),
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Self::Generated { foreground, background } => {
                write!(f, "QR generated: {foreground} on {background}")
            }
            Self::Saved(_) => f.write_str("QR Code saved!"),
        }
    }
}

// Save target
//------------------------------------------------------------------------------

/// Result of a save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Chosen(PathBuf),
    Cancelled,
}

impl From<Option<PathBuf>> for SaveTarget {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::Chosen(p),
            None => Self::Cancelled,
        }
    }
}

// Form state
//------------------------------------------------------------------------------

/// Raw values of the input form, as typed or picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub url: String,
    pub background: String,
    pub code_color: String,
    pub border: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            url: String::new(),
            background: NamedColor::White.name().to_string(),
            code_color: NamedColor::Black.name().to_string(),
            border: BorderWidth::default().to_string(),
        }
    }
}

impl FormState {
    pub fn to_request(&self) -> ParseResult<RenderRequest> {
        let mut request = RenderRequest::new(self.url.as_str());
        request
            .foreground(self.code_color.parse()?)
            .background(self.background.parse()?)
            .border(self.border.parse()?);
        Ok(request)
    }
}

// Session
//------------------------------------------------------------------------------

/// Owns the render pipeline and the one artifact that is currently on display.
#[derive(Debug, Clone)]
pub struct Session<E = QrcodeEncoder, R = PngRasterizer> {
    pipeline: RenderPipeline<E, R>,
    artifact: Option<QrArtifact>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RenderPipeline::default())
    }
}

impl<E: SymbolEncoder, R: Rasterizer> Session<E, R> {
    pub fn new(pipeline: RenderPipeline<E, R>) -> Self {
        Self { pipeline, artifact: None }
    }

    pub fn artifact(&self) -> Option<&QrArtifact> {
        self.artifact.as_ref()
    }

    /// Renders `request` and, on success, replaces the held artifact. A failed render leaves
    /// the previous artifact in place.
    pub fn generate(&mut self, request: &RenderRequest) -> RenderResult<Notice> {
        let artifact = self.pipeline.render(request)?;
        if self.artifact.is_some() {
            debug!("Replacing previously held artifact");
        }
        self.artifact = Some(artifact);
        Ok(Notice::Generated { foreground: request.fg(), background: request.bg() })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SaveResult<Notice> {
        let path = path.as_ref();
        pipeline::save(self.artifact(), path)?;
        Ok(Notice::Saved(path.to_path_buf()))
    }

    /// Saves to the dialog's choice. `None` when the dialog was cancelled.
    pub fn save_to(&self, target: SaveTarget) -> Option<SaveResult<Notice>> {
        match target {
            SaveTarget::Chosen(path) => Some(self.save(path)),
            SaveTarget::Cancelled => {
                debug!("Save dialog cancelled");
                None
            }
        }
    }

    pub fn clear(&mut self) -> Option<QrArtifact> {
        self.artifact.take()
    }
}

#[cfg(test)]
mod session_tests {
    use super::{FormState, Notice, SaveTarget, Session};
    use crate::{
        builder::RenderRequest,
        common::{
            error::{ParseError, RenderError, SaveError},
            metadata::BorderWidth,
            palette::NamedColor,
        },
    };

    #[test]
    fn test_form_defaults() {
        let form = FormState::default();
        assert_eq!(form.background, "white");
        assert_eq!(form.code_color, "black");
        assert_eq!(form.border, "4");

        let request = form.to_request().unwrap();
        assert_eq!(request.fg(), NamedColor::Black);
        assert_eq!(request.bg(), NamedColor::White);
        assert_eq!(request.border_width(), BorderWidth::default());
        assert_eq!(request.payload(), "");
    }

    #[test]
    fn test_form_parse_errors() {
        let form = FormState { code_color: "beige".into(), ..FormState::default() };
        assert_eq!(form.to_request(), Err(ParseError::UnknownColor("beige".into())));

        let form = FormState { border: "7".into(), ..FormState::default() };
        assert_eq!(form.to_request(), Err(ParseError::UnsupportedBorder(7)));
    }

    #[test]
    fn test_notice_text() {
        let notice =
            Notice::Generated { foreground: NamedColor::Red, background: NamedColor::Lime };
        assert_eq!(notice.to_string(), "QR generated: red on lime");
        assert_eq!(Notice::Saved("a.png".into()).to_string(), "QR Code saved!");
    }

    #[test]
    fn test_failed_render_keeps_artifact() {
        let mut session = Session::default();
        session.generate(&RenderRequest::new("first")).unwrap();
        let held = session.artifact().cloned();

        let res = session.generate(
            RenderRequest::new("X").foreground(NamedColor::Red).background(NamedColor::Red),
        );
        assert_eq!(res, Err(RenderError::DuplicateColors));
        assert_eq!(session.artifact().cloned(), held);

        let res = session.generate(&RenderRequest::new(""));
        assert_eq!(res, Err(RenderError::EmptyContent));
        assert_eq!(session.artifact().cloned(), held);
    }

    #[test]
    fn test_save_before_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qrcode.png");
        let session = Session::default();
        assert_eq!(session.save(&path), Err(SaveError::NothingToSave));
        assert!(!path.exists());
    }

    #[test]
    fn test_cancelled_dialog_skips_save() {
        let mut session = Session::default();
        session.generate(&RenderRequest::new("X")).unwrap();
        assert_eq!(session.save_to(SaveTarget::Cancelled), None);
        assert_eq!(SaveTarget::from(None), SaveTarget::Cancelled);
    }

    #[test]
    fn test_clear() {
        let mut session = Session::default();
        session.generate(&RenderRequest::new("X")).unwrap();
        assert!(session.clear().is_some());
        assert!(session.artifact().is_none());
    }
}
