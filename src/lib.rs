//! # qrstamp
//!
//! Turn a URL (or any text) into a colored QR code PNG, preview it and save it to disk.
//!
//! ## Features
//!
//! - **Render pipeline**: Validate the request, encode the payload and rasterize it into PNG bytes
//! - **Named palette**: 20 named colors for the code and the background
//! - **Single-slot session**: The last successful render is held for preview and export
//! - **Pluggable capabilities**: Encoder and rasterizer are traits and can be swapped or stubbed
//!
//! ## Quick Start
//!
//! ### Render a QR code
//!
//! ```rust
//! use qrstamp::{NamedColor, RenderPipeline, RenderRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = RenderPipeline::default();
//! let artifact = pipeline.render(
//!     RenderRequest::new("https://example.com")
//!         .foreground(NamedColor::Navy)    // Code color - defaults to black
//!         .background(NamedColor::White),  // Background - defaults to white
//! )?;
//!
//! let (width, height) = artifact.dimensions()?;
//! assert_eq!(width, height);
//! # Ok(())
//! # }
//! ```
//!
//! ### Keep the latest render in a session and save it
//!
//! ```rust,no_run
//! use qrstamp::{BorderWidth, RenderRequest, Session};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::default();
//!
//! let mut request = RenderRequest::new("https://example.com");
//! request.border(BorderWidth::new(2)?);
//!
//! let notice = session.generate(&request)?;
//! println!("{notice}");  // QR generated: black on white
//!
//! let notice = session.save("qrcode.png")?;
//! println!("{notice}");  // QR Code saved!
//! # Ok(())
//! # }
//! ```
//!
//! ## Output geometry
//!
//! Every module is drawn as a 10x10 pixel square and the symbol is surrounded by a quiet
//! zone of `border` modules, so a symbol of `n` modules yields a `(n + 2 * border) * 10`
//! pixel square image. The error correction level is fixed at **L** (~7%) and the smallest
//! QR version that holds the payload is chosen automatically.

pub mod artifact;
pub mod builder;
pub(crate) mod common;
pub mod encode;
pub mod pipeline;
pub mod render;
pub mod session;

pub use artifact::QrArtifact;
pub use builder::RenderRequest;
pub use common::error::{
    EncodeFailure, ParseError, ParseResult, RenderError, RenderResult, SaveError, SaveResult,
};
pub use common::metadata::{BorderWidth, ECLevel, DEFAULT_FILE_NAME, MODULE_SCALE, PREVIEW_SIZE};
pub use common::palette::NamedColor;
pub use encode::{QrcodeEncoder, SymbolEncoder, SymbolMatrix};
pub use pipeline::{save, RenderPipeline};
pub use render::{render_as_string, Layout, PngRasterizer, Rasterizer};
pub use session::{FormState, Notice, SaveTarget, Session};
