use thiserror::Error;

// Render error
//------------------------------------------------------------------------------

/// Reasons a render request is rejected. The `Display` text is the message shown to the user.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RenderError {
    #[error("Please enter a URL")]
    EmptyContent,

    #[error("Code color and background color must be different!")]
    DuplicateColors,

    #[error("Error: {0}")]
    EncodingError(String),
}

impl From<EncodeFailure> for RenderError {
    fn from(err: EncodeFailure) -> Self {
        Self::EncodingError(err.0)
    }
}

pub type RenderResult<T> = Result<T, RenderError>;

// Save error
//------------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SaveError {
    #[error("Please generate a QR code first")]
    NothingToSave,

    #[error("Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

pub type SaveResult<T> = Result<T, SaveError>;

// Capability failure
//------------------------------------------------------------------------------

/// Diagnostic raised by an encoder or rasterizer.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("{0}")]
pub struct EncodeFailure(pub String);

impl EncodeFailure {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<image::ImageError> for EncodeFailure {
    fn from(err: image::ImageError) -> Self {
        Self(err.to_string())
    }
}

impl From<qrcode::types::QrError> for EncodeFailure {
    fn from(err: qrcode::types::QrError) -> Self {
        Self(err.to_string())
    }
}

// Input parsing
//------------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Unsupported border width: {0} (expected one of 1, 2, 3, 4, 5, 6, 8)")]
    UnsupportedBorder(u8),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

pub type ParseResult<T> = Result<T, ParseError>;
