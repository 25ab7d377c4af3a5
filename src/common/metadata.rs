use std::fmt::{Display, Error, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use super::error::{ParseError, ParseResult};

// Global constants
//------------------------------------------------------------------------------

/// Raster units (pixels) per QR module.
pub const MODULE_SCALE: u32 = 10;

/// Edge length of the on-screen preview, in pixels.
pub const PREVIEW_SIZE: u32 = 170;

pub const DEFAULT_FILE_NAME: &str = "qrcode.png";

// Border width
//------------------------------------------------------------------------------

/// Quiet zone around the symbol, in modules.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct BorderWidth(u8);

impl BorderWidth {
    pub const ALL: [BorderWidth; 7] = [
        BorderWidth(1),
        BorderWidth(2),
        BorderWidth(3),
        BorderWidth(4),
        BorderWidth(5),
        BorderWidth(6),
        BorderWidth(8),
    ];

    pub fn new(modules: u8) -> ParseResult<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.0 == modules)
            .ok_or(ParseError::UnsupportedBorder(modules))
    }

    pub const fn modules(self) -> u32 {
        self.0 as u32
    }
}

impl Default for BorderWidth {
    fn default() -> Self {
        Self(4)
    }
}

impl Deref for BorderWidth {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<u8> for BorderWidth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for BorderWidth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let modules = s.parse::<u8>().map_err(|_| ParseError::InvalidNumber(s.to_string()))?;
        Self::new(modules)
    }
}

impl Display for BorderWidth {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.0)
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}
