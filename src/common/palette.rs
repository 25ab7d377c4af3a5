use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use image::Rgb;

use super::error::ParseError;

// Named color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum NamedColor {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Pink,
    Brown,
    Gray,
    Cyan,
    Magenta,
    Lime,
    Navy,
    Teal,
    Maroon,
    Olive,
    Silver,
    Gold,
}

impl NamedColor {
    pub const ALL: [NamedColor; 20] = [
        Self::Black,
        Self::White,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
        Self::Pink,
        Self::Brown,
        Self::Gray,
        Self::Cyan,
        Self::Magenta,
        Self::Lime,
        Self::Navy,
        Self::Teal,
        Self::Maroon,
        Self::Olive,
        Self::Silver,
        Self::Gold,
    ];

    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Black => [0x00, 0x00, 0x00],
            Self::White => [0xFF, 0xFF, 0xFF],
            Self::Red => [0xFF, 0x00, 0x00],
            Self::Green => [0x00, 0x80, 0x00],
            Self::Blue => [0x00, 0x00, 0xFF],
            Self::Yellow => [0xFF, 0xFF, 0x00],
            Self::Orange => [0xFF, 0xA5, 0x00],
            Self::Purple => [0x80, 0x00, 0x80],
            Self::Pink => [0xFF, 0xC0, 0xCB],
            Self::Brown => [0xA5, 0x2A, 0x2A],
            Self::Gray => [0x80, 0x80, 0x80],
            Self::Cyan => [0x00, 0xFF, 0xFF],
            Self::Magenta => [0xFF, 0x00, 0xFF],
            Self::Lime => [0x00, 0xFF, 0x00],
            Self::Navy => [0x00, 0x00, 0x80],
            Self::Teal => [0x00, 0x80, 0x80],
            Self::Maroon => [0x80, 0x00, 0x00],
            Self::Olive => [0x80, 0x80, 0x00],
            Self::Silver => [0xC0, 0xC0, 0xC0],
            Self::Gold => [0xFF, 0xD7, 0x00],
        }
    }

    pub fn pixel(self) -> Rgb<u8> {
        Rgb(self.rgb())
    }

    pub fn hex(self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Brown => "brown",
            Self::Gray => "gray",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Lime => "lime",
            Self::Navy => "navy",
            Self::Teal => "teal",
            Self::Maroon => "maroon",
            Self::Olive => "olive",
            Self::Silver => "silver",
            Self::Gold => "gold",
        }
    }

    /// Capitalized name, as shown in a color picker.
    pub fn label(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl Display for NamedColor {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseError::UnknownColor(key.to_string()))
    }
}
