use log::debug;
use qrcode::{Color, EcLevel, QrCode};

use crate::common::{error::EncodeFailure, metadata::ECLevel};

// Symbol matrix
//------------------------------------------------------------------------------

/// Square grid of QR modules, row-major, `true` for dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl SymbolMatrix {
    pub fn from_fn(width: usize, mut is_dark: impl FnMut(usize, usize) -> bool) -> Self {
        let mut modules = Vec::with_capacity(width * width);
        for y in 0..width {
            for x in 0..width {
                modules.push(is_dark(x, y));
            }
        }
        Self { width, modules }
    }

    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, EncodeFailure> {
        let width = rows.len();
        if width == 0 {
            return Err(EncodeFailure::new("Symbol matrix is empty"));
        }
        if let Some(row) = rows.iter().find(|r| r.len() != width) {
            return Err(EncodeFailure::new(format!(
                "Symbol matrix is not square: {width} rows but a row of {} modules",
                row.len()
            )));
        }
        Ok(Self { width, modules: rows.concat() })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.width, "Module ({x}, {y}) out of bounds");
        self.modules[y * self.width + x]
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }
}

#[cfg(test)]
mod matrix_tests {
    use super::SymbolMatrix;

    #[test]
    fn test_from_fn_is_row_major() {
        let matrix = SymbolMatrix::from_fn(3, |x, y| x == 2 && y == 0);
        assert!(matrix.is_dark(2, 0));
        assert!(!matrix.is_dark(0, 2));
        assert_eq!(matrix.count_dark_modules(), 1);
    }

    #[test]
    fn test_from_rows() {
        let matrix = SymbolMatrix::from_rows(&[vec![true, false], vec![false, false]]).unwrap();
        assert_eq!(matrix.width(), 2);
        assert!(matrix.is_dark(0, 0));
        assert!(!matrix.is_dark(1, 0));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(SymbolMatrix::from_rows(&[vec![true, false], vec![false]]).is_err());
        assert!(SymbolMatrix::from_rows(&[]).is_err());
    }
}

// Encoder capability
//------------------------------------------------------------------------------

/// Turns a payload into a QR symbol. Implementations pick the smallest symbol that holds the
/// payload at the requested level and fail rather than truncate.
pub trait SymbolEncoder {
    fn encode(&self, payload: &[u8], ec_level: ECLevel) -> Result<SymbolMatrix, EncodeFailure>;
}

/// Encoder backed by the `qrcode` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrcodeEncoder;

impl From<ECLevel> for EcLevel {
    fn from(ec_level: ECLevel) -> Self {
        match ec_level {
            ECLevel::L => EcLevel::L,
            ECLevel::M => EcLevel::M,
            ECLevel::Q => EcLevel::Q,
            ECLevel::H => EcLevel::H,
        }
    }
}

impl SymbolEncoder for QrcodeEncoder {
    fn encode(&self, payload: &[u8], ec_level: ECLevel) -> Result<SymbolMatrix, EncodeFailure> {
        let code = QrCode::with_error_correction_level(payload, ec_level.into())?;
        let width = code.width();
        debug!("Encoded {} bytes as {:?} ({width}x{width} modules)", payload.len(), code.version());

        let modules = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
        Ok(SymbolMatrix { width, modules })
    }
}

#[cfg(test)]
mod encoder_tests {
    use test_case::test_case;

    use super::{QrcodeEncoder, SymbolEncoder};
    use crate::common::metadata::ECLevel;

    #[test_case("X", 21; "version 1")]
    #[test_case("https://example.com", 25; "version 2")]
    #[test_case(&"a".repeat(100), 37; "version 5")]
    fn test_smallest_version_fits(payload: &str, width: usize) {
        let matrix = QrcodeEncoder.encode(payload.as_bytes(), ECLevel::L).unwrap();
        assert_eq!(matrix.width(), width);
    }

    #[test]
    fn test_finder_pattern_corner() {
        let matrix = QrcodeEncoder.encode(b"X", ECLevel::L).unwrap();
        // Outer ring of the top-left finder is dark, the ring inside it is light
        for i in 0..7 {
            assert!(matrix.is_dark(i, 0));
            assert!(matrix.is_dark(0, i));
        }
        assert!(!matrix.is_dark(1, 1));
        assert!(matrix.is_dark(3, 3));
    }

    #[test]
    fn test_payload_too_long() {
        let payload = "a".repeat(3000);
        assert!(QrcodeEncoder.encode(payload.as_bytes(), ECLevel::L).is_err());
    }
}
