use serde::Deserialize;
use thiserror::Error;

/// RGBA color packed as u32 (`0xRRGGBBAA`), the same layout the GPU unpacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color(pub u32);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color {0:?}, expected #rrggbb or #rrggbbaa")]
pub struct ColorParseError(pub String);

impl Color {
    pub const BLACK: Color = Color(0x000000FF);
    pub const WHITE: Color = Color(0xFFFFFFFF);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    /// Parse `#rrggbb` (opaque) or `#rrggbbaa`.
    pub fn parse_hex(text: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(text.to_string());
        let hex = text.strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| err())?;
        match hex.len() {
            6 => Ok(Color(value << 8 | 0xFF)),
            8 => Ok(Color(value)),
            _ => Err(err()),
        }
    }

    /// Same RGB with the alpha channel replaced.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Color((self.0 & 0xFFFFFF00) | alpha as u32)
    }

    /// Channels as floats in [0, 1], in r, g, b, a order.
    pub fn to_f64_array(self) -> [f64; 4] {
        [
            ((self.0 >> 24) & 0xFF) as f64 / 255.0,
            ((self.0 >> 16) & 0xFF) as f64 / 255.0,
            ((self.0 >> 8) & 0xFF) as f64 / 255.0,
            (self.0 & 0xFF) as f64 / 255.0,
        ]
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_opaque_and_translucent_hex() {
        assert_eq!(Color::parse_hex("#2775cf"), Ok(Color(0x2775CFFF)));
        assert_eq!(Color::parse_hex("#ffffffa0"), Ok(Color(0xFFFFFFA0)));
        assert_eq!(Color::parse_hex("#FFFFFF"), Ok(Color::WHITE));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["2775cf", "#2775c", "#2775cfa", "#zz75cf", "#+775cf", ""] {
            assert!(Color::parse_hex(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::BLACK.with_alpha(0x80);
        assert_eq!(c, Color(0x00000080));
        assert_eq!(Color::rgba(0x27, 0x75, 0xCF, 0xFF), Color(0x2775CFFF));
    }

    #[test]
    fn float_channels() {
        let [r, g, b, a] = Color::rgba(255, 0, 51, 255).to_f64_array();
        assert_eq!((r, g, a), (1.0, 0.0, 1.0));
        assert!((b - 0.2).abs() < 1e-9);
    }
}
