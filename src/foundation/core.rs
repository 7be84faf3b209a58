use crate::foundation::error::{CroquisError, CroquisResult};
use serde::{Deserialize, Serialize};

pub use kurbo::{Affine, BezPath};

/// Straight-alpha opaque RGB color, the unit of all palette work.
///
/// Serializes to and from `"#rrggbb"` hex strings, which is how profile colors
/// (skin tone, hair color, eye color) arrive at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> CroquisResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> CroquisResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| CroquisError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        // Length is in bytes, so non-ASCII input must be rejected before
        // slicing into digit pairs.
        if s.len() != 6 || !s.is_ascii() {
            return Err(CroquisError::validation(
                "hex color must be #RRGGBB (case-insensitive)",
            ));
        }
        Ok(Self {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        })
    }

    /// Format as a lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
