use crate::foundation::core::Rgb8;

/// Percentage shift used for shadow tones derived from a base color.
pub const SHADOW_SHIFT: f64 = -30.0;

/// Percentage shift used for highlight tones.
pub const HIGHLIGHT_SHIFT: f64 = 20.0;

/// Lighten (positive percent) or darken (negative) a color.
///
/// Each channel moves by `round(2.55 * percent)` and clamps to the byte
/// range, so shading pure black or white is a no-op in that direction.
pub fn shade(color: Rgb8, percent: f64) -> Rgb8 {
    let amt = (2.55 * percent).round() as i32;
    let ch = |c: u8| (i32::from(c) + amt).clamp(0, 255) as u8;
    Rgb8::new(ch(color.r), ch(color.g), ch(color.b))
}

/// The three skin tones the figure is painted with, derived once per render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkinPalette {
    pub base: Rgb8,
    pub shadow: Rgb8,
    pub highlight: Rgb8,
}

impl SkinPalette {
    pub fn derive(base: Rgb8) -> Self {
        Self {
            base,
            shadow: shade(base, SHADOW_SHIFT),
            highlight: shade(base, HIGHLIGHT_SHIFT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_moves_channels_symmetrically() {
        let c = Rgb8::new(100, 150, 200);
        assert_eq!(shade(c, 10.0), Rgb8::new(126, 176, 226));
        assert_eq!(shade(c, -10.0), Rgb8::new(74, 124, 174));
    }

    #[test]
    fn shade_clamps_at_byte_bounds() {
        assert_eq!(shade(Rgb8::new(250, 0, 128), 20.0), Rgb8::new(255, 51, 179));
        assert_eq!(shade(Rgb8::new(10, 255, 128), -20.0), Rgb8::new(0, 204, 77));
    }

    #[test]
    fn palette_shadow_is_darker_highlight_lighter() {
        let p = SkinPalette::derive(Rgb8::new(0xE3, 0xB8, 0x96));
        assert!(p.shadow.r < p.base.r);
        assert!(p.highlight.r > p.base.r);
    }
}
