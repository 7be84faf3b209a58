use crate::foundation::core::Rgb8;
use serde::{Deserialize, Serialize};

/// Body silhouette selector. Each variant keys one of five fixed torso paths.
///
/// Unknown values at the serde boundary fall back to [`BodyShape::Hourglass`],
/// the default silhouette; rendering never hard-fails on appearance input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyShape {
    Pear,
    Apple,
    Rectangle,
    #[serde(alias = "Inverted Triangle")]
    InvertedTriangle,
    // Fallback variant; serde requires it last.
    #[default]
    #[serde(other)]
    Hourglass,
}

/// Hair style selector, keying one of six fixed path sets.
///
/// Unknown values fall back to [`HairStyle::LongWavy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HairStyle {
    Pixie,
    Bob,
    #[serde(alias = "Long Straight")]
    LongStraight,
    Bun,
    Afro,
    // Fallback variant; serde requires it last.
    #[default]
    #[serde(other)]
    #[serde(alias = "Long Wavy")]
    LongWavy,
}

impl HairStyle {
    /// Long styles draw an extra back-layer shape and a distinct back-view
    /// silhouette; short styles render identically from either side.
    pub fn is_long(self) -> bool {
        matches!(self, HairStyle::LongWavy | HairStyle::LongStraight)
    }
}

/// Seasonal color-analysis bucket. Informational in this core: it is consumed
/// by the stylist-advice collaborator, never by rendering or composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSeason {
    Spring,
    Summer,
    #[default]
    Autumn,
    Winter,
}

/// The viewer's self-representation: everything the figure renderer needs,
/// plus the onboarding lifecycle gate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub body_shape: BodyShape,
    pub skin_tone: Rgb8,
    pub hair_color: Rgb8,
    pub eye_color: Rgb8,
    #[serde(default)]
    pub hair_style: HairStyle,
    #[serde(default)]
    pub color_season: ColorSeason,
    #[serde(default)]
    pub onboarded: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            body_shape: BodyShape::Hourglass,
            skin_tone: Rgb8::new(0xE3, 0xB8, 0x96),
            hair_color: Rgb8::new(0x4A, 0x31, 0x21),
            eye_color: Rgb8::new(0x63, 0x4E, 0x34),
            hair_style: HairStyle::LongWavy,
            color_season: ColorSeason::Autumn,
            onboarded: false,
        }
    }
}
