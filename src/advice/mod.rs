//! External collaborator interfaces.
//!
//! Two services sit outside the core: an image-understanding service that
//! auto-tags uploaded garment photos, and a stylist-commentary service that
//! produces advisory text for a composed outfit. Both are best-effort: the
//! core only ever consumes their output after it has been materialized with
//! fixed fallbacks, and a collaborator failure never propagates into outfit
//! generation or rendering.

use crate::foundation::error::CroquisResult;
use crate::outfit::composer::Outfit;
use crate::wardrobe::item::{Category, ClothingItem, ItemId, Occasion};
use crate::wardrobe::profile::UserProfile;
use crate::wardrobe::weather::WeatherData;
use serde::{Deserialize, Serialize};

/// Advisory text used when the stylist collaborator fails.
pub const ADVICE_FALLBACK: &str = "You look great! Trust your instincts.";

/// Best-effort tagging result for an uploaded garment image.
///
/// Every field is optional; [`ItemTags::materialize`] applies the intake
/// defaults for whatever the tagger could not determine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemTags {
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub warmth_level: Option<u8>,
    #[serde(default)]
    pub occasions: Option<Vec<Occasion>>,
    #[serde(default)]
    pub name: Option<String>,
}

impl ItemTags {
    /// The fixed result substituted when the tagging call itself fails.
    pub fn fallback() -> Self {
        Self {
            category: Some(Category::Top),
            color: Some("Unknown".to_string()),
            warmth_level: Some(5),
            occasions: Some(vec![Occasion::Casual]),
            name: Some("Uploaded Item".to_string()),
        }
    }

    /// Turn tagging output into a cataloged item, filling per-field defaults.
    pub fn materialize(&self, id: ItemId, image_url: String) -> ClothingItem {
        ClothingItem {
            id,
            image_url,
            category: self.category.unwrap_or(Category::Top),
            color: self.color.clone().unwrap_or_else(|| "Unknown".to_string()),
            warmth_level: self.warmth_level.unwrap_or(5).clamp(1, 10),
            occasions: self
                .occasions
                .clone()
                .unwrap_or_else(|| vec![Occasion::Casual])
                .into_iter()
                .collect(),
            dirty: false,
            name: self.name.clone().unwrap_or_else(|| "New Item".to_string()),
        }
    }
}

/// Image-understanding collaborator: garment photo bytes in, tags out.
pub trait ImageTagger {
    fn tag_image(&self, image: &[u8]) -> CroquisResult<ItemTags>;
}

/// Stylist-commentary collaborator. Purely presentational; never consulted by
/// composition or rendering logic.
pub trait StylistAdvisor {
    fn advice(
        &self,
        profile: &UserProfile,
        outfit: &Outfit,
        weather: &WeatherData,
    ) -> CroquisResult<String>;
}

/// Tagger that always answers with the intake defaults. Lets the upload
/// pipeline run without a configured collaborator.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallbackTagger;

impl ImageTagger for FallbackTagger {
    fn tag_image(&self, _image: &[u8]) -> CroquisResult<ItemTags> {
        Ok(ItemTags::fallback())
    }
}

/// Ask the advisor, degrading to [`ADVICE_FALLBACK`] on any failure.
pub fn advice_or_fallback(
    advisor: &dyn StylistAdvisor,
    profile: &UserProfile,
    outfit: &Outfit,
    weather: &WeatherData,
) -> String {
    match advisor.advice(profile, outfit, weather) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(error = %e, "stylist advice failed; using fallback");
            ADVICE_FALLBACK.to_string()
        }
    }
}
