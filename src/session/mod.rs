//! The styling session: one owner for profile, closet, weather, occasion,
//! and the currently composed outfit.
//!
//! Any mutation that can affect outfit eligibility recomposes the outfit
//! immediately, so the session never exposes a stale suggestion. All state is
//! in-memory; snapshot the closet through [`crate::wardrobe::closet::Closet`]
//! if persistence is wanted.

use crate::advice::{ImageTagger, ItemTags, StylistAdvisor, advice_or_fallback};
use crate::avatar::scene::View;
use crate::compose::layer::{ViewPlan, compose_view};
use crate::outfit::composer::{Outfit, compose_outfit};
use crate::outfit::packing::{PackingList, pack_for_trip};
use crate::wardrobe::closet::Closet;
use crate::wardrobe::item::{ItemId, Occasion};
use crate::wardrobe::profile::UserProfile;
use crate::wardrobe::weather::WeatherData;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct StylingSession {
    profile: UserProfile,
    closet: Closet,
    occasion: Occasion,
    weather: WeatherData,
    rng: StdRng,
    outfit: Outfit,
}

impl StylingSession {
    /// Start a session with OS-seeded randomness.
    pub fn new(profile: UserProfile, closet: Closet) -> Self {
        Self::with_rng(profile, closet, StdRng::from_os_rng)
    }

    /// Start a session that replays deterministically for a given seed.
    pub fn with_seed(profile: UserProfile, closet: Closet, seed: u64) -> Self {
        Self::with_rng(profile, closet, || StdRng::seed_from_u64(seed))
    }

    fn with_rng(profile: UserProfile, closet: Closet, rng: impl FnOnce() -> StdRng) -> Self {
        let mut session = Self {
            profile,
            closet,
            occasion: Occasion::Casual,
            weather: WeatherData::default(),
            rng: rng(),
            outfit: Outfit::empty(),
        };
        session.recompose();
        session
    }

    fn recompose(&mut self) {
        self.outfit = compose_outfit(
            self.closet.items(),
            self.occasion,
            &self.weather,
            &mut self.rng,
        );
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn closet(&self) -> &Closet {
        &self.closet
    }

    pub fn occasion(&self) -> Occasion {
        self.occasion
    }

    pub fn weather(&self) -> &WeatherData {
        &self.weather
    }

    /// The current suggestion. Empty when the closet cannot cover both
    /// mandatory slots for the selected occasion.
    pub fn outfit(&self) -> &Outfit {
        &self.outfit
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
    }

    #[tracing::instrument(skip(self))]
    pub fn set_occasion(&mut self, occasion: Occasion) {
        self.occasion = occasion;
        self.recompose();
    }

    #[tracing::instrument(skip(self), fields(temp_c = weather.temp_c))]
    pub fn set_weather(&mut self, weather: WeatherData) {
        self.weather = weather;
        self.recompose();
    }

    /// Draw a fresh outfit for the current occasion and weather.
    pub fn shuffle(&mut self) -> &Outfit {
        self.recompose();
        &self.outfit
    }

    /// Ingest an uploaded garment: tag it through the collaborator, fall
    /// back to the fixed intake tags if tagging fails, then recompose.
    #[tracing::instrument(skip(self, image, tagger), fields(len = image.len()))]
    pub fn add_item(
        &mut self,
        image_url: impl Into<String> + std::fmt::Debug,
        image: &[u8],
        tagger: &dyn ImageTagger,
    ) -> ItemId {
        let tags = match tagger.tag_image(image) {
            Ok(tags) => tags,
            Err(e) => {
                tracing::debug!(error = %e, "tagging failed; using fallback tags");
                ItemTags::fallback()
            }
        };
        let id = self.closet.add_tagged(image_url, &tags);
        self.recompose();
        id
    }

    /// Remove an item. Recomposes when something was actually removed.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let removed = self.closet.remove(id);
        if removed {
            self.recompose();
        }
        removed
    }

    /// Flip an item's laundry state. Recomposes on change.
    pub fn set_dirty(&mut self, id: ItemId, dirty: bool) -> bool {
        let changed = self.closet.set_dirty(id, dirty);
        if changed {
            self.recompose();
        }
        changed
    }

    /// Layer plan for one side of the figure wearing the current outfit.
    pub fn view(&self, view: View) -> ViewPlan {
        compose_view(&self.profile, &self.outfit, view)
    }

    /// Packing suggestion for a trip of `days` days, from clean items only.
    pub fn packing_list(&self, days: u32) -> PackingList {
        pack_for_trip(self.closet.items(), days)
    }

    /// Stylist commentary for the current outfit, degrading to the fixed
    /// fallback line on collaborator failure. `None` when there is no outfit
    /// to comment on.
    pub fn stylist_comment(&self, advisor: &dyn StylistAdvisor) -> Option<String> {
        if self.outfit.is_empty() {
            return None;
        }
        Some(advice_or_fallback(
            advisor,
            &self.profile,
            &self.outfit,
            &self.weather,
        ))
    }

    /// Direct access to the session RNG, for callers layering their own
    /// randomized features on top.
    pub fn rng(&mut self) -> &mut impl Rng {
        &mut self.rng
    }
}
