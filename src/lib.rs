//! Croquis is a wardrobe styling core: it catalogs garments, composes
//! weather- and occasion-aware outfits, and renders them over a stylized
//! fashion-croquis figure.
//!
//! The pipeline has three stages:
//!
//! 1. [`outfit::composer::compose_outfit`] picks at most one garment per
//!    category from the clean, occasion-matching part of a closet.
//! 2. [`compose::layer::compose_view`] plans one rendered side: the figure
//!    scene from [`avatar::figure::render_figure`] plus garment overlays
//!    anchored over it.
//! 3. [`render::CpuRasterizer`] executes a plan into premultiplied RGBA8.
//!
//! [`session::StylingSession`] owns all of this behind one mutation-safe
//! surface; external tagging and stylist services plug in through the traits
//! in [`advice`].
//!
//! ```no_run
//! use croquis::{Closet, CpuRasterizer, StylingSession, UserProfile, View};
//!
//! # fn main() -> anyhow::Result<()> {
//! let session = StylingSession::new(UserProfile::default(), Closet::demo());
//! let plan = session.view(View::Front);
//! let mut raster = CpuRasterizer::new();
//! let frame = raster.render_view(&plan, 900)?;
//! assert_eq!((frame.width, frame.height), (300, 900));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod foundation;

pub mod advice;
pub mod avatar;
pub mod compose;
pub mod outfit;
pub mod render;
pub mod session;
pub mod wardrobe;

pub use advice::{ADVICE_FALLBACK, FallbackTagger, ImageTagger, ItemTags, StylistAdvisor};
pub use avatar::figure::render_figure;
pub use avatar::scene::{FigureScene, View};
pub use compose::anchor::{AnchorRegion, anchor_for};
pub use compose::layer::{OverlayPlacement, OverlayTreatment, ViewPlan, compose_view};
pub use foundation::core::Rgb8;
pub use foundation::error::{CroquisError, CroquisResult};
pub use outfit::composer::{Outfit, compose_outfit};
pub use outfit::packing::{PackingList, pack_for_trip};
pub use render::{CpuRasterizer, FrameRGBA};
pub use session::StylingSession;
pub use wardrobe::closet::Closet;
pub use wardrobe::item::{Category, ClothingItem, ItemId, Occasion};
pub use wardrobe::profile::{BodyShape, ColorSeason, HairStyle, UserProfile};
pub use wardrobe::weather::{WeatherCondition, WeatherData};
