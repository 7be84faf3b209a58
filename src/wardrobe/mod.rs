//! Wardrobe data model: cataloged clothing items, the owning closet
//! collection, the viewer's profile, and ambient weather.

pub mod closet;
pub mod item;
pub mod profile;
pub mod weather;
