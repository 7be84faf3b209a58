//! Outfit generation: the random composer and the trip packing list.

pub mod composer;
pub mod packing;
