//! Garment compositing: fixed anchor regions over the figure and the
//! per-view layer plan the raster backend executes.

pub mod anchor;
pub mod layer;
