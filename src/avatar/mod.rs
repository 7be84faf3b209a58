//! The croquis figure: a stylized paper-doll built from fixed vector paths,
//! tinted by the profile's skin, hair, and eye colors.
//!
//! [`figure::render_figure`] is the only entry point; it produces a
//! resolution-independent [`scene::FigureScene`] in the 200x600 scene space
//! that the raster backend consumes.

pub mod figure;
pub mod palette;
pub(crate) mod paths;
pub mod scene;
