//! Raster output: a CPU backend powered by `vello_cpu` that turns figure
//! scenes and view plans into RGBA8 frames.

pub mod cpu;

pub use cpu::{CpuRasterizer, FrameRGBA};
