use crate::foundation::core::{BezPath, Rgb8};

/// Width of the figure scene space.
pub const SCENE_WIDTH: f64 = 200.0;

/// Height of the figure scene space.
pub const SCENE_HEIGHT: f64 = 600.0;

/// Which side of the figure is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Front,
    Back,
}

impl View {
    pub fn flip(self) -> Self {
        match self {
            View::Front => View::Back,
            View::Back => View::Front,
        }
    }
}

/// How a figure shape is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Flat color with an opacity in `0.0..=1.0`.
    Solid { color: Rgb8, alpha: f32 },
    /// Soft radial falloff from `base` at the figure's center toward `edge`,
    /// used for bare skin.
    SkinRadial { base: Rgb8, edge: Rgb8 },
}

impl Paint {
    pub fn solid(color: Rgb8) -> Self {
        Paint::Solid { color, alpha: 1.0 }
    }
}

/// One filled shape. Paths are already in scene space with every stroke
/// pre-expanded to an outline, so the raster backend only ever fills.
#[derive(Clone, Debug)]
pub struct DrawOp {
    pub path: BezPath,
    pub paint: Paint,
}

/// A figure ready to rasterize: draw ops in back-to-front order in the
/// [`SCENE_WIDTH`] x [`SCENE_HEIGHT`] scene space.
#[derive(Clone, Debug, Default)]
pub struct FigureScene {
    pub ops: Vec<DrawOp>,
}

impl FigureScene {
    pub(crate) fn fill(&mut self, path: BezPath, paint: Paint) {
        self.ops.push(DrawOp { path, paint });
    }
}
