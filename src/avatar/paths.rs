//! Fixed vector geometry for the croquis figure, expressed as SVG path data
//! in the 200x600 scene space. Torso paths share top edges near y=140 so the
//! neck seam lines up across silhouettes.

use crate::wardrobe::profile::BodyShape;

pub const TORSO_HOURGLASS: &str = "M72,140 C72,180 65,200 85,220 C65,250 60,280 65,300 C70,320 90,325 100,325 C110,325 130,320 135,300 C140,280 135,250 115,220 C135,200 128,180 128,140 Z";
pub const TORSO_PEAR: &str = "M75,160 C75,180 65,260 60,290 C55,320 90,330 100,330 C110,330 145,320 140,290 C135,260 125,180 125,160 L125,140 L75,140 Z";
pub const TORSO_APPLE: &str = "M75,160 C60,180 60,240 70,280 C80,310 90,320 100,320 C110,320 120,310 130,280 C140,240 140,180 125,160 L125,140 L75,140 Z";
pub const TORSO_RECTANGLE: &str = "M75,140 L75,280 C75,300 90,310 100,310 C110,310 125,300 125,280 L125,140 Z";
pub const TORSO_INVERTED_TRIANGLE: &str = "M70,140 L65,180 C65,220 80,280 90,300 C95,310 105,310 110,300 C120,280 135,220 135,180 L130,140 Z";

pub fn torso(shape: BodyShape) -> &'static str {
    match shape {
        BodyShape::Hourglass => TORSO_HOURGLASS,
        BodyShape::Pear => TORSO_PEAR,
        BodyShape::Apple => TORSO_APPLE,
        BodyShape::Rectangle => TORSO_RECTANGLE,
        BodyShape::InvertedTriangle => TORSO_INVERTED_TRIANGLE,
    }
}

pub const LEGS: &str = "M85,300 C80,350 75,450 70,550 L85,550 L95,330 L105,330 L115,550 L130,550 C125,450 120,350 115,300 Z";
pub const NECK: &str = "M88,100 C88,120 85,140 75,150 L125,150 C115,140 112,120 112,100 Z";

// Arms are open strokes in the source art; the figure fills them and overlays
// a thin shadow stroke along the same curve.
pub const ARM_LEFT: &str = "M72,150 C60,160 40,200 35,280 C35,290 45,290 45,280 C50,220 65,180 75,170";
pub const ARM_RIGHT: &str = "M128,150 C140,160 160,200 165,280 C165,290 155,290 155,280 C150,220 135,180 125,170";

pub const BANDEAU: &str = "M75,145 C85,170 115,170 125,145 L125,160 C115,190 85,190 75,160 Z";
pub const BRIEF: &str = "M85,300 L115,300 L100,335 Z";

pub const EAR_LEFT: &str = "M72,80 C70,75 65,75 65,85 C65,95 72,90 72,85";
pub const EAR_RIGHT: &str = "M128,80 C130,75 135,75 135,85 C135,95 128,90 128,85";

pub const EYELID_LEFT: &str = "M82,78 Q90,72 98,78";
pub const EYELID_RIGHT: &str = "M102,78 Q110,72 118,78";
pub const BROW_LEFT: &str = "M80,72 Q90,68 98,72";
pub const BROW_RIGHT: &str = "M102,72 Q110,68 120,72";
pub const NOSE: &str = "M100,85 L98,95 L102,95 Z";
pub const LIPS: &str = "M92,102 Q100,105 108,102 Q100,110 92,102";

pub const HAIR_PIXIE_MAIN: &str = "M70,60 C60,50 60,30 100,25 C140,30 140,50 130,60 C130,75 120,80 120,65 L115,55";
pub const HAIR_PIXIE_FRINGE: &str = "M70,60 C65,70 75,75 80,60";
pub const HAIR_BOB: &str = "M75,30 C60,30 55,60 55,90 C55,100 65,105 80,100 L80,50 M120,50 L120,100 C135,105 145,100 145,90 C145,60 140,30 125,30 Z";
pub const HAIR_LONG_STRAIGHT_FRONT: &str = "M100,25 C70,25 60,50 60,130 L75,130 C75,80 85,50 100,40 C115,50 125,80 125,130 L140,130 C140,50 130,25 100,25 Z";
pub const HAIR_LONG_STRAIGHT_BEHIND: &str = "M60,40 L50,160 C70,170 130,170 150,160 L140,40 Z";
pub const HAIR_LONG_WAVY_FRONT: &str = "M100,25 C70,25 55,60 60,150 L80,140 C75,100 85,50 100,40 C115,50 125,100 120,140 L140,150 C145,60 130,25 100,25 Z";
pub const HAIR_LONG_WAVY_BEHIND: &str = "M55,40 Q45,100 60,160 Q100,180 140,160 Q155,100 145,40 Z";
pub const HAIR_BUN_BASE: &str = "M70,40 C70,25 130,25 130,40 C130,60 120,70 100,70 C80,70 70,60 70,40 Z";

/// Loose fall of long hair seen from behind, drawn underneath the body.
pub const HAIR_LONG_BACK_VIEW: &str = "M60,40 L50,180 C80,200 120,200 150,180 L140,40 Z";

/// Every path constant in this module, for parse checks.
#[cfg(test)]
pub const ALL_PATHS: &[&str] = &[
    TORSO_HOURGLASS,
    TORSO_PEAR,
    TORSO_APPLE,
    TORSO_RECTANGLE,
    TORSO_INVERTED_TRIANGLE,
    LEGS,
    NECK,
    ARM_LEFT,
    ARM_RIGHT,
    BANDEAU,
    BRIEF,
    EAR_LEFT,
    EAR_RIGHT,
    EYELID_LEFT,
    EYELID_RIGHT,
    BROW_LEFT,
    BROW_RIGHT,
    NOSE,
    LIPS,
    HAIR_PIXIE_MAIN,
    HAIR_PIXIE_FRINGE,
    HAIR_BOB,
    HAIR_LONG_STRAIGHT_FRONT,
    HAIR_LONG_STRAIGHT_BEHIND,
    HAIR_LONG_WAVY_FRONT,
    HAIR_LONG_WAVY_BEHIND,
    HAIR_BUN_BASE,
    HAIR_LONG_BACK_VIEW,
];

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::BezPath;

    #[test]
    fn every_path_constant_parses() {
        for (i, data) in ALL_PATHS.iter().enumerate() {
            let path = BezPath::from_svg(data)
                .unwrap_or_else(|e| panic!("path constant {i} failed to parse: {e}"));
            assert!(!path.elements().is_empty(), "path constant {i} is empty");
        }
    }

    #[test]
    fn torso_lookup_is_exhaustive_and_distinct() {
        let shapes = [
            BodyShape::Hourglass,
            BodyShape::Pear,
            BodyShape::Apple,
            BodyShape::Rectangle,
            BodyShape::InvertedTriangle,
        ];
        for (i, a) in shapes.iter().enumerate() {
            for b in &shapes[i + 1..] {
                assert_ne!(torso(*a), torso(*b));
            }
        }
    }
}
