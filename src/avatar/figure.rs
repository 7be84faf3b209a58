use crate::avatar::palette::SkinPalette;
use crate::avatar::paths;
use crate::avatar::scene::{FigureScene, Paint, View};
use crate::foundation::core::{Affine, BezPath, Rgb8};
use crate::wardrobe::profile::{HairStyle, UserProfile};
use kurbo::{Circle, Ellipse, Shape, Stroke, StrokeOpts};

/// Vertical offset applied to the body, head, and hair groups.
const GROUP_OFFSET_Y: f64 = 20.0;

/// Extra offset for the eye cluster within the head group.
const EYE_OFFSET_Y: f64 = 2.0;

/// Width of the thin shadow outline around skin shapes.
const OUTLINE_WIDTH: f64 = 0.5;

/// Width of eyelid and brow strokes.
const FEATURE_STROKE_WIDTH: f64 = 1.5;

/// Tolerance for shape flattening and stroke expansion.
const CURVE_TOLERANCE: f64 = 0.1;

const EYELID_COLOR: Rgb8 = Rgb8 {
    r: 0x33,
    g: 0x33,
    b: 0x33,
};
const LIP_COLOR: Rgb8 = Rgb8 {
    r: 0xD4,
    g: 0x8C,
    b: 0x94,
};
const BLUSH_COLOR: Rgb8 = Rgb8 {
    r: 0xFF,
    g: 0x99,
    b: 0x99,
};
const WHITE: Rgb8 = Rgb8 {
    r: 0xFF,
    g: 0xFF,
    b: 0xFF,
};

/// Build the figure scene for one side of the body.
///
/// Pure over its inputs: the same profile and view always yield the same op
/// list, which keeps raster output reproducible. All strokes from the source
/// art are expanded to fill outlines here.
#[tracing::instrument(skip(profile), fields(body_shape = ?profile.body_shape, view = ?view))]
pub fn render_figure(profile: &UserProfile, view: View) -> FigureScene {
    let palette = SkinPalette::derive(profile.skin_tone);
    let skin = Paint::SkinRadial {
        base: palette.base,
        edge: palette.shadow,
    };
    let shadow = Paint::solid(palette.shadow);
    let hair = Paint::solid(profile.hair_color);
    let back = view == View::Back;

    let mut scene = FigureScene::default();

    // Loose fall of long hair sits underneath everything when seen from
    // behind. It is the one shape drawn outside the offset groups.
    if back && profile.hair_style.is_long() {
        scene.fill(parse(paths::HAIR_LONG_BACK_VIEW), hair);
    }

    // Body group.
    let legs = place(parse(paths::LEGS), 0.0);
    let torso = place(parse(paths::torso(profile.body_shape)), 0.0);
    let arm_left = place(parse(paths::ARM_LEFT), 0.0);
    let arm_right = place(parse(paths::ARM_RIGHT), 0.0);

    scene.fill(legs.clone(), skin);
    scene.fill(outline(&legs, OUTLINE_WIDTH), shadow);
    scene.fill(torso.clone(), skin);
    scene.fill(outline(&torso, OUTLINE_WIDTH), shadow);
    scene.fill(place(parse(paths::NECK), 0.0), skin);
    for arm in [arm_left, arm_right] {
        scene.fill(arm.clone(), Paint::solid(palette.base));
        scene.fill(outline(&arm, OUTLINE_WIDTH), shadow);
    }
    if !back {
        scene.fill(
            place(parse(paths::BANDEAU), 0.0),
            Paint::Solid {
                color: WHITE,
                alpha: 0.8,
            },
        );
    }
    scene.fill(
        place(parse(paths::BRIEF), 0.0),
        Paint::Solid {
            color: WHITE,
            alpha: 0.8,
        },
    );

    // Head group.
    let face = place(
        Ellipse::new((100.0, 80.0), (28.0, 36.0), 0.0).to_path(CURVE_TOLERANCE),
        0.0,
    );
    scene.fill(face.clone(), skin);
    scene.fill(outline(&face, OUTLINE_WIDTH), shadow);

    if !back {
        for ear in [paths::EAR_LEFT, paths::EAR_RIGHT] {
            scene.fill(place(parse(ear), 0.0), Paint::solid(palette.base));
        }
        for (cx, cy) in [(85.0, 90.0), (115.0, 90.0)] {
            scene.fill(
                place(
                    Ellipse::new((cx, cy), (8.0, 5.0), 0.0).to_path(CURVE_TOLERANCE),
                    0.0,
                ),
                Paint::Solid {
                    color: BLUSH_COLOR,
                    alpha: 0.2,
                },
            );
        }

        // Eye cluster sits slightly below the rest of the head group.
        for lid in [paths::EYELID_LEFT, paths::EYELID_RIGHT] {
            let lid = place(parse(lid), EYE_OFFSET_Y);
            scene.fill(outline(&lid, FEATURE_STROKE_WIDTH), Paint::solid(EYELID_COLOR));
        }
        for cx in [90.0, 110.0] {
            scene.fill(
                place(Circle::new((cx, 78.0), 3.0).to_path(CURVE_TOLERANCE), EYE_OFFSET_Y),
                Paint::solid(profile.eye_color),
            );
            scene.fill(
                place(Circle::new((cx, 78.0), 1.0).to_path(CURVE_TOLERANCE), EYE_OFFSET_Y),
                Paint::solid(Rgb8::new(0, 0, 0)),
            );
        }
        for brow in [paths::BROW_LEFT, paths::BROW_RIGHT] {
            let brow = place(parse(brow), EYE_OFFSET_Y);
            scene.fill(
                outline(&brow, FEATURE_STROKE_WIDTH),
                Paint::Solid {
                    color: profile.hair_color,
                    alpha: 0.8,
                },
            );
        }

        scene.fill(
            place(parse(paths::NOSE), 0.0),
            Paint::Solid {
                color: palette.shadow,
                alpha: 0.5,
            },
        );
        scene.fill(place(parse(paths::LIPS), 0.0), Paint::solid(LIP_COLOR));
    }

    // Hair group, drawn over the head.
    match profile.hair_style {
        HairStyle::Pixie => {
            scene.fill(place(parse(paths::HAIR_PIXIE_MAIN), 0.0), hair);
            scene.fill(place(parse(paths::HAIR_PIXIE_FRINGE), 0.0), hair);
        }
        HairStyle::Bob => {
            let bob = place(parse(paths::HAIR_BOB), 0.0);
            scene.fill(bob.clone(), hair);
            scene.fill(outline(&bob, OUTLINE_WIDTH), shadow);
        }
        HairStyle::LongStraight => {
            if !back {
                scene.fill(
                    place(parse(paths::HAIR_LONG_STRAIGHT_BEHIND), 0.0),
                    Paint::Solid {
                        color: profile.hair_color,
                        alpha: 0.9,
                    },
                );
            }
            scene.fill(place(parse(paths::HAIR_LONG_STRAIGHT_FRONT), 0.0), hair);
        }
        HairStyle::LongWavy => {
            if !back {
                scene.fill(
                    place(parse(paths::HAIR_LONG_WAVY_BEHIND), 0.0),
                    Paint::Solid {
                        color: profile.hair_color,
                        alpha: 0.9,
                    },
                );
            }
            scene.fill(place(parse(paths::HAIR_LONG_WAVY_FRONT), 0.0), hair);
        }
        HairStyle::Bun => {
            scene.fill(
                place(Circle::new((100.0, 20.0), 15.0).to_path(CURVE_TOLERANCE), 0.0),
                hair,
            );
            scene.fill(place(parse(paths::HAIR_BUN_BASE), 0.0), hair);
        }
        HairStyle::Afro => {
            scene.fill(
                place(Circle::new((100.0, 60.0), 45.0).to_path(CURVE_TOLERANCE), 0.0),
                hair,
            );
        }
    }

    scene
}

/// Parse fixed path data. The constants are covered by tests, so a parse
/// failure can only come from a corrupted constant; fall back to an empty
/// path rather than poisoning the whole scene.
fn parse(data: &str) -> BezPath {
    let parsed = BezPath::from_svg(data);
    debug_assert!(parsed.is_ok(), "bad path constant: {data}");
    parsed.unwrap_or_default()
}

/// Shift a path into its group position.
fn place(mut path: BezPath, extra_dy: f64) -> BezPath {
    path.apply_affine(Affine::translate((0.0, GROUP_OFFSET_Y + extra_dy)));
    path
}

/// Expand a stroke along `path` into a fillable outline.
fn outline(path: &BezPath, width: f64) -> BezPath {
    kurbo::stroke(
        path.elements().iter().copied(),
        &Stroke::new(width),
        &StrokeOpts::default(),
        CURVE_TOLERANCE,
    )
}
