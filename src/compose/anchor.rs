use crate::wardrobe::item::Category;

/// Where a garment overlay sits over the figure, as fractions of the output
/// surface. `top` and `left` locate the region's corner, `width` its extent;
/// height follows from the garment image's own aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorRegion {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    /// Stacking order; higher paints over lower.
    pub z: u8,
}

/// Fixed anchor geometry per category. Tuned against the 200x600 figure so
/// tops cover the torso, bottoms the hips and legs, and outerwear wraps wider
/// than both.
pub const ANCHOR_TABLE: [(Category, AnchorRegion); 5] = [
    (
        Category::Top,
        AnchorRegion {
            left: 0.20,
            top: 0.24,
            width: 0.60,
            z: 10,
        },
    ),
    (
        Category::Bottom,
        AnchorRegion {
            left: 0.22,
            top: 0.48,
            width: 0.56,
            z: 5,
        },
    ),
    (
        Category::Outerwear,
        AnchorRegion {
            left: 0.15,
            top: 0.22,
            width: 0.70,
            z: 20,
        },
    ),
    (
        Category::Shoes,
        AnchorRegion {
            left: 0.25,
            top: 0.88,
            width: 0.50,
            z: 5,
        },
    ),
    (
        Category::Accessory,
        AnchorRegion {
            left: 0.68,
            top: 0.45,
            width: 0.30,
            z: 25,
        },
    ),
];

/// The anchor for a category, or `None` for categories with no placement
/// (a dress is never composited onto the figure).
pub fn anchor_for(category: Category) -> Option<AnchorRegion> {
    ANCHOR_TABLE
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, region)| *region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dress_has_no_anchor() {
        assert!(anchor_for(Category::Dress).is_none());
        for category in [
            Category::Top,
            Category::Bottom,
            Category::Outerwear,
            Category::Shoes,
            Category::Accessory,
        ] {
            assert!(anchor_for(category).is_some());
        }
    }

    #[test]
    fn regions_stay_inside_the_unit_surface() {
        for (_, r) in ANCHOR_TABLE {
            assert!(r.left >= 0.0 && r.left + r.width <= 1.0);
            assert!((0.0..1.0).contains(&r.top));
        }
    }

    #[test]
    fn outerwear_stacks_over_top_over_bottom() {
        let top = anchor_for(Category::Top).unwrap();
        let bottom = anchor_for(Category::Bottom).unwrap();
        let coat = anchor_for(Category::Outerwear).unwrap();
        assert!(coat.z > top.z && top.z > bottom.z);
        assert!(coat.width > top.width);
    }
}
