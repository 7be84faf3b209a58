use crate::avatar::figure::render_figure;
use crate::avatar::scene::{FigureScene, View};
use crate::compose::anchor::{AnchorRegion, anchor_for};
use crate::outfit::composer::Outfit;
use crate::wardrobe::item::{Category, ItemId};
use crate::wardrobe::profile::UserProfile;
use smallvec::SmallVec;

/// Pixel treatment applied to a garment overlay as a whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayTreatment {
    #[default]
    None,
    /// Desaturate and dim, used for every garment when the figure is seen
    /// from behind.
    DesaturateDim,
}

/// One garment placed over the figure.
#[derive(Clone, Debug)]
pub struct OverlayPlacement {
    pub item_id: ItemId,
    pub category: Category,
    pub image_url: String,
    pub region: AnchorRegion,
    pub treatment: OverlayTreatment,
}

/// Everything the raster backend needs for one side of the figure: the
/// figure scene plus garment overlays in paint order.
#[derive(Clone, Debug)]
pub struct ViewPlan {
    pub view: View,
    pub figure: FigureScene,
    pub overlays: SmallVec<[OverlayPlacement; 5]>,
}

/// Paint order for overlays that share a z value.
const DISPLAY_ORDER: [Category; 5] = [
    Category::Bottom,
    Category::Top,
    Category::Shoes,
    Category::Outerwear,
    Category::Accessory,
];

/// Plan one rendered side: figure underneath, garments stacked by z.
///
/// Garments without an anchor (dresses) are skipped. Within equal z the
/// fixed display order breaks ties, so bottoms sit under shoes at z 5.
pub fn compose_view(profile: &UserProfile, outfit: &Outfit, view: View) -> ViewPlan {
    let treatment = match view {
        View::Front => OverlayTreatment::None,
        View::Back => OverlayTreatment::DesaturateDim,
    };

    let mut overlays: SmallVec<[OverlayPlacement; 5]> = DISPLAY_ORDER
        .iter()
        .filter_map(|&category| {
            let item = outfit.get(category)?;
            let region = anchor_for(category)?;
            Some(OverlayPlacement {
                item_id: item.id,
                category,
                image_url: item.image_url.clone(),
                region,
                treatment,
            })
        })
        .collect();
    overlays.sort_by_key(|o| o.region.z);

    ViewPlan {
        view,
        figure: render_figure(profile, view),
        overlays,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outfit::composer::compose_outfit;
    use crate::wardrobe::closet::Closet;
    use crate::wardrobe::item::Occasion;
    use crate::wardrobe::weather::WeatherData;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn full_outfit() -> Outfit {
        let closet = Closet::demo();
        let cold = WeatherData {
            temp_c: 5.0,
            ..WeatherData::default()
        };
        for seed in 0u64.. {
            let mut rng = StdRng::seed_from_u64(seed);
            let outfit = compose_outfit(closet.items(), Occasion::Casual, &cold, &mut rng);
            if outfit.get(Category::Accessory).is_some() {
                return outfit;
            }
        }
        unreachable!()
    }

    #[test]
    fn overlays_are_sorted_by_z_with_stable_ties() {
        let plan = compose_view(&UserProfile::default(), &full_outfit(), View::Front);
        assert_eq!(plan.overlays.len(), 5);
        let zs: Vec<u8> = plan.overlays.iter().map(|o| o.region.z).collect();
        assert!(zs.windows(2).all(|w| w[0] <= w[1]));
        // Bottom and shoes share z 5; display order keeps the bottom first.
        assert_eq!(plan.overlays[0].category, Category::Bottom);
        assert_eq!(plan.overlays[1].category, Category::Shoes);
        assert_eq!(plan.overlays[4].category, Category::Accessory);
    }

    #[test]
    fn back_view_marks_every_overlay_desaturated() {
        let plan = compose_view(&UserProfile::default(), &full_outfit(), View::Back);
        assert!(
            plan.overlays
                .iter()
                .all(|o| o.treatment == OverlayTreatment::DesaturateDim)
        );
        assert_eq!(plan.view, View::Back);
    }

    #[test]
    fn empty_outfit_plans_figure_only() {
        let plan = compose_view(&UserProfile::default(), &Outfit::empty(), View::Front);
        assert!(plan.overlays.is_empty());
        assert!(!plan.figure.ops.is_empty());
    }
}
