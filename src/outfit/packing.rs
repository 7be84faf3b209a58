use crate::wardrobe::item::{Category, ClothingItem};
use serde::Serialize;

/// Shortest and longest trips the heuristic covers; requested day counts are
/// clamped into this range.
pub const TRIP_DAYS_RANGE: std::ops::RangeInclusive<u32> = 2..=14;

/// Suggested garments for a trip, grouped by slot.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PackingList {
    pub days: u32,
    pub tops: Vec<ClothingItem>,
    pub bottoms: Vec<ClothingItem>,
    pub shoes: Vec<ClothingItem>,
}

impl PackingList {
    pub fn is_empty(&self) -> bool {
        self.tops.is_empty() && self.bottoms.is_empty() && self.shoes.is_empty()
    }

    pub fn total(&self) -> usize {
        self.tops.len() + self.bottoms.len() + self.shoes.len()
    }
}

/// Build a packing list for a trip of `days` days.
///
/// Quantity heuristic: one top per day, one bottom per two days (rounded up),
/// one pair of shoes regardless of length. Only clean items are considered,
/// taken in closet order; a short closet simply yields fewer pieces.
pub fn pack_for_trip(items: &[ClothingItem], days: u32) -> PackingList {
    let days = days.clamp(*TRIP_DAYS_RANGE.start(), *TRIP_DAYS_RANGE.end());

    let take = |category: Category, n: usize| -> Vec<ClothingItem> {
        items
            .iter()
            .filter(|i| !i.dirty && i.category == category)
            .take(n)
            .cloned()
            .collect()
    };

    PackingList {
        days,
        tops: take(Category::Top, days as usize),
        bottoms: take(Category::Bottom, days.div_ceil(2) as usize),
        shoes: take(Category::Shoes, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wardrobe::closet::Closet;
    use crate::wardrobe::item::ItemId;

    #[test]
    fn quantities_follow_day_count() {
        let closet = Closet::demo();
        let list = pack_for_trip(closet.items(), 3);
        assert_eq!(list.days, 3);
        // Demo closet holds 2 tops, 2 bottoms, 2 pairs of shoes.
        assert_eq!(list.tops.len(), 2);
        assert_eq!(list.bottoms.len(), 2);
        assert_eq!(list.shoes.len(), 1);
    }

    #[test]
    fn day_count_clamps_to_supported_range() {
        let closet = Closet::demo();
        assert_eq!(pack_for_trip(closet.items(), 0).days, 2);
        assert_eq!(pack_for_trip(closet.items(), 1).days, 2);
        assert_eq!(pack_for_trip(closet.items(), 99).days, 14);
    }

    #[test]
    fn bottoms_round_up_at_half_rate() {
        let closet = Closet::demo();
        // 5 days wants ceil(5/2) = 3 bottoms but only 2 exist.
        let list = pack_for_trip(closet.items(), 5);
        assert_eq!(list.bottoms.len(), 2);
    }

    #[test]
    fn dirty_items_are_skipped() {
        let mut closet = Closet::demo();
        closet.set_dirty(ItemId(0), true);
        closet.set_dirty(ItemId(1), true);
        let list = pack_for_trip(closet.items(), 4);
        assert!(list.tops.is_empty());
        assert!(!list.is_empty());
    }
}
