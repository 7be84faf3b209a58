use crate::foundation::error::{CroquisError, CroquisResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Valid range for [`ClothingItem::warmth_level`].
pub const WARMTH_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Stable identifier assigned to an item when it enters the closet.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ItemId(pub u64);

/// Garment category. Mutually exclusive and immutable after creation; it
/// determines the anchor region a garment composites onto.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    Accessory,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Top,
        Category::Bottom,
        Category::Dress,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessory,
    ];
}

/// Occasion a garment is suitable for. An item may carry several.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Occasion {
    Casual,
    Formal,
    Lounge,
    Active,
    Party,
}

impl Occasion {
    /// All occasions, in declaration order.
    pub const ALL: [Occasion; 5] = [
        Occasion::Casual,
        Occasion::Formal,
        Occasion::Lounge,
        Occasion::Active,
        Occasion::Party,
    ];
}

/// A cataloged garment.
///
/// Items are owned by the [`crate::wardrobe::closet::Closet`]; the composer and
/// renderer only ever read snapshots. An empty `occasions` set is tolerated
/// (the item simply never matches a selected occasion).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ItemId,
    /// Displayable image reference: a remote URL or a local data URI.
    pub image_url: String,
    pub category: Category,
    /// Free-text color label; display only, never used in matching logic.
    pub color: String,
    /// 1..=10; used only as a threshold filter for outerwear selection.
    pub warmth_level: u8,
    #[serde(default)]
    pub occasions: BTreeSet<Occasion>,
    #[serde(default)]
    pub dirty: bool,
    pub name: String,
}

impl ClothingItem {
    /// Check invariants that serde alone cannot express.
    pub fn validate(&self) -> CroquisResult<()> {
        if !WARMTH_RANGE.contains(&self.warmth_level) {
            return Err(CroquisError::validation(format!(
                "item '{}': warmth_level {} outside 1..=10",
                self.name, self.warmth_level
            )));
        }
        Ok(())
    }

    /// Return `true` when the item is clean and tagged for `occasion`.
    pub fn eligible_for(&self, occasion: Occasion) -> bool {
        !self.dirty && self.occasions.contains(&occasion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: Category, occasions: &[Occasion]) -> ClothingItem {
        ClothingItem {
            id: ItemId(1),
            image_url: "https://example.com/a.jpg".to_string(),
            category,
            color: "Blue".to_string(),
            warmth_level: 5,
            occasions: occasions.iter().copied().collect(),
            dirty: false,
            name: "Test".to_string(),
        }
    }

    #[test]
    fn eligibility_requires_clean_and_occasion_match() {
        let mut i = item(Category::Top, &[Occasion::Casual, Occasion::Formal]);
        assert!(i.eligible_for(Occasion::Casual));
        assert!(!i.eligible_for(Occasion::Party));

        i.dirty = true;
        assert!(!i.eligible_for(Occasion::Casual));
    }

    #[test]
    fn empty_occasion_set_never_matches() {
        let i = item(Category::Top, &[]);
        for occ in Occasion::ALL {
            assert!(!i.eligible_for(occ));
        }
    }

    #[test]
    fn validate_rejects_out_of_range_warmth() {
        let mut i = item(Category::Outerwear, &[Occasion::Casual]);
        i.warmth_level = 0;
        assert!(i.validate().is_err());
        i.warmth_level = 11;
        assert!(i.validate().is_err());
        i.warmth_level = 10;
        assert!(i.validate().is_ok());
    }

    #[test]
    fn json_roundtrip_keeps_occasion_set() {
        let i = item(Category::Shoes, &[Occasion::Party, Occasion::Casual]);
        let s = serde_json::to_string(&i).unwrap();
        let de: ClothingItem = serde_json::from_str(&s).unwrap();
        assert_eq!(de, i);
    }
}
