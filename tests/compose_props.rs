//! Property-style checks for outfit composition across many seeds.

use croquis::outfit::composer::{OUTERWEAR_MIN_WARMTH, OUTERWEAR_TEMP_C};
use croquis::{
    Category, Closet, ClothingItem, ItemId, Occasion, WeatherData, compose_outfit,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

fn weather(temp_c: f64) -> WeatherData {
    WeatherData {
        temp_c,
        ..WeatherData::default()
    }
}

fn item(
    id: u64,
    category: Category,
    warmth_level: u8,
    occasions: &[Occasion],
) -> ClothingItem {
    ClothingItem {
        id: ItemId(id),
        image_url: format!("item-{id}.jpg"),
        category,
        color: "Gray".to_string(),
        warmth_level,
        occasions: occasions.iter().copied().collect(),
        dirty: false,
        name: format!("Item {id}"),
    }
}

#[test]
fn every_nonempty_outfit_has_top_and_bottom() {
    let closet = Closet::demo();
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        for occasion in Occasion::ALL {
            let outfit = compose_outfit(closet.items(), occasion, &weather(10.0), &mut rng);
            if !outfit.is_empty() {
                assert!(outfit.get(Category::Top).is_some());
                assert!(outfit.get(Category::Bottom).is_some());
            }
        }
    }
}

#[test]
fn at_most_one_item_per_category() {
    let closet = Closet::demo();
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outfit = compose_outfit(closet.items(), Occasion::Casual, &weather(5.0), &mut rng);
        let mut seen = BTreeSet::new();
        for item in outfit.items() {
            assert!(seen.insert(item.category), "duplicate {:?}", item.category);
        }
    }
}

#[test]
fn threshold_temperature_is_strict() {
    // Exactly at the threshold no outerwear may appear.
    let closet = Closet::demo();
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outfit = compose_outfit(
            closet.items(),
            Occasion::Casual,
            &weather(OUTERWEAR_TEMP_C),
            &mut rng,
        );
        assert!(outfit.get(Category::Outerwear).is_none());
    }
    // Just below it the demo closet's trench coat always qualifies.
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outfit = compose_outfit(
            closet.items(),
            Occasion::Casual,
            &weather(OUTERWEAR_TEMP_C - 0.1),
            &mut rng,
        );
        assert!(outfit.get(Category::Outerwear).is_some());
    }
}

#[test]
fn light_jackets_never_picked_in_cold() {
    // One outerwear piece below the warmth floor: cold weather must leave
    // the slot empty rather than pick it.
    let items = vec![
        item(0, Category::Top, 3, &[Occasion::Casual]),
        item(1, Category::Bottom, 3, &[Occasion::Casual]),
        item(2, Category::Outerwear, OUTERWEAR_MIN_WARMTH - 1, &[Occasion::Casual]),
    ];
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outfit = compose_outfit(&items, Occasion::Casual, &weather(0.0), &mut rng);
        assert!(!outfit.is_empty());
        assert!(outfit.get(Category::Outerwear).is_none());
    }
}

#[test]
fn shoes_join_whenever_available() {
    let items = vec![
        item(0, Category::Top, 3, &[Occasion::Active]),
        item(1, Category::Bottom, 3, &[Occasion::Active]),
        item(2, Category::Shoes, 2, &[Occasion::Active]),
    ];
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outfit = compose_outfit(&items, Occasion::Active, &weather(20.0), &mut rng);
        assert!(outfit.get(Category::Shoes).is_some());
    }
}

#[test]
fn single_candidate_per_slot_is_deterministic() {
    let items = vec![
        item(0, Category::Top, 3, &[Occasion::Party]),
        item(1, Category::Bottom, 3, &[Occasion::Party]),
        item(2, Category::Shoes, 2, &[Occasion::Party]),
    ];
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outfit = compose_outfit(&items, Occasion::Party, &weather(20.0), &mut rng);
        let ids: Vec<u64> = outfit.items().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}

#[test]
fn occasion_mismatch_empties_the_outfit() {
    // A formal-only top cannot serve a casual outfit even as the only top.
    let items = vec![
        item(0, Category::Top, 3, &[Occasion::Formal]),
        item(1, Category::Bottom, 3, &[Occasion::Casual]),
    ];
    let mut rng = StdRng::seed_from_u64(0);
    let outfit = compose_outfit(&items, Occasion::Casual, &weather(20.0), &mut rng);
    assert!(outfit.is_empty());
}

#[test]
fn dirty_items_never_appear() {
    let mut closet = Closet::demo();
    closet.set_dirty(ItemId(0), true);
    closet.set_dirty(ItemId(5), true);
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outfit = compose_outfit(closet.items(), Occasion::Casual, &weather(5.0), &mut rng);
        assert!(
            outfit
                .items()
                .iter()
                .all(|i| i.id != ItemId(0) && i.id != ItemId(5))
        );
    }
}
