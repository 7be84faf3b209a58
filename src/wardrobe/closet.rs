use crate::advice::ItemTags;
use crate::foundation::error::{CroquisError, CroquisResult};
use crate::wardrobe::item::{Category, ClothingItem, ItemId, Occasion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// The single owner of all cataloged [`ClothingItem`] records.
///
/// Session state is ephemeral; a closet can optionally be snapshotted to JSON
/// and loaded back, but nothing here syncs or persists on its own. Consumers
/// (composer, compositor) read item slices and never mutate closet state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Closet {
    items: Vec<ClothingItem>,
    next_id: u64,
}

impl Closet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a closet snapshot from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CroquisResult<Self> {
        let closet: Closet = serde_json::from_reader(r)
            .map_err(|e| CroquisError::serde(format!("parse closet JSON: {e}")))?;
        closet.validate()?;
        Ok(closet)
    }

    /// Load a closet snapshot from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CroquisResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CroquisError::validation(format!("open closet JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Write the closet as pretty-printed JSON.
    pub fn to_writer<W: std::io::Write>(&self, w: W) -> CroquisResult<()> {
        serde_json::to_writer_pretty(w, self)
            .map_err(|e| CroquisError::serde(format!("write closet JSON: {e}")))
    }

    /// Write the closet as JSON to a file on disk.
    pub fn to_path(&self, path: impl AsRef<Path>) -> CroquisResult<()> {
        let path = path.as_ref();
        let f = File::create(path).map_err(|e| {
            CroquisError::validation(format!("create closet JSON '{}': {e}", path.display()))
        })?;
        self.to_writer(BufWriter::new(f))
    }

    /// Check all item invariants plus id uniqueness.
    pub fn validate(&self) -> CroquisResult<()> {
        let mut seen = BTreeSet::new();
        for item in &self.items {
            item.validate()?;
            if !seen.insert(item.id) {
                return Err(CroquisError::validation(format!(
                    "duplicate item id {:?}",
                    item.id
                )));
            }
            if item.id.0 >= self.next_id {
                return Err(CroquisError::validation(format!(
                    "item id {:?} not below next_id {}",
                    item.id, self.next_id
                )));
            }
        }
        Ok(())
    }

    /// Materialize tagging output into a new item and take ownership of it.
    ///
    /// Missing tag fields get the fixed intake defaults; the assigned id is
    /// stable for the lifetime of the closet. New items go to the front, the
    /// way a freshly uploaded garment shows first.
    pub fn add_tagged(&mut self, image_url: impl Into<String>, tags: &ItemTags) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.insert(0, tags.materialize(id, image_url.into()));
        id
    }

    /// Remove an item. Returns `false` when the id is unknown.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Mark an item as dirty (in the laundry) or clean.
    /// Returns `false` when the id is unknown.
    pub fn set_dirty(&mut self, id: ItemId, dirty: bool) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.dirty = dirty;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&ClothingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// All items, newest first.
    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A small demo wardrobe for examples and tests.
    pub fn demo() -> Self {
        fn item(
            id: u64,
            image_url: &str,
            category: Category,
            color: &str,
            warmth_level: u8,
            occasions: &[Occasion],
            name: &str,
        ) -> ClothingItem {
            ClothingItem {
                id: ItemId(id),
                image_url: image_url.to_string(),
                category,
                color: color.to_string(),
                warmth_level,
                occasions: occasions.iter().copied().collect(),
                dirty: false,
                name: name.to_string(),
            }
        }

        use Occasion::*;
        let items = vec![
            item(
                0,
                "https://images.unsplash.com/photo-1596755094514-f87e34085b2c",
                Category::Top,
                "White",
                3,
                &[Casual, Formal],
                "Classic White Shirt",
            ),
            item(
                1,
                "https://images.unsplash.com/photo-1576566588028-4147f3842f27",
                Category::Top,
                "Beige",
                7,
                &[Casual, Lounge],
                "Cozy Knit Sweater",
            ),
            item(
                2,
                "https://images.unsplash.com/photo-1542272617-08f08630329e",
                Category::Bottom,
                "Blue",
                5,
                &[Casual],
                "Vintage Wash Jeans",
            ),
            item(
                3,
                "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1",
                Category::Bottom,
                "Cream",
                4,
                &[Formal, Casual],
                "Tailored Trousers",
            ),
            item(
                4,
                "https://images.unsplash.com/photo-1591047139829-d91aecb6caea",
                Category::Outerwear,
                "Beige",
                6,
                &[Formal, Casual],
                "Trench Coat",
            ),
            item(
                5,
                "https://images.unsplash.com/photo-1543163521-1bf539c55dd2",
                Category::Shoes,
                "Blue",
                4,
                &[Casual, Party],
                "High Heels",
            ),
            item(
                6,
                "https://images.unsplash.com/photo-1560769625-ed5974877971",
                Category::Shoes,
                "White",
                4,
                &[Casual, Active],
                "Clean Sneakers",
            ),
            item(
                7,
                "https://images.unsplash.com/photo-1584917865442-de89df76afd3",
                Category::Accessory,
                "Brown",
                1,
                &[Casual, Formal],
                "Leather Bag",
            ),
            item(
                8,
                "https://images.unsplash.com/photo-1601924994987-69e26d50dc26",
                Category::Accessory,
                "Red",
                2,
                &[Casual, Party],
                "Silk Scarf",
            ),
        ];
        Self { items, next_id: 9 }
    }
}
