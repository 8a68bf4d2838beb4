//! Plant catalog
//!
//! The set of known plants (name + category). Catalog membership is
//! case-insensitive on trimmed names; weekly history keeps whatever names it
//! recorded even after catalog edits.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fallback category for plants with no known category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Built-in default catalog: 118 plants across 6 categories.
///
/// Defaults live in code, not external files; `reset_to_defaults` and the
/// migration category lookup both read this table.
const DEFAULT_PLANTS: &[(&str, &str)] = &[
    // Vegetables
    ("Kale", "Vegetables"),
    ("Spinach", "Vegetables"),
    ("Broccoli", "Vegetables"),
    ("Cauliflower", "Vegetables"),
    ("Carrot", "Vegetables"),
    ("Beetroot", "Vegetables"),
    ("Sweet Potato", "Vegetables"),
    ("Potato", "Vegetables"),
    ("Onion", "Vegetables"),
    ("Garlic", "Vegetables"),
    ("Leek", "Vegetables"),
    ("Spring Onion", "Vegetables"),
    ("Shallot", "Vegetables"),
    ("Cabbage", "Vegetables"),
    ("Brussels Sprouts", "Vegetables"),
    ("Zucchini", "Vegetables"),
    ("Pumpkin", "Vegetables"),
    ("Butternut Squash", "Vegetables"),
    ("Cucumber", "Vegetables"),
    ("Tomato", "Vegetables"),
    ("Bell Pepper", "Vegetables"),
    ("Eggplant", "Vegetables"),
    ("Celery", "Vegetables"),
    ("Fennel", "Vegetables"),
    ("Asparagus", "Vegetables"),
    ("Artichoke", "Vegetables"),
    ("Radish", "Vegetables"),
    ("Turnip", "Vegetables"),
    ("Parsnip", "Vegetables"),
    ("Lettuce", "Vegetables"),
    ("Arugula", "Vegetables"),
    ("Chard", "Vegetables"),
    // Fruits
    ("Apple", "Fruits"),
    ("Pear", "Fruits"),
    ("Banana", "Fruits"),
    ("Orange", "Fruits"),
    ("Mandarin", "Fruits"),
    ("Lemon", "Fruits"),
    ("Lime", "Fruits"),
    ("Grapefruit", "Fruits"),
    ("Strawberry", "Fruits"),
    ("Blueberry", "Fruits"),
    ("Raspberry", "Fruits"),
    ("Blackberry", "Fruits"),
    ("Grape", "Fruits"),
    ("Kiwifruit", "Fruits"),
    ("Mango", "Fruits"),
    ("Pineapple", "Fruits"),
    ("Papaya", "Fruits"),
    ("Peach", "Fruits"),
    ("Nectarine", "Fruits"),
    ("Plum", "Fruits"),
    ("Apricot", "Fruits"),
    ("Cherry", "Fruits"),
    ("Watermelon", "Fruits"),
    ("Cantaloupe", "Fruits"),
    ("Fig", "Fruits"),
    ("Avocado", "Fruits"),
    // Grains
    ("Oats", "Grains"),
    ("Wheat", "Grains"),
    ("Barley", "Grains"),
    ("Rye", "Grains"),
    ("Rice", "Grains"),
    ("Quinoa", "Grains"),
    ("Buckwheat", "Grains"),
    ("Millet", "Grains"),
    ("Corn", "Grains"),
    ("Spelt", "Grains"),
    ("Amaranth", "Grains"),
    ("Teff", "Grains"),
    // Legumes
    ("Chickpeas", "Legumes"),
    ("Lentils", "Legumes"),
    ("Black Beans", "Legumes"),
    ("Kidney Beans", "Legumes"),
    ("Cannellini Beans", "Legumes"),
    ("Butter Beans", "Legumes"),
    ("Pinto Beans", "Legumes"),
    ("Mung Beans", "Legumes"),
    ("Soybeans", "Legumes"),
    ("Green Peas", "Legumes"),
    ("Snow Peas", "Legumes"),
    ("Green Beans", "Legumes"),
    ("Broad Beans", "Legumes"),
    ("Adzuki Beans", "Legumes"),
    // Nuts & Seeds
    ("Almonds", "Nuts & Seeds"),
    ("Walnuts", "Nuts & Seeds"),
    ("Cashews", "Nuts & Seeds"),
    ("Pistachios", "Nuts & Seeds"),
    ("Pecans", "Nuts & Seeds"),
    ("Macadamias", "Nuts & Seeds"),
    ("Hazelnuts", "Nuts & Seeds"),
    ("Brazil Nuts", "Nuts & Seeds"),
    ("Peanuts", "Nuts & Seeds"),
    ("Chia Seeds", "Nuts & Seeds"),
    ("Flaxseeds", "Nuts & Seeds"),
    ("Pumpkin Seeds", "Nuts & Seeds"),
    ("Sunflower Seeds", "Nuts & Seeds"),
    ("Sesame Seeds", "Nuts & Seeds"),
    // Herbs & Spices
    ("Basil", "Herbs & Spices"),
    ("Parsley", "Herbs & Spices"),
    ("Coriander", "Herbs & Spices"),
    ("Mint", "Herbs & Spices"),
    ("Rosemary", "Herbs & Spices"),
    ("Thyme", "Herbs & Spices"),
    ("Oregano", "Herbs & Spices"),
    ("Sage", "Herbs & Spices"),
    ("Dill", "Herbs & Spices"),
    ("Chives", "Herbs & Spices"),
    ("Ginger", "Herbs & Spices"),
    ("Turmeric", "Herbs & Spices"),
    ("Cinnamon", "Herbs & Spices"),
    ("Cumin", "Herbs & Spices"),
    ("Paprika", "Herbs & Spices"),
    ("Black Pepper", "Herbs & Spices"),
    ("Chilli", "Herbs & Spices"),
    ("Cardamom", "Herbs & Spices"),
    ("Cloves", "Herbs & Spices"),
    ("Nutmeg", "Herbs & Spices"),
];

/// A known food plant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,
    pub category: String,
}

/// The live set of known plants for a session
///
/// Invariant: no two entries share a name under trimmed, case-insensitive
/// comparison. Insertion order is preserved for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantCatalog {
    plants: Vec<Plant>,
}

fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl PlantCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the built-in default list
    pub fn defaults() -> Self {
        PlantCatalog {
            plants: DEFAULT_PLANTS
                .iter()
                .map(|(name, category)| Plant {
                    name: (*name).to_string(),
                    category: (*category).to_string(),
                })
                .collect(),
        }
    }

    /// Add a plant.
    ///
    /// The name is trimmed; a blank name or a case-insensitive duplicate is
    /// rejected. A missing or blank category falls back to
    /// [`UNCATEGORIZED`]; any explicitly supplied category is accepted as
    /// free text.
    pub fn add_plant(&mut self, name: &str, category: Option<&str>) -> Result<Plant> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.contains(name) {
            return Err(Error::DuplicatePlant(name.to_string()));
        }
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);
        let plant = Plant {
            name: name.to_string(),
            category: category.to_string(),
        };
        self.plants.push(plant.clone());
        Ok(plant)
    }

    /// Replace the live catalog with the built-in defaults, discarding all
    /// user-added and imported entries. Irreversible within the session.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::defaults();
    }

    /// Category of `name` in the built-in default list, independent of the
    /// live catalog. Used when upgrading legacy persisted entries.
    pub fn lookup_category(name: &str) -> Option<&'static str> {
        let folded = fold_name(name);
        DEFAULT_PLANTS
            .iter()
            .find(|(n, _)| n.to_lowercase() == folded)
            .map(|(_, category)| *category)
    }

    /// Case-insensitive trimmed membership test
    pub fn contains(&self, name: &str) -> bool {
        let folded = fold_name(name);
        self.plants.iter().any(|p| fold_name(&p.name) == folded)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plant> {
        self.plants.iter()
    }

    /// The persisted shape: the full entry list in insertion order
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Distinct category names in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for plant in &self.plants {
            if !seen.contains(&plant.category.as_str()) {
                seen.push(plant.category.as_str());
            }
        }
        seen
    }
}
