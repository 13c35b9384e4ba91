//! Data models for DSP items and recipes

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Building type that manufactures an item. Raw materials are mined, not built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RawMaterial,
    Smelter,
    Refinery,
    ChemicalPlant,
    ParticleCollider,
    RayReceiver,
    Assembler,
    MatrixLab,
}

impl Category {
    /// Producer categories in report order.
    pub const PRODUCERS: [Category; 7] = [
        Category::Smelter,
        Category::Refinery,
        Category::ChemicalPlant,
        Category::ParticleCollider,
        Category::RayReceiver,
        Category::Assembler,
        Category::MatrixLab,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::RawMaterial => "Raw Materials",
            Category::Smelter => "Smelter",
            Category::Refinery => "Refinery",
            Category::ChemicalPlant => "Chemical Plant",
            Category::ParticleCollider => "Particle Collider",
            Category::RayReceiver => "Ray Receiver",
            Category::Assembler => "Assembler",
            Category::MatrixLab => "Matrix Lab",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// What one reference producer makes and consumes per minute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub output_rate: f64,
    pub ingredients: IndexMap<String, f64>,
    /// Rate of the catalog's byproduct item, if this recipe yields any.
    pub byproduct_rate: Option<f64>,
}

impl Recipe {
    pub fn new<I, S>(output_rate: f64, ingredients: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            output_rate,
            ingredients: ingredients
                .into_iter()
                .map(|(name, rate)| (name.into(), rate))
                .collect(),
            byproduct_rate: None,
        }
    }

    pub fn with_byproduct(mut self, rate: f64) -> Self {
        self.byproduct_rate = Some(rate);
        self
    }

    /// A recipe with no ingredients ends expansion.
    pub fn is_terminal(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// A catalog entry. Raw materials carry no recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub category: Category,
    pub recipe: Option<Recipe>,
}

impl Item {
    pub fn is_raw(&self) -> bool {
        self.recipe.is_none()
    }
}
