//! Recipe catalog and rare-variant substitution
//!
//! A [`Catalog`] is an immutable value. Swapping in rare recipes produces a
//! new catalog, so several variant selections can be resolved side by side.

use std::convert::Infallible;
use std::str::FromStr;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::CalcError;
use crate::models::{Category, Item, Recipe};

/// Which rare-material variants to swap in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RareSelection {
    All,
    Only(Vec<String>),
}

impl RareSelection {
    fn includes(&self, rare: &str) -> bool {
        match self {
            RareSelection::All => true,
            RareSelection::Only(names) => names.iter().any(|n| n == rare),
        }
    }
}

impl FromStr for RareSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            return Ok(RareSelection::All);
        }
        Ok(RareSelection::Only(
            s.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    byproduct: String,
    items: IndexMap<String, Item>,
    /// Rare material -> (produced item, replacement recipe)
    rares: IndexMap<String, Vec<(String, Recipe)>>,
}

impl Catalog {
    pub fn builder(byproduct: impl Into<String>) -> CatalogBuilder {
        CatalogBuilder {
            byproduct: byproduct.into(),
            items: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn get_recipe(&self, item: &str) -> Option<&Recipe> {
        self.items.get(item).and_then(|i| i.recipe.as_ref())
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// All items in declaration order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// The single byproduct tracked by this catalog.
    pub fn byproduct(&self) -> &str {
        &self.byproduct
    }

    pub fn rare_names(&self) -> impl Iterator<Item = &str> {
        self.rares.keys().map(String::as_str)
    }

    /// Returns a copy of this catalog with the selected rare recipes in place
    /// of the defaults. Names that match no known rare are skipped.
    pub fn with_rares(&self, selection: &RareSelection) -> Catalog {
        if let RareSelection::Only(names) = selection {
            for name in names.iter().filter(|n| !self.rares.contains_key(n.as_str())) {
                warn!(rare = %name, "ignoring unknown rare variant");
            }
        }

        let mut catalog = self.clone();
        for (rare, replacements) in &self.rares {
            if !selection.includes(rare) {
                continue;
            }
            for (target, recipe) in replacements {
                if let Some(item) = catalog.items.get_mut(target) {
                    debug!(%rare, %target, "substituting rare recipe");
                    item.recipe = Some(recipe.clone());
                }
            }
        }
        catalog
    }
}

/// Collects items and variants, then validates them in [`CatalogBuilder::build`].
#[derive(Debug)]
pub struct CatalogBuilder {
    byproduct: String,
    items: Vec<Item>,
    variants: Vec<(String, String, Recipe)>,
}

impl CatalogBuilder {
    pub fn raw(mut self, name: impl Into<String>) -> Self {
        self.items.push(Item {
            name: name.into(),
            category: Category::RawMaterial,
            recipe: None,
        });
        self
    }

    pub fn recipe(mut self, name: impl Into<String>, category: Category, recipe: Recipe) -> Self {
        self.items.push(Item {
            name: name.into(),
            category,
            recipe: Some(recipe),
        });
        self
    }

    /// Registers `recipe` as the replacement for `target` when `rare` is selected.
    pub fn rare_variant(
        mut self,
        rare: impl Into<String>,
        target: impl Into<String>,
        recipe: Recipe,
    ) -> Self {
        self.variants.push((rare.into(), target.into(), recipe));
        self
    }

    pub fn build(self) -> Result<Catalog, CalcError> {
        let mut items = IndexMap::with_capacity(self.items.len());
        for item in self.items {
            if let Some(recipe) = &item.recipe {
                if item.category == Category::RawMaterial {
                    return Err(CalcError::InvalidRecipe {
                        item: item.name,
                        detail: "produced items need a producer category".to_string(),
                    });
                }
                validate_recipe(&item.name, recipe)?;
            }
            if items.contains_key(&item.name) {
                return Err(CalcError::DuplicateItem { name: item.name });
            }
            items.insert(item.name.clone(), item);
        }

        let mut rares: IndexMap<String, Vec<(String, Recipe)>> = IndexMap::new();
        for (rare, target, recipe) in self.variants {
            if !items.get(&target).is_some_and(|i| !i.is_raw()) {
                return Err(CalcError::UnknownVariantTarget { rare, target });
            }
            validate_recipe(&target, &recipe)?;
            rares.entry(rare).or_default().push((target, recipe));
        }

        Ok(Catalog {
            byproduct: self.byproduct,
            items,
            rares,
        })
    }
}

fn validate_recipe(item: &str, recipe: &Recipe) -> Result<(), CalcError> {
    let invalid = |detail: String| CalcError::InvalidRecipe {
        item: item.to_string(),
        detail,
    };

    if !(recipe.output_rate.is_finite() && recipe.output_rate > 0.0) {
        return Err(invalid(format!(
            "output rate must be positive, got {}",
            recipe.output_rate
        )));
    }
    for (ingredient, rate) in &recipe.ingredients {
        if !(rate.is_finite() && *rate >= 0.0) {
            return Err(invalid(format!(
                "ingredient '{ingredient}' has negative or non-finite rate {rate}"
            )));
        }
    }
    if let Some(rate) = recipe.byproduct_rate
        && !(rate.is_finite() && rate >= 0.0)
    {
        return Err(invalid(format!("byproduct rate must be non-negative, got {rate}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn small() -> CatalogBuilder {
        Catalog::builder("hydrogen")
            .raw("iron")
            .raw("kimberlite")
            .recipe("iron_ingot", Category::Smelter, Recipe::new(60.0, [("iron", 60.0)]))
            .recipe("crystal", Category::Smelter, Recipe::new(30.0, [("iron_ingot", 30.0)]))
    }

    #[test]
    fn raw_materials_have_no_recipe() {
        let catalog = small().build().unwrap();
        assert!(catalog.get_recipe("iron").is_none());
        assert!(catalog.item("iron").unwrap().is_raw());
        assert_eq!(catalog.get_recipe("iron_ingot").unwrap().output_rate, 60.0);
        assert!(catalog.item("nothing").is_none());
    }

    #[test]
    fn rejects_non_positive_output_rate() {
        let err = small()
            .recipe("bad", Category::Assembler, Recipe::new(0.0, [("iron", 1.0)]))
            .build()
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidRecipe { item, .. } if item == "bad"));
    }

    #[test]
    fn rejects_negative_ingredient_and_byproduct_rates() {
        let err = small()
            .recipe("bad", Category::Assembler, Recipe::new(1.0, [("iron", -1.0)]))
            .build()
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidRecipe { .. }));

        let err = small()
            .recipe(
                "bad",
                Category::Refinery,
                Recipe::new(1.0, [("iron", 1.0)]).with_byproduct(-2.0),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidRecipe { .. }));
    }

    #[test]
    fn rejects_duplicates_and_raw_category_recipes() {
        let err = small().raw("iron").build().unwrap_err();
        assert_eq!(err, CalcError::DuplicateItem { name: "iron".to_string() });

        let err = small()
            .recipe("odd", Category::RawMaterial, Recipe::new(1.0, [("iron", 1.0)]))
            .build()
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidRecipe { .. }));
    }

    #[test]
    fn variant_must_target_a_produced_item() {
        let err = small()
            .rare_variant("kimberlite", "iron", Recipe::new(1.0, [("kimberlite", 1.0)]))
            .build()
            .unwrap_err();
        assert!(matches!(err, CalcError::UnknownVariantTarget { .. }));
    }

    #[test]
    fn with_rares_replaces_recipe_and_keeps_original() {
        let catalog = small()
            .rare_variant("kimberlite", "crystal", Recipe::new(80.0, [("kimberlite", 40.0)]))
            .build()
            .unwrap();

        let rare = catalog.with_rares(&RareSelection::All);
        let crystal = rare.get_recipe("crystal").unwrap();
        assert_eq!(crystal.output_rate, 80.0);
        assert_eq!(crystal.ingredients.len(), 1);
        assert_eq!(crystal.ingredients["kimberlite"], 40.0);
        assert_eq!(rare.item("crystal").unwrap().category, Category::Smelter);

        // The source catalog is untouched.
        assert_eq!(catalog.get_recipe("crystal").unwrap().output_rate, 30.0);
    }

    #[test]
    fn with_rares_is_idempotent() {
        let catalog = data::dyson_sphere_program().unwrap();
        for selection in [
            RareSelection::All,
            "optical,fractal".parse().unwrap(),
            "unipolar".parse().unwrap(),
        ] {
            let once = catalog.with_rares(&selection);
            let twice = once.with_rares(&selection);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn unknown_rare_names_are_ignored() {
        let catalog = data::dyson_sphere_program().unwrap();
        let selection: RareSelection = "unobtainium".parse().unwrap();
        assert_eq!(catalog.with_rares(&selection), catalog);
    }

    #[test]
    fn selection_only_touches_named_rares() {
        let catalog = data::dyson_sphere_program().unwrap();
        let rare = catalog.with_rares(&"optical".parse().unwrap());

        let combiner = rare.get_recipe("photon_combiner").unwrap();
        assert!(combiner.ingredients.contains_key("optical"));
        let casimir = rare.get_recipe("casamir_crystal").unwrap();
        assert_eq!(casimir.ingredients["optical"], 90.0);
        assert_eq!(
            rare.get_recipe("crystal"),
            catalog.get_recipe("crystal"),
            "kimberlite was not selected"
        );
    }

    #[test]
    fn parses_rare_selection() {
        assert_eq!("all".parse::<RareSelection>().unwrap(), RareSelection::All);
        assert_eq!(
            " optical , fractal,".parse::<RareSelection>().unwrap(),
            RareSelection::Only(vec!["optical".to_string(), "fractal".to_string()])
        );
        assert_eq!(
            "".parse::<RareSelection>().unwrap(),
            RareSelection::Only(Vec::new())
        );
    }
}
