//! Production chain calculator logic

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CalcError;
use crate::models::{Category, Item};

/// Required rate (items/min) per item, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DemandTable(IndexMap<String, f64>);

impl DemandTable {
    fn zeroed(catalog: &Catalog) -> Self {
        Self(catalog.items().map(|i| (i.name.clone(), 0.0)).collect())
    }

    fn add(&mut self, item: &str, rate: f64) {
        *self.0.entry(item.to_string()).or_default() += rate;
    }

    pub fn rate(&self, item: &str) -> f64 {
        self.0.get(item).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries with strictly positive demand.
    pub fn positive(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter().filter(|(_, rate)| *rate > 0.0)
    }
}

/// One node visited during expansion, in depth-first order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpansionStep {
    pub depth: usize,
    pub item: String,
    pub rate: f64,
    /// Fractional producer count; `None` for raw materials.
    pub producers: Option<f64>,
}

/// Outcome of a single resolution run.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub target: String,
    pub goal_rate: f64,
    pub demand: DemandTable,
    pub byproduct: f64,
    pub steps: Vec<ExpansionStep>,
}

/// Expand `target` at `goal_rate` items/min through the recipe graph.
///
/// Every transitively required item accumulates its total rate in the
/// returned [`DemandTable`]. The result is linear in `goal_rate`. A raw
/// material target is valid and yields a single entry.
pub fn resolve(
    catalog: &Catalog,
    target: &str,
    goal_rate: f64,
    ignore_byproduct: bool,
) -> Result<Resolution, CalcError> {
    if !(goal_rate.is_finite() && goal_rate > 0.0) {
        return Err(CalcError::InvalidGoal { goal: goal_rate });
    }
    let item = catalog.item(target).ok_or_else(|| CalcError::UnknownItem {
        name: target.to_string(),
    })?;

    let mut run = Run {
        catalog,
        ignore_byproduct,
        demand: DemandTable::zeroed(catalog),
        byproduct: 0.0,
        steps: Vec::new(),
        path: Vec::new(),
    };
    run.expand(item, goal_rate)?;

    Ok(Resolution {
        target: target.to_string(),
        goal_rate,
        demand: run.demand,
        byproduct: run.byproduct,
        steps: run.steps,
    })
}

struct Run<'a> {
    catalog: &'a Catalog,
    ignore_byproduct: bool,
    demand: DemandTable,
    byproduct: f64,
    steps: Vec<ExpansionStep>,
    /// Items currently being expanded, root first.
    path: Vec<&'a str>,
}

impl<'a> Run<'a> {
    fn expand(&mut self, item: &'a Item, rate: f64) -> Result<(), CalcError> {
        let depth = self.path.len();

        let Some(recipe) = &item.recipe else {
            self.demand.add(&item.name, rate);
            self.steps.push(ExpansionStep {
                depth,
                item: item.name.clone(),
                rate,
                producers: None,
            });
            return Ok(());
        };

        if self.path.contains(&item.name.as_str()) {
            let mut path: Vec<String> = self.path.iter().map(|s| s.to_string()).collect();
            path.push(item.name.clone());
            return Err(CalcError::CyclicRecipe { path });
        }

        let multiplier = rate / recipe.output_rate;
        debug!(item = %item.name, rate, producers = multiplier, "expanding recipe");

        self.demand.add(&item.name, rate);
        self.steps.push(ExpansionStep {
            depth,
            item: item.name.clone(),
            rate,
            producers: Some(multiplier),
        });
        if let Some(byproduct_rate) = recipe.byproduct_rate
            && !self.ignore_byproduct
        {
            self.byproduct += multiplier * byproduct_rate;
        }
        if recipe.is_terminal() {
            return Ok(());
        }

        let catalog = self.catalog;
        self.path.push(&item.name);
        for (ingredient, per_producer) in &recipe.ingredients {
            let next = catalog
                .item(ingredient)
                .ok_or_else(|| CalcError::UnknownIngredient {
                    name: ingredient.clone(),
                    required_by: item.name.clone(),
                })?;
            self.expand(next, multiplier * per_producer)?;
        }
        self.path.pop();

        Ok(())
    }
}

/// Demand for a single item that is not built by a factory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateLine {
    pub item: String,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactoryLine {
    pub item: String,
    pub rate: f64,
    /// Exact, possibly fractional, number of buildings.
    pub factories: f64,
    pub rounded: u64,
}

/// All positive-demand items made by one kind of building.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactoryGroup {
    pub category: Category,
    pub lines: Vec<FactoryLine>,
    /// Sum of per-item ceilings; a building runs exactly one recipe.
    pub total_factories: u64,
}

impl FactoryGroup {
    fn new(category: Category, lines: Vec<FactoryLine>) -> Self {
        let total_factories = lines.iter().map(|l| l.rounded).sum();
        Self {
            category,
            lines,
            total_factories,
        }
    }
}

/// Summary of a production chain calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactoryReport {
    pub target: String,
    pub goal_rate: f64,
    pub raw_materials: Vec<RateLine>,
    pub byproducts: Vec<RateLine>,
    pub factories: Vec<FactoryGroup>,
}

/// Group a resolution's positive demand by building type and count factories.
///
/// `catalog` must be the one the resolution ran against, so that rare
/// recipes are counted at their own output rates.
pub fn summarize(catalog: &Catalog, resolution: &Resolution) -> FactoryReport {
    let mut raw_materials = Vec::new();
    let mut groups: IndexMap<Category, Vec<FactoryLine>> = Category::PRODUCERS
        .iter()
        .map(|c| (*c, Vec::new()))
        .collect();

    for (name, rate) in resolution.demand.positive() {
        let Some(item) = catalog.item(name) else {
            continue;
        };
        match &item.recipe {
            None => raw_materials.push(RateLine {
                item: name.to_string(),
                rate,
            }),
            Some(recipe) => {
                let factories = rate / recipe.output_rate;
                groups.entry(item.category).or_default().push(FactoryLine {
                    item: name.to_string(),
                    rate,
                    factories,
                    rounded: factories.ceil() as u64,
                });
            }
        }
    }

    let byproducts = if resolution.byproduct > 0.0 {
        vec![RateLine {
            item: catalog.byproduct().to_string(),
            rate: resolution.byproduct,
        }]
    } else {
        Vec::new()
    };

    FactoryReport {
        target: resolution.target.clone(),
        goal_rate: resolution.goal_rate,
        raw_materials,
        byproducts,
        factories: groups
            .into_iter()
            .filter(|(_, lines)| !lines.is_empty())
            .map(|(category, lines)| FactoryGroup::new(category, lines))
            .collect(),
    }
}
