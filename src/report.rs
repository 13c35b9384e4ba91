//! Rendering of factory reports, production trees and the recipe catalog

use std::fmt;

use anyhow::Result;

use crate::calculator::{FactoryReport, Resolution};
use crate::catalog::Catalog;

impl fmt::Display for FactoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Production Summary ===")?;
        writeln!(f, "Target: {} @ {}/min", self.target, self.goal_rate)?;
        writeln!(f)?;

        if !self.raw_materials.is_empty() {
            writeln!(f, "Raw Materials:")?;
            for line in &self.raw_materials {
                writeln!(f, "\t{}: {}/min", line.item, line.rate)?;
            }
            writeln!(f)?;
        }

        if !self.byproducts.is_empty() {
            writeln!(f, "Byproducts:")?;
            for line in &self.byproducts {
                writeln!(f, "\t{}: {}/min", line.item, line.rate)?;
            }
            writeln!(f)?;
        }

        for group in &self.factories {
            writeln!(f, "{}:", group.category)?;
            for line in &group.lines {
                writeln!(
                    f,
                    "\t{}: {}/min, {} factories",
                    line.item, line.rate, line.factories
                )?;
            }
            writeln!(f, "\tTotal factories ~: {}", group.total_factories)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

pub fn to_json(report: &FactoryReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Format the depth-first expansion as an indented tree
pub fn format_production_tree(resolution: &Resolution) -> String {
    let mut output = String::new();

    for step in &resolution.steps {
        let prefix = "  ".repeat(step.depth);
        match step.producers {
            Some(count) => output.push_str(&format!(
                "{}{:.2}x {} @ {:.3}/min\n",
                prefix, count, step.item, step.rate
            )),
            None => output.push_str(&format!(
                "{}-> {} @ {:.3}/min (raw input)\n",
                prefix, step.item, step.rate
            )),
        }
    }

    output
}

/// Table of every produced item's active recipe
pub fn format_catalog(catalog: &Catalog) -> String {
    let mut output = format!(
        "{:<20} {:<18} {:>8}  {}\n",
        "Item", "Building", "Out/min", "Ingredients"
    );
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for item in catalog.items() {
        let Some(recipe) = &item.recipe else {
            continue;
        };
        let mut ingredients = recipe
            .ingredients
            .iter()
            .map(|(name, rate)| format!("{name} {rate}"))
            .collect::<Vec<_>>()
            .join(", ");
        if let Some(rate) = recipe.byproduct_rate {
            ingredients.push_str(&format!(" (+{} {})", rate, catalog.byproduct()));
        }
        output.push_str(&format!(
            "{:<20} {:<18} {:>8}  {}\n",
            item.name, item.category, recipe.output_rate, ingredients
        ));
    }

    let raws: Vec<_> = catalog
        .items()
        .filter(|i| i.is_raw())
        .map(|i| i.name.as_str())
        .collect();
    output.push_str(&format!("\nRaw materials: {}\n", raws.join(", ")));

    let rares: Vec<_> = catalog.rare_names().collect();
    output.push_str(&format!("Rare variants: {}\n", rares.join(", ")));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{resolve, summarize};
    use crate::catalog::RareSelection;
    use crate::data::dyson_sphere_program;

    #[test]
    fn text_report_lists_blocks_in_order() {
        let catalog = dyson_sphere_program().unwrap();
        let res = resolve(&catalog, "refined_oil", 30.0, false).unwrap();
        let text = summarize(&catalog, &res).to_string();

        assert!(text.contains("Target: refined_oil @ 30/min"));
        assert!(text.contains("Raw Materials:\n\tcrude: 30/min\n"));
        assert!(text.contains("Byproducts:\n\thydrogen: 15/min\n"));
        assert!(text.contains("Refinery:\n\trefined_oil: 30/min, 1 factories\n"));
        assert!(text.contains("\tTotal factories ~: 1\n"));
        assert!(!text.contains("Smelter"));

        let raw = text.find("Raw Materials").unwrap();
        let by = text.find("Byproducts").unwrap();
        let refinery = text.find("Refinery:").unwrap();
        assert!(raw < by && by < refinery);
    }

    #[test]
    fn ignored_byproduct_block_is_omitted() {
        let catalog = dyson_sphere_program().unwrap();
        let res = resolve(&catalog, "refined_oil", 30.0, true).unwrap();
        assert!(!summarize(&catalog, &res).to_string().contains("Byproducts"));
    }

    #[test]
    fn json_report_has_groups() {
        let catalog = dyson_sphere_program().unwrap();
        let res = resolve(&catalog, "magnetic_coil", 180.0, true).unwrap();
        let json = to_json(&summarize(&catalog, &res)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["target"], "magnetic_coil");
        assert_eq!(value["factories"][0]["category"], "smelter");
        assert_eq!(value["factories"][0]["total_factories"], 7);
        assert_eq!(value["factories"][1]["category"], "assembler");
        assert_eq!(value["raw_materials"][0]["item"], "iron");
    }

    #[test]
    fn production_tree_indents_by_depth() {
        let catalog = dyson_sphere_program().unwrap();
        let res = resolve(&catalog, "steel", 20.0, false).unwrap();
        assert_eq!(
            format_production_tree(&res),
            "1.00x steel @ 20.000/min\n\
             \x20 1.00x iron_ingot @ 60.000/min\n\
             \x20   -> iron @ 60.000/min (raw input)\n"
        );
    }

    #[test]
    fn catalog_listing_reflects_rares() {
        let catalog = dyson_sphere_program().unwrap();
        let listing = format_catalog(&catalog);
        assert!(listing.contains("refined_oil"));
        assert!(listing.contains("(+15 hydrogen)"));
        assert!(!listing.contains("kimberlite 40"));

        let rare = format_catalog(&catalog.with_rares(&RareSelection::All));
        assert!(rare.contains("kimberlite 40"));
        assert!(listing.contains("Rare variants: kimberlite, spiniform, optical, fractal, unipolar"));
    }
}
