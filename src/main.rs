//! DSP Production Calculator
//!
//! Works out how much of every upstream ingredient, and how many buildings,
//! a target production rate needs in Dyson Sphere Program.

mod calculator;
mod catalog;
mod data;
mod error;
mod models;
mod report;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use crate::catalog::RareSelection;

#[derive(Parser, Debug)]
#[command(name = "dsp-calculator")]
#[command(about = "Production chain calculator for Dyson Sphere Program")]
struct Cli {
    /// Target item to produce (e.g. "magnetic_coil")
    #[arg(short, long, required_unless_present = "list_recipes")]
    product: Option<String>,

    /// Target production rate in items/min
    #[arg(short, long, allow_negative_numbers = true, required_unless_present = "list_recipes")]
    goal: Option<f64>,

    /// Do not count hydrogen byproduct
    #[arg(short, long = "ignore_byproduct")]
    ignore_byproduct: bool,

    /// Use rare-material recipes: "all" or a comma-separated list
    /// (kimberlite, spiniform, optical, fractal, unipolar)
    #[arg(short = 'r', long = "use_rares", value_name = "RARES")]
    use_rares: Option<RareSelection>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Show the production tree and debug logs
    #[arg(short, long)]
    verbose: bool,

    /// List every recipe (after rare substitution) and exit
    #[arg(long)]
    list_recipes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let output = run(&cli)?;
    print!("{}", output);

    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let mut catalog = data::dyson_sphere_program().context("built-in recipe table is invalid")?;
    if let Some(rares) = &cli.use_rares {
        catalog = catalog.with_rares(rares);
    }

    if cli.list_recipes {
        return Ok(report::format_catalog(&catalog));
    }

    let (Some(product), Some(goal)) = (cli.product.as_deref(), cli.goal) else {
        bail!("--product and --goal are required");
    };

    let resolution = calculator::resolve(&catalog, product, goal, cli.ignore_byproduct)
        .with_context(|| format!("Failed to resolve {} @ {}/min", product, goal))?;
    info!(
        product = %resolution.target,
        goal = resolution.goal_rate,
        nodes = resolution.steps.len(),
        byproduct = resolution.byproduct,
        "resolved production chain"
    );

    let summary = calculator::summarize(&catalog, &resolution);

    let mut output = String::new();
    if cli.json {
        output.push_str(&report::to_json(&summary)?);
        output.push('\n');
    } else {
        if cli.verbose {
            output.push_str("Production chain:\n\n");
            output.push_str(&report::format_production_tree(&resolution));
            output.push('\n');
        }
        output.push_str(&summary.to_string());
    }

    Ok(output)
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("dsp_calculator=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dsp-calculator").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn parses_reference_flags() {
        let cli = parse(&[
            "--product",
            "magnetic_coil",
            "--goal",
            "180",
            "--ignore_byproduct",
            "--use_rares",
            "optical,fractal",
        ]);
        assert_eq!(cli.product.as_deref(), Some("magnetic_coil"));
        assert_eq!(cli.goal, Some(180.0));
        assert!(cli.ignore_byproduct);
        assert_eq!(
            cli.use_rares,
            Some(RareSelection::Only(vec!["optical".into(), "fractal".into()]))
        );
    }

    #[test]
    fn parses_short_flags() {
        let cli = parse(&["-p", "refined_oil", "-g", "30", "-i", "-r", "all"]);
        assert_eq!(cli.product.as_deref(), Some("refined_oil"));
        assert!(cli.ignore_byproduct);
        assert_eq!(cli.use_rares, Some(RareSelection::All));
    }

    #[test]
    fn product_and_goal_required_unless_listing() {
        assert!(Cli::try_parse_from(["dsp-calculator", "--goal", "10"]).is_err());
        assert!(Cli::try_parse_from(["dsp-calculator", "--product", "gears"]).is_err());

        let output = run(&parse(&["--list-recipes"])).unwrap();
        assert!(output.contains("universe_matrix"));
    }

    #[test]
    fn run_renders_text_and_json() {
        let text = run(&parse(&["-p", "iron_ingot", "-g", "60"])).unwrap();
        assert!(text.contains("Smelter:\n\tiron_ingot: 60/min, 1 factories\n"));

        let json = run(&parse(&["-p", "iron_ingot", "-g", "60", "--json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["raw_materials"][0]["rate"], 60.0);
    }

    #[test]
    fn verbose_prepends_tree() {
        let text = run(&parse(&["-p", "gears", "-g", "90", "-v"])).unwrap();
        assert!(text.starts_with("Production chain:\n\n1.00x gears"));
    }

    #[test]
    fn run_rejects_bad_input() {
        let err = run(&parse(&["-p", "gears", "-g", "-5"])).unwrap_err();
        assert!(format!("{:#}", err).contains("goal rate must be a positive"));

        let err = run(&parse(&["-p", "warp_drive", "-g", "5"])).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown item 'warp_drive'"));
    }
}
