//! Built-in Dyson Sphere Program recipe table
//!
//! Rates are items per minute for one reference building. Assemblers are
//! assumed to be Mk III. See the DSP wiki recipe quick reference for sources.

use crate::catalog::Catalog;
use crate::error::CalcError;
use crate::models::Category::{
    Assembler, ChemicalPlant, MatrixLab, ParticleCollider, RayReceiver, Refinery, Smelter,
};
use crate::models::Recipe;

/// Every raw material the game mines or pumps. Deuterium is treated as raw
/// (gas giant collectors or fractionators) since no recipe is tracked for it.
const RAW_MATERIALS: [&str; 17] = [
    "iron", "copper", "stone", "coal", "silicon", "titanium", "water", "sulfur", "crude",
    "hydrogen", "fire_ice", "kimberlite", "fractal", "optical", "spiniform", "unipolar",
    "deuterium",
];

pub fn dyson_sphere_program() -> Result<Catalog, CalcError> {
    let builder = RAW_MATERIALS
        .iter()
        .fold(Catalog::builder("hydrogen"), |b, name| b.raw(*name));

    builder
        // Smelter
        .recipe("magnet", Smelter, Recipe::new(40.0, [("iron", 40.0)]))
        .recipe("iron_ingot", Smelter, Recipe::new(60.0, [("iron", 60.0)]))
        .recipe("steel", Smelter, Recipe::new(20.0, [("iron_ingot", 60.0)]))
        .recipe("copper_ingot", Smelter, Recipe::new(60.0, [("copper", 60.0)]))
        .recipe("titanium_ingot", Smelter, Recipe::new(30.0, [("titanium", 60.0)]))
        .recipe("bricks", Smelter, Recipe::new(60.0, [("stone", 60.0)]))
        .recipe("glass", Smelter, Recipe::new(30.0, [("stone", 60.0)]))
        .recipe("silicon_ingot", Smelter, Recipe::new(30.0, [("silicon", 60.0)]))
        .recipe("silicon_crystal", Smelter, Recipe::new(30.0, [("silicon_ingot", 60.0)]))
        .recipe("graphite", Smelter, Recipe::new(30.0, [("coal", 60.0)]))
        .recipe("crystal", Smelter, Recipe::new(30.0, [("graphite", 30.0)]))
        .recipe(
            "titanium_steel",
            Smelter,
            Recipe::new(20.0, [("titanium_ingot", 20.0), ("steel", 20.0), ("sulfur", 40.0)]),
        )
        // Refinery
        .recipe(
            "refined_oil",
            Refinery,
            Recipe::new(30.0, [("crude", 30.0)]).with_byproduct(15.0),
        )
        // Chemical plant
        .recipe(
            "plastic",
            ChemicalPlant,
            Recipe::new(20.0, [("refined_oil", 40.0), ("graphite", 20.0)]),
        )
        .recipe(
            "organic_crystal",
            ChemicalPlant,
            Recipe::new(10.0, [("plastic", 20.0), ("refined_oil", 10.0), ("graphite", 10.0)]),
        )
        .recipe(
            "graphene",
            ChemicalPlant,
            Recipe::new(60.0, [("fire_ice", 60.0)]).with_byproduct(30.0),
        )
        .recipe(
            "carbon_nanotube",
            ChemicalPlant,
            Recipe::new(30.0, [("graphene", 45.0), ("titanium_ingot", 15.0)]),
        )
        // Particle collider
        .recipe(
            "strange_matter",
            ParticleCollider,
            Recipe::new(
                7.5,
                [("particle_container", 15.0), ("iron_ingot", 15.0), ("deuterium", 75.0)],
            ),
        )
        .recipe(
            "antimatter",
            ParticleCollider,
            Recipe::new(60.0, [("critical_photon", 60.0)]).with_byproduct(60.0),
        )
        // Ray receiver, boosted with graviton lenses only
        .recipe(
            "critical_photon",
            RayReceiver,
            Recipe::new(16.0, [("graviton_lens", 0.25)]),
        )
        // Assembler
        .recipe(
            "magnetic_coil",
            Assembler,
            Recipe::new(180.0, [("magnet", 180.0), ("copper_ingot", 90.0)]),
        )
        .recipe(
            "electric_motor",
            Assembler,
            Recipe::new(
                45.0,
                [("magnetic_coil", 45.0), ("gears", 45.0), ("iron_ingot", 90.0)],
            ),
        )
        .recipe("gears", Assembler, Recipe::new(90.0, [("iron_ingot", 90.0)]))
        .recipe(
            "electric_turbine",
            Assembler,
            Recipe::new(45.0, [("electric_motor", 90.0), ("magnetic_coil", 90.0)]),
        )
        .recipe(
            "super_mag_ring",
            Assembler,
            Recipe::new(
                30.0,
                [("electric_turbine", 60.0), ("magnet", 90.0), ("graphite", 30.0)],
            ),
        )
        .recipe("prism", Assembler, Recipe::new(90.0, [("glass", 135.0)]))
        .recipe(
            "photon_combiner",
            Assembler,
            Recipe::new(30.0, [("prism", 60.0), ("circuit", 30.0)]),
        )
        .recipe(
            "plasm_exciter",
            Assembler,
            Recipe::new(45.0, [("prism", 90.0), ("magnetic_coil", 180.0)]),
        )
        .recipe(
            "circuit",
            Assembler,
            Recipe::new(180.0, [("iron_ingot", 180.0), ("copper_ingot", 90.0)]),
        )
        .recipe(
            "titanium_crystal",
            Assembler,
            Recipe::new(22.5, [("titanium_ingot", 67.5), ("organic_crystal", 22.5)]),
        )
        .recipe(
            "graviton_lens",
            Assembler,
            Recipe::new(15.0, [("crystal", 60.0), ("strange_matter", 15.0)]),
        )
        .recipe(
            "processor",
            Assembler,
            Recipe::new(30.0, [("circuit", 60.0), ("microcrystaline", 60.0)]),
        )
        .recipe(
            "casamir_crystal",
            Assembler,
            Recipe::new(
                22.5,
                [("titanium_crystal", 22.5), ("graphene", 45.0), ("hydrogen", 270.0)],
            ),
        )
        .recipe(
            "titanium_glass",
            Assembler,
            Recipe::new(36.0, [("glass", 36.0), ("titanium_ingot", 36.0), ("water", 36.0)]),
        )
        .recipe(
            "plane_filter",
            Assembler,
            Recipe::new(7.5, [("titanium_glass", 15.0), ("casamir_crystal", 7.5)]),
        )
        .recipe(
            "particle_container",
            Assembler,
            Recipe::new(
                22.5,
                [("electric_turbine", 45.0), ("graphene", 45.0), ("copper_ingot", 45.0)],
            ),
        )
        .recipe(
            "deuteron_fuel",
            Assembler,
            Recipe::new(
                15.0,
                [("titanium_steel", 7.5), ("super_mag_ring", 7.5), ("deuterium", 150.0)],
            ),
        )
        .recipe(
            "quantum_chip",
            Assembler,
            Recipe::new(15.0, [("processor", 30.0), ("plane_filter", 30.0)]),
        )
        .recipe(
            "particle_broadband",
            Assembler,
            Recipe::new(
                11.25,
                [("carbon_nanotube", 22.5), ("silicon_crystal", 22.5), ("plastic", 11.25)],
            ),
        )
        .recipe(
            "microcrystaline",
            Assembler,
            Recipe::new(45.0, [("silicon_ingot", 90.0), ("copper_ingot", 45.0)]),
        )
        .recipe(
            "foundations",
            Assembler,
            Recipe::new(90.0, [("bricks", 270.0), ("steel", 90.0)]),
        )
        .recipe(
            "hydrogen_fuel",
            Assembler,
            Recipe::new(30.0, [("titanium_ingot", 15.0), ("hydrogen", 150.0)]),
        )
        .recipe(
            "antimatter_fuel",
            Assembler,
            Recipe::new(
                7.5,
                [
                    ("titanium_steel", 3.75),
                    ("annihilation", 3.75),
                    ("hydrogen", 45.0),
                    ("antimatter", 45.0),
                ],
            ),
        )
        .recipe(
            "annihilation",
            Assembler,
            Recipe::new(4.5, [("particle_container", 4.5), ("processor", 4.5)]),
        )
        .recipe(
            "reinforced_thrust",
            Assembler,
            Recipe::new(15.0, [("titanium_steel", 75.0), ("electric_turbine", 75.0)]),
        )
        .recipe(
            "thruster",
            Assembler,
            Recipe::new(22.5, [("copper_ingot", 67.5), ("steel", 45.0)]),
        )
        .recipe("space_warper", Assembler, Recipe::new(9.0, [("graviton_lens", 9.0)]))
        .recipe(
            "logistics_vessel",
            Assembler,
            Recipe::new(
                15.0,
                [("titanium_steel", 150.0), ("processor", 150.0), ("reinforced_thrust", 30.0)],
            ),
        )
        .recipe(
            "logistics_drone",
            Assembler,
            Recipe::new(
                22.5,
                [("iron_ingot", 112.5), ("processor", 45.0), ("thruster", 45.0)],
            ),
        )
        .recipe(
            "solar_sail",
            Assembler,
            Recipe::new(45.0, [("graphene", 22.5), ("photon_combiner", 22.5)]),
        )
        .recipe(
            "sphere_component",
            Assembler,
            Recipe::new(
                11.25,
                [("frame_material", 33.75), ("solar_sail", 33.75), ("processor", 33.75)],
            ),
        )
        .recipe(
            "frame_material",
            Assembler,
            Recipe::new(
                15.0,
                [("carbon_nanotube", 60.0), ("titanium_steel", 15.0), ("silicon_ingot", 15.0)],
            ),
        )
        .recipe(
            "carrier_rocket",
            Assembler,
            Recipe::new(
                15.0,
                [("sphere_component", 30.0), ("deuteron_fuel", 60.0), ("quantum_chip", 30.0)],
            ),
        )
        // Matrix lab
        .recipe(
            "blue_matrix",
            MatrixLab,
            Recipe::new(20.0, [("magnetic_coil", 20.0), ("circuit", 20.0)]),
        )
        .recipe(
            "red_matrix",
            MatrixLab,
            Recipe::new(10.0, [("graphite", 20.0), ("hydrogen", 20.0)]),
        )
        .recipe(
            "yellow_matrix",
            MatrixLab,
            Recipe::new(7.5, [("crystal", 7.5), ("titanium_crystal", 7.5)]),
        )
        .recipe(
            "purple_matrix",
            MatrixLab,
            Recipe::new(6.0, [("processor", 12.0), ("particle_broadband", 6.0)]),
        )
        .recipe(
            "green_matrix",
            MatrixLab,
            Recipe::new(5.0, [("graviton_lens", 2.5), ("quantum_chip", 2.5)]),
        )
        .recipe(
            "universe_matrix",
            MatrixLab,
            Recipe::new(
                4.0,
                [
                    ("blue_matrix", 4.0),
                    ("red_matrix", 4.0),
                    ("yellow_matrix", 4.0),
                    ("purple_matrix", 4.0),
                    ("green_matrix", 4.0),
                    ("antimatter", 4.0),
                ],
            ),
        )
        // Rare-material replacements
        .rare_variant("kimberlite", "crystal", Recipe::new(80.0, [("kimberlite", 40.0)]))
        .rare_variant("spiniform", "carbon_nanotube", Recipe::new(30.0, [("spiniform", 30.0)]))
        .rare_variant(
            "optical",
            "photon_combiner",
            Recipe::new(30.0, [("optical", 30.0), ("circuit", 30.0)]),
        )
        .rare_variant(
            "optical",
            "casamir_crystal",
            Recipe::new(22.5, [("optical", 90.0), ("graphene", 45.0), ("hydrogen", 270.0)]),
        )
        .rare_variant("fractal", "silicon_crystal", Recipe::new(120.0, [("fractal", 60.0)]))
        .rare_variant(
            "unipolar",
            "particle_container",
            Recipe::new(22.5, [("unipolar", 225.0), ("copper_ingot", 45.0)]),
        )
        .build()
}
