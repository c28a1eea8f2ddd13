use std::error::Error;
use std::time::Duration;

use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::log::{info, Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;

use voxel_automata::entities::voxel_world::{VoxelSimulationPlugin, VoxelWorld};
use voxel_automata::physics::util::clock::StepClock;
use voxel_automata::physics::voxelsand::config::{RuleConfigBuilder, WaterModel};
use voxel_automata::physics::voxelsand::data::voxel_grid::VoxelGrid;
use voxel_automata::physics::voxelsand::elements::material::Material;
use voxel_automata::physics::voxelsand::stepper::StepperBuilder;
use voxel_automata::physics::voxelsand::terrain::{BasinTerrainBuilder, SandPile, Terrain};
use voxel_automata::physics::voxelsand::util::vectors::XyzVector;

/// Run the voxel automaton headless on a basin scene and log what happens
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge length of the cubic grid
    #[arg(long, default_value_t = 32)]
    size: usize,
    /// Seconds between automaton steps
    #[arg(long, default_value_t = 0.1)]
    interval: f32,
    /// Most steps to run in one frame when the app falls behind
    #[arg(long, default_value_t = 4)]
    max_catch_up: u32,
    /// Seed for tie-breaking, drawn from entropy if omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Water flow model, equalization or displacement
    #[arg(long, default_value_t = WaterModel::Equalization)]
    water_model: WaterModel,
    /// Drop a block of sand into the basin
    #[arg(long)]
    sand: bool,
    /// Exit after this many steps
    #[arg(long, default_value_t = 200)]
    steps: u64,
    /// Log a summary every this many steps
    #[arg(long, default_value_t = 20)]
    report_every: u64,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Resource, Debug, Clone, Copy)]
struct RunLimits {
    steps: u64,
    report_every: u64,
}

fn build_world(args: &Args) -> Result<VoxelWorld, Box<dyn Error>> {
    let mut grid = VoxelGrid::new(args.size, args.size, args.size)?;
    BasinTerrainBuilder::new().build().apply(&mut grid)?;
    if args.sand {
        let quarter = args.size / 4;
        SandPile::new(
            XyzVector::new(quarter, args.size - quarter, quarter),
            (quarter, quarter, quarter),
        )
        .apply(&mut grid)?;
    }

    let config = RuleConfigBuilder::new()
        .water_model(args.water_model)
        .build()?;
    let builder = StepperBuilder::new().config(config);
    let stepper = match args.seed {
        Some(seed) => builder.seed(seed),
        None => builder,
    }
    .build();
    let clock = StepClock::new(
        Duration::try_from_secs_f32(args.interval)?,
        args.max_catch_up,
    )?;
    Ok(VoxelWorld::new(grid, stepper, clock))
}

fn report_system(
    world: Res<VoxelWorld>,
    limits: Res<RunLimits>,
    mut last_report: Local<u64>,
    mut exit: EventWriter<AppExit>,
) {
    let steps = world.stepper().steps();
    if steps >= *last_report + limits.report_every.max(1) {
        let grid = world.grid();
        info!(
            "Step {}: {} water, {} sand, total liquid {:.3}, last step {:?}",
            steps,
            grid.count_material(Material::Water),
            grid.count_material(Material::Sand),
            grid.total_liquid(),
            world.stepper().last_stats()
        );
        *last_report = steps;
    }
    if steps >= limits.steps {
        info!("Finished after {} steps", steps);
        exit.send(AppExit);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let world = build_world(&args)?;
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin {
            level,
            ..Default::default()
        })
        .add_plugins(VoxelSimulationPlugin)
        .insert_resource(world)
        .insert_resource(RunLimits {
            steps: args.steps,
            report_every: args.report_every,
        })
        .add_systems(Update, report_system.after(VoxelWorld::process_system))
        .run();
    Ok(())
}
