//! Advances the whole grid by one tick.
//!
//! # Ordering
//! The grid is mutated in place while it is being swept, so the visiting order matters.
//! Layers go bottom to top, then x, then z. Because lower layers move first, a falling
//! column opens up from the bottom and every grain in it drops exactly one cell per tick.
//! The floor layer (y = 0) is never visited, nothing there has anywhere to fall.
//!
//! Each visited cell that holds sand or water and has not already moved this tick is
//! handed to its rule. A rule marks whatever it moved into, so nothing is relocated
//! twice in the same tick.

use bevy::log::{debug, trace};
use itertools::iproduct;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::RuleConfig;
use super::data::voxel_grid::VoxelGrid;
use super::elements::element::{RuleContext, RuleOutcome};
use super::elements::material::{Material, MaterialTable};
use super::elements::sand::sand_process;
use super::elements::water::water_process;
use super::util::vectors::XyzVector;

/// Tally of what the rules did during one step
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepStats {
    pub relocations: usize,
    pub transfers: usize,
    pub stationary: usize,
}

impl StepStats {
    fn record(&mut self, outcome: RuleOutcome) {
        match outcome {
            RuleOutcome::Relocated => self.relocations += 1,
            RuleOutcome::Transferred => self.transfers += 1,
            RuleOutcome::Stationary => self.stationary += 1,
        }
    }

    /// How many cells were handed to a rule
    pub fn processed(&self) -> usize {
        self.relocations + self.transfers + self.stationary
    }
}

/// Owns everything the rules need except the grid itself
/// The grid is passed to [Stepper::step] by mutable reference, so nothing else can touch
/// it while a step runs.
#[derive(Debug, Clone)]
pub struct Stepper<R: Rng = StdRng> {
    config: RuleConfig,
    materials: MaterialTable,
    rng: R,
    steps: u64,
    last_stats: StepStats,
}

impl<R: Rng> Stepper<R> {
    /// Build a stepper around any random source
    pub fn with_rng(config: RuleConfig, materials: MaterialTable, rng: R) -> Self {
        debug!("Creating stepper with {:?}", config);
        Self {
            config,
            materials,
            rng,
            steps: 0,
            last_stats: StepStats::default(),
        }
    }

    /// Advance the grid by one tick
    pub fn step(&mut self, grid: &mut VoxelGrid) {
        grid.reset_moved_flags();

        let dims = grid.dimensions();
        let mut stats = StepStats::default();
        let mut ctx = RuleContext::new(&self.config, &self.materials, &mut self.rng);
        for (y, x, z) in iproduct!(1..dims.height, 0..dims.width, 0..dims.depth) {
            let pos = XyzVector::new(x, y, z);
            let voxel = *grid.get(pos);
            if voxel.moved_this_tick || !voxel.material.is_dynamic() {
                continue;
            }
            let outcome = match voxel.material {
                Material::Sand => sand_process(grid, pos, &mut ctx),
                _ => water_process(grid, pos, &mut ctx),
            };
            stats.record(outcome);
        }

        self.steps += 1;
        self.last_stats = stats;
        trace!("Step {}: {:?}", self.steps, stats);
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// How many steps have run so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn last_stats(&self) -> StepStats {
        self.last_stats
    }
}

/// Builds a [Stepper] seeded from a number or from entropy
#[derive(Debug, Clone, Default)]
pub struct StepperBuilder {
    seed: Option<u64>,
    config: RuleConfig,
    materials: MaterialTable,
}

impl StepperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the seed so runs are reproducible
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn config(mut self, config: RuleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn materials(mut self, materials: MaterialTable) -> Self {
        self.materials = materials;
        self
    }

    pub fn build(self) -> Stepper<StdRng> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Stepper::with_rng(self.config, self.materials, rng)
    }
}
