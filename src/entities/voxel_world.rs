use std::time::Duration;

use bevy::app::{App, Plugin, Update};
use bevy::ecs::system::{ResMut, Resource};
use bevy::log::debug;
use bevy::prelude::Res;
use bevy::time::Time;

use crate::physics::util::clock::StepClock;
use crate::physics::voxelsand::data::voxel_grid::VoxelGrid;
use crate::physics::voxelsand::stepper::Stepper;

/// A plugin that steps the [VoxelWorld] resource every frame
/// Does nothing until a VoxelWorld has been inserted.
pub struct VoxelSimulationPlugin;

impl Plugin for VoxelSimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, VoxelWorld::process_system);
    }
}

/// The grid together with the stepper and clock that drive it
#[derive(Resource, Debug)]
pub struct VoxelWorld {
    grid: VoxelGrid,
    stepper: Stepper,
    clock: StepClock,
}

impl VoxelWorld {
    pub fn new(grid: VoxelGrid, stepper: Stepper, clock: StepClock) -> Self {
        Self {
            grid,
            stepper,
            clock,
        }
    }

    /// Something to call every frame
    /// Runs however many steps the clock says are due and returns that number
    pub fn process(&mut self, delta: Duration) -> u32 {
        let due = self.clock.advance(delta);
        if due > 1 {
            debug!("Catching up {} steps", due);
        }
        for _ in 0..due {
            self.stepper.step(&mut self.grid);
        }
        due
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// For brushes and other tools that paint between steps
    pub fn grid_mut(&mut self) -> &mut VoxelGrid {
        &mut self.grid
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn clock(&self) -> &StepClock {
        &self.clock
    }
}

/// Bevy Systems
impl VoxelWorld {
    /// Run this system every frame to advance the simulation
    pub fn process_system(world: Option<ResMut<VoxelWorld>>, time: Res<Time>) {
        if let Some(mut world) = world {
            world.process(time.delta());
        }
    }
}
