//! This module contains the top level resources and plugins.
//! These glue the physics into a bevy app.

use bevy::app::{PluginGroup, PluginGroupBuilder};

pub mod voxel_world;

pub struct EntitiesPluginGroup;

impl PluginGroup for EntitiesPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>().add(voxel_world::VoxelSimulationPlugin)
    }
}
