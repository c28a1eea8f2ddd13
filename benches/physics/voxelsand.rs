pub mod stepper;
pub mod voxel_grid;
