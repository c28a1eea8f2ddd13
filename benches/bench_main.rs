use criterion::criterion_main;


criterion_main! {
    physics::voxelsand::stepper::benches,
    physics::voxelsand::voxel_grid::benches,
}
