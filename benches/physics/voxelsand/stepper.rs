use criterion::{black_box, criterion_group, BatchSize, Criterion};
use voxel_automata::physics::voxelsand::config::{RuleConfigBuilder, WaterModel};
use voxel_automata::physics::voxelsand::data::voxel_grid::VoxelGrid;
use voxel_automata::physics::voxelsand::stepper::{Stepper, StepperBuilder};
use voxel_automata::physics::voxelsand::terrain::{BasinTerrainBuilder, SandPile, Terrain};
use voxel_automata::physics::voxelsand::util::vectors::XyzVector;

/// The default basin scene for benchmarking
fn get_basin(size: usize) -> VoxelGrid {
    let mut grid = VoxelGrid::new(size, size, size).unwrap();
    BasinTerrainBuilder::new().build().apply(&mut grid).unwrap();
    SandPile::new(
        XyzVector::new(size / 4, size * 3 / 4, size / 4),
        (size / 4, size / 4, size / 4),
    )
    .apply(&mut grid)
    .unwrap();
    grid
}

fn get_stepper(model: WaterModel) -> Stepper {
    StepperBuilder::new()
        .seed(0)
        .config(RuleConfigBuilder::new().water_model(model).build().unwrap())
        .build()
}

fn bench_step_equalization(c: &mut Criterion) {
    let grid = get_basin(32);
    let mut stepper = get_stepper(WaterModel::Equalization);
    c.bench_function("step_equalization_32", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut grid| stepper.step(black_box(&mut grid)),
            BatchSize::LargeInput,
        )
    });
}

fn bench_step_displacement(c: &mut Criterion) {
    let grid = get_basin(32);
    let mut stepper = get_stepper(WaterModel::Displacement);
    c.bench_function("step_displacement_32", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut grid| stepper.step(black_box(&mut grid)),
            BatchSize::LargeInput,
        )
    });
}

/// A scene that has already settled, which is what most frames look like
fn bench_step_settled(c: &mut Criterion) {
    let mut grid = get_basin(32);
    let mut stepper = get_stepper(WaterModel::Equalization);
    for _ in 0..100 {
        stepper.step(&mut grid);
    }
    c.bench_function("step_settled_32", |b| {
        b.iter(|| stepper.step(black_box(&mut grid)))
    });
}

criterion_group!(
    benches,
    bench_step_equalization,
    bench_step_displacement,
    bench_step_settled
);
