use criterion::{black_box, criterion_group, Criterion};
use voxel_automata::physics::voxelsand::data::voxel_grid::VoxelGrid;
use voxel_automata::physics::voxelsand::elements::material::MaterialTable;
use voxel_automata::physics::voxelsand::terrain::{BasinTerrainBuilder, Terrain};

fn get_grid() -> VoxelGrid {
    let mut grid = VoxelGrid::new(64, 64, 64).unwrap();
    BasinTerrainBuilder::new().build().apply(&mut grid).unwrap();
    grid
}

fn bench_total_liquid(c: &mut Criterion) {
    let grid = get_grid();
    c.bench_function("total_liquid_64", |b| {
        b.iter(|| black_box(&grid).total_liquid())
    });
}

fn bench_rgba_buffer(c: &mut Criterion) {
    let grid = get_grid();
    let table = MaterialTable::default();
    c.bench_function("rgba_buffer_64", |b| {
        b.iter(|| black_box(&grid).rgba_buffer(&table))
    });
}

criterion_group!(benches, bench_total_liquid, bench_rgba_buffer);
