//! Displacement flow: water only ever moves as whole cells.
//!
//! A blocked water cell shoves the water in its way one cell further along, up to
//! `push_depth` cells deep, and takes the spot that opened up. Because every move is a
//! swap the grid total never changes.

use rand::Rng;

use crate::physics::voxelsand::data::voxel_grid::VoxelGrid;
use crate::physics::voxelsand::elements::element::{RuleContext, RuleOutcome};
use crate::physics::voxelsand::elements::material::Material;
use crate::physics::voxelsand::util::directions::{shuffled_cardinals, DOWN};
use crate::physics::voxelsand::util::vectors::{XyzOffset, XyzVector};

/// Alternative water behavior once the cell below is known not to be air
pub fn displacement_process<R: Rng + ?Sized>(
    grid: &mut VoxelGrid,
    pos: XyzVector,
    ctx: &mut RuleContext<'_, R>,
) -> RuleOutcome {
    let depth = ctx.config.push_depth;

    // Push the water underneath out of the way and drop into its place
    if let Some(below) = grid.neighbor_matching(pos, DOWN, |v| v.is(Material::Water)) {
        for dir in shuffled_cardinals(&mut *ctx.rng) {
            if try_push(grid, below, dir, depth) {
                grid.swap(pos, below);
                grid.mark_moved(below);
                return RuleOutcome::Relocated;
            }
        }
    }

    let directions = shuffled_cardinals(&mut *ctx.rng);
    for dir in directions {
        if let Some(target) = grid.neighbor_matching(pos, dir, |v| v.is_air()) {
            grid.swap(pos, target);
            grid.mark_moved(target);
            return RuleOutcome::Relocated;
        }
    }
    for dir in directions {
        let Some(target) = grid.neighbor_matching(pos, dir, |v| v.is(Material::Water)) else {
            continue;
        };
        if try_push(grid, target, dir, depth) {
            grid.swap(pos, target);
            grid.mark_moved(target);
            return RuleOutcome::Relocated;
        }
    }

    RuleOutcome::Stationary
}

/// Move the water at `pos` one cell along `dir`, pushing whatever water is in the way
/// ahead of it, at most `depth` cells in a chain
/// Returns whether `pos` is now free. Running out of depth is just a failed push.
pub fn try_push(grid: &mut VoxelGrid, pos: XyzVector, dir: XyzOffset, depth: usize) -> bool {
    if depth == 0 || grid.get(pos).moved_this_tick {
        return false;
    }
    let Some(next) = grid.neighbor(pos, dir) else {
        return false;
    };
    let free = match grid.material_at(next) {
        Material::Air => true,
        Material::Water => try_push(grid, next, dir, depth - 1),
        _ => false,
    };
    if !free {
        return false;
    }
    grid.swap(pos, next);
    grid.mark_moved(next);
    true
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::physics::voxelsand::config::{RuleConfig, RuleConfigBuilder, WaterModel};
    use crate::physics::voxelsand::elements::material::MaterialTable;

    fn config(push_depth: usize) -> RuleConfig {
        RuleConfigBuilder::new()
            .water_model(WaterModel::Displacement)
            .push_depth(push_depth)
            .build()
            .unwrap()
    }

    fn run(grid: &mut VoxelGrid, pos: XyzVector, config: &RuleConfig, seed: u64) -> RuleOutcome {
        let materials = MaterialTable::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctx = RuleContext::new(config, &materials, &mut rng);
        displacement_process(grid, pos, &mut ctx)
    }

    /// A single row along x sitting on stone
    fn row(width: usize) -> VoxelGrid {
        let mut grid = VoxelGrid::new(width, 2, 1).unwrap();
        for x in 0..width {
            grid.set_material(XyzVector::new(x, 0, 0), Material::Stone)
                .unwrap();
        }
        grid
    }

    mod push {
        use super::*;

        #[test]
        fn test_push_into_air() {
            let mut grid = row(2);
            let pos = XyzVector::new(0, 1, 0);
            grid.set_water(pos, 1.0).unwrap();
            assert!(try_push(&mut grid, pos, XyzOffset::new(1, 0, 0), 1));
            assert!(grid.get(pos).is_air());
            assert_eq!(grid.material_at(XyzVector::new(1, 1, 0)), Material::Water);
            assert!(grid.get(XyzVector::new(1, 1, 0)).moved_this_tick);
        }

        #[test]
        fn test_push_chain_within_depth() {
            let mut grid = row(4);
            for x in 0..3 {
                grid.set_water(XyzVector::new(x, 1, 0), 1.0).unwrap();
            }
            assert!(try_push(
                &mut grid,
                XyzVector::new(0, 1, 0),
                XyzOffset::new(1, 0, 0),
                3
            ));
            assert!(grid.get(XyzVector::new(0, 1, 0)).is_air());
            assert_eq!(grid.count_material(Material::Water), 3);
        }

        #[test]
        fn test_push_chain_too_deep() {
            let mut grid = row(5);
            for x in 0..4 {
                grid.set_water(XyzVector::new(x, 1, 0), 1.0).unwrap();
            }
            let before = grid.clone();
            assert!(!try_push(
                &mut grid,
                XyzVector::new(0, 1, 0),
                XyzOffset::new(1, 0, 0),
                3
            ));
            for (a, b) in grid.iter().zip(before.iter()) {
                assert_eq!(a.material, b.material);
            }
        }

        #[test]
        fn test_push_against_wall_or_edge() {
            let mut grid = row(2);
            let pos = XyzVector::new(1, 1, 0);
            grid.set_water(pos, 1.0).unwrap();
            assert!(!try_push(&mut grid, pos, XyzOffset::new(1, 0, 0), 3));
            grid.set_material(XyzVector::new(0, 1, 0), Material::Stone)
                .unwrap();
            assert!(!try_push(&mut grid, pos, XyzOffset::new(-1, 0, 0), 3));
            assert_eq!(grid.material_at(pos), Material::Water);
        }

        #[test]
        fn test_already_moved_cell_is_not_pushed() {
            let mut grid = row(2);
            let pos = XyzVector::new(0, 1, 0);
            grid.set_water(pos, 1.0).unwrap();
            grid.mark_moved(pos);
            assert!(!try_push(&mut grid, pos, XyzOffset::new(1, 0, 0), 3));
        }
    }

    mod process {
        use super::*;

        #[test]
        fn test_pushes_water_below_and_drops() {
            let mut grid = VoxelGrid::new(3, 3, 3).unwrap();
            for x in 0..3 {
                for z in 0..3 {
                    grid.set_material(XyzVector::new(x, 0, z), Material::Stone)
                        .unwrap();
                }
            }
            let below = XyzVector::new(1, 1, 1);
            let top = XyzVector::new(1, 2, 1);
            grid.set_water(below, 1.0).unwrap();
            grid.set_water(top, 0.8).unwrap();

            assert_eq!(run(&mut grid, top, &config(3), 7), RuleOutcome::Relocated);
            assert!(grid.get(top).is_air());
            assert_relative_eq!(grid.liquid_at(below).0, 0.8);
            assert_eq!(grid.count_material(Material::Water), 2);
            assert_relative_eq!(grid.total_liquid(), 1.8, epsilon = 1e-6);
        }

        #[test]
        fn test_moves_sideways_into_air() {
            let mut grid = row(3);
            let pos = XyzVector::new(1, 1, 0);
            grid.set_water(pos, 1.0).unwrap();
            assert_eq!(run(&mut grid, pos, &config(3), 0), RuleOutcome::Relocated);
            assert!(grid.get(pos).is_air());
            assert_eq!(grid.count_material(Material::Water), 1);
        }

        #[test]
        fn test_pushes_neighbor_outward() {
            let mut grid = row(3);
            let pos = XyzVector::new(0, 1, 0);
            grid.set_water(pos, 1.0).unwrap();
            grid.set_water(XyzVector::new(1, 1, 0), 0.9).unwrap();
            assert_eq!(run(&mut grid, pos, &config(3), 0), RuleOutcome::Relocated);
            assert!(grid.get(pos).is_air());
            assert_relative_eq!(grid.liquid_at(XyzVector::new(1, 1, 0)).0, 1.0);
            assert_relative_eq!(grid.liquid_at(XyzVector::new(2, 1, 0)).0, 0.9);
        }

        #[test]
        fn test_zero_depth_never_pushes() {
            let mut grid = row(3);
            let pos = XyzVector::new(0, 1, 0);
            grid.set_water(pos, 1.0).unwrap();
            grid.set_water(XyzVector::new(1, 1, 0), 1.0).unwrap();
            assert!(run(&mut grid, pos, &config(0), 0).is_stationary());
        }

        #[test]
        fn test_boxed_in_is_stationary() {
            let mut grid = VoxelGrid::new(1, 2, 1).unwrap();
            grid.set_material(XyzVector::new(0, 0, 0), Material::Stone)
                .unwrap();
            let pos = XyzVector::new(0, 1, 0);
            grid.set_water(pos, 1.0).unwrap();
            assert!(run(&mut grid, pos, &config(3), 0).is_stationary());
        }
    }
}
