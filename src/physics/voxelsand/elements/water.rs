use rand::Rng;

use super::element::{RuleContext, RuleOutcome};
use super::movement::displacement::displacement_process;
use super::movement::fluid::fluid_process;
use crate::physics::voxelsand::config::WaterModel;
use crate::physics::voxelsand::data::voxel_grid::VoxelGrid;
use crate::physics::voxelsand::util::directions::DOWN;
use crate::physics::voxelsand::util::vectors::XyzVector;

/// Water falls into air first, whichever model is running
/// Otherwise the configured flow model decides what happens.
pub fn water_process<R: Rng + ?Sized>(
    grid: &mut VoxelGrid,
    pos: XyzVector,
    ctx: &mut RuleContext<'_, R>,
) -> RuleOutcome {
    if let Some(below) = grid.neighbor_matching(pos, DOWN, |v| v.is_air()) {
        grid.swap(pos, below);
        grid.mark_moved(below);
        return RuleOutcome::Relocated;
    }
    match ctx.config.water_model {
        WaterModel::Equalization => fluid_process(grid, pos, ctx.config),
        WaterModel::Displacement => displacement_process(grid, pos, ctx),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::physics::voxelsand::config::{RuleConfig, RuleConfigBuilder};
    use crate::physics::voxelsand::elements::material::{Material, MaterialTable};

    fn run(grid: &mut VoxelGrid, pos: XyzVector, config: &RuleConfig) -> RuleOutcome {
        let materials = MaterialTable::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = RuleContext::new(config, &materials, &mut rng);
        water_process(grid, pos, &mut ctx)
    }

    fn config(model: WaterModel) -> RuleConfig {
        RuleConfigBuilder::new().water_model(model).build().unwrap()
    }

    /// Gravity behaves the same in both models and carries the whole amount
    #[test]
    fn test_falls_into_air_in_every_model() {
        for model in WaterModel::iter() {
            let mut grid = VoxelGrid::new(1, 3, 1).unwrap();
            let top = XyzVector::new(0, 2, 0);
            grid.set_water(top, 1.2).unwrap();
            assert_eq!(run(&mut grid, top, &config(model)), RuleOutcome::Relocated);
            let below = XyzVector::new(0, 1, 0);
            assert_eq!(grid.material_at(below), Material::Water);
            assert_relative_eq!(grid.liquid_at(below).0, 1.2);
            assert!(grid.get(below).moved_this_tick);
            assert!(grid.get(top).is_air());
        }
    }

    #[test]
    fn test_floor_water_stays_put_in_a_one_cell_world() {
        for model in WaterModel::iter() {
            let mut grid = VoxelGrid::new(1, 1, 1).unwrap();
            let pos = XyzVector::ZERO;
            grid.set_water(pos, 1.0).unwrap();
            assert!(run(&mut grid, pos, &config(model)).is_stationary());
            assert_eq!(grid.material_at(pos), Material::Water);
        }
    }

    /// Same blocked start, each model reacts its own way
    #[test]
    fn test_dispatch_follows_model() {
        let build = || {
            let mut grid = VoxelGrid::new(2, 2, 1).unwrap();
            grid.set_material(XyzVector::new(0, 0, 0), Material::Stone)
                .unwrap();
            grid.set_material(XyzVector::new(1, 0, 0), Material::Stone)
                .unwrap();
            grid.set_water(XyzVector::new(0, 1, 0), 1.0).unwrap();
            grid
        };
        let pos = XyzVector::new(0, 1, 0);

        let mut grid = build();
        assert_eq!(
            run(&mut grid, pos, &config(WaterModel::Equalization)),
            RuleOutcome::Transferred
        );
        assert!(grid.liquid_at(pos).0 < 1.0);

        let mut grid = build();
        assert_eq!(
            run(&mut grid, pos, &config(WaterModel::Displacement)),
            RuleOutcome::Relocated
        );
        assert!(grid.get(pos).is_air());
        assert_relative_eq!(grid.liquid_at(XyzVector::new(1, 1, 0)).0, 1.0);
    }
}
