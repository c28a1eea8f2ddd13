use rand::Rng;

use super::element::{RuleContext, RuleOutcome};
use super::material::Material;
use crate::physics::voxelsand::data::voxel::Voxel;
use crate::physics::voxelsand::data::voxel_grid::VoxelGrid;
use crate::physics::voxelsand::util::directions::{sample_down_diagonals, DOWN};
use crate::physics::voxelsand::util::vectors::XyzVector;

/// Whether a sand grain may swap into this cell
/// Air always, and lighter fluids when sinking is switched on. Stone never.
fn can_enter<R: Rng + ?Sized>(target: &Voxel, ctx: &RuleContext<'_, R>) -> bool {
    match target.material {
        Material::Air => true,
        Material::Stone | Material::Sand => false,
        other => {
            ctx.config.sand_sinks_in_fluids
                && ctx.materials.is_fluid(other)
                && ctx.materials.density(other) < ctx.materials.density(Material::Sand)
        }
    }
}

/// Granular fall
/// Straight down if possible, otherwise a few randomly drawn down diagonals. If none of
/// those are free the grain rests, which is what produces the angle of repose.
pub fn sand_process<R: Rng + ?Sized>(
    grid: &mut VoxelGrid,
    pos: XyzVector,
    ctx: &mut RuleContext<'_, R>,
) -> RuleOutcome {
    if let Some(below) = grid.neighbor_matching(pos, DOWN, |v| can_enter(v, &*ctx)) {
        grid.swap(pos, below);
        grid.mark_moved(below);
        return RuleOutcome::Relocated;
    }

    // Random draw without replacement so neither side is favoured
    let attempts = sample_down_diagonals(&mut *ctx.rng, ctx.config.diagonal_attempts);
    for offset in attempts {
        if let Some(target) = grid.neighbor_matching(pos, offset, |v| can_enter(v, &*ctx)) {
            grid.swap(pos, target);
            grid.mark_moved(target);
            return RuleOutcome::Relocated;
        }
    }

    RuleOutcome::Stationary
}
