//! Equalization flow: liquid moves as partial amounts between neighbors.
//!
//! After gravity has had its chance, a water cell tries, in order:
//! * leveling with a less full water cell directly below it
//! * spreading sideways to the four cardinal neighbors that hold less liquid
//! * overflowing upward when it is pressurized and had nowhere to spread
//!
//! Every transfer goes through [VoxelGrid::transfer_liquid] so it is always zero sum.

use crate::physics::voxelsand::config::RuleConfig;
use crate::physics::voxelsand::data::voxel::LiquidAmount;
use crate::physics::voxelsand::data::voxel_grid::VoxelGrid;
use crate::physics::voxelsand::elements::element::RuleOutcome;
use crate::physics::voxelsand::elements::material::Material;
use crate::physics::voxelsand::util::directions::{DOWN, HORIZONTAL_CARDINALS, UP};
use crate::physics::voxelsand::util::vectors::XyzVector;

/// What the lateral pass found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LateralFlow {
    /// No neighbor held less liquid, so the cell may overflow upward
    NoCandidates,
    /// At least one neighbor held less
    Spread {
        /// Whether any liquid actually went
        moved: bool,
    },
}

/// Default fluid behavior once the cell below is known not to be air
pub fn fluid_process(grid: &mut VoxelGrid, pos: XyzVector, config: &RuleConfig) -> RuleOutcome {
    if equalize_down(grid, pos, config) {
        return RuleOutcome::Transferred;
    }
    match equalize_sideways(grid, pos, config) {
        LateralFlow::Spread { moved: true } => RuleOutcome::Transferred,
        LateralFlow::Spread { moved: false } => RuleOutcome::Stationary,
        LateralFlow::NoCandidates => {
            if overflow_up(grid, pos, config) {
                RuleOutcome::Transferred
            } else {
                RuleOutcome::Stationary
            }
        }
    }
}

/// Top up a less full water cell below, never past its capacity and never
/// taking more than this cell holds
pub fn equalize_down(grid: &mut VoxelGrid, pos: XyzVector, config: &RuleConfig) -> bool {
    let Some(below) = grid.neighbor_matching(pos, DOWN, |v| v.is(Material::Water)) else {
        return false;
    };
    let current = grid.liquid_at(pos);
    let below_amount = grid.liquid_at(below);
    if current <= below_amount {
        return false;
    }
    let room = (config.capacity - below_amount).0.max(0.0);
    let flow = room.min(current.0.max(0.0));
    if flow <= 0.0 {
        return false;
    }
    grid.transfer_liquid(pos, below, LiquidAmount(flow), config.liquid_threshold);
    grid.mark_moved(below);
    true
}

/// Spread to horizontal neighbors with less liquid
/// Flow is apportioned by each neighbor's share of the total deficit and damped, so a
/// cell never drops under the threshold in one application. Each share is also capped
/// at half that neighbor's deficit so the pair can meet but not cross over.
fn equalize_sideways(grid: &mut VoxelGrid, pos: XyzVector, config: &RuleConfig) -> LateralFlow {
    let current = grid.liquid_at(pos);
    let candidates: Vec<(XyzVector, f32)> = HORIZONTAL_CARDINALS
        .iter()
        .filter_map(|offset| {
            grid.neighbor_matching(pos, *offset, |v| {
                v.material.holds_liquid() && v.liquid < current
            })
        })
        .map(|neighbor| (neighbor, (current - grid.liquid_at(neighbor)).0))
        .collect();
    if candidates.is_empty() {
        return LateralFlow::NoCandidates;
    }

    let total_deficit: f32 = candidates.iter().map(|(_, deficit)| deficit).sum();
    let spreadable = (current - config.liquid_threshold).0.max(0.0) * config.lateral_damping;
    let mut moved = false;
    for (neighbor, deficit) in candidates {
        let flow = (deficit / total_deficit * spreadable).min(deficit * 0.5);
        if flow <= 0.0 {
            continue;
        }
        grid.transfer_liquid(pos, neighbor, LiquidAmount(flow), config.liquid_threshold);
        grid.mark_moved(neighbor);
        moved = true;
    }
    LateralFlow::Spread { moved }
}

/// Push the excess over capacity into the cell above
/// Never from the top layer, and only into cells that can hold liquid
pub fn overflow_up(grid: &mut VoxelGrid, pos: XyzVector, config: &RuleConfig) -> bool {
    let current = grid.liquid_at(pos);
    if current <= config.capacity {
        return false;
    }
    let Some(above) = grid.neighbor_matching(pos, UP, |v| v.material.holds_liquid()) else {
        return false;
    };
    grid.transfer_liquid(pos, above, current - config.capacity, config.liquid_threshold);
    grid.mark_moved(above);
    true
}
