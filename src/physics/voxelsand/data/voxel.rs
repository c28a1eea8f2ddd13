//! A single cell of the voxel grid.

use derive_more::{Add, AddAssign, From, Into, Sub, SubAssign};

use crate::physics::voxelsand::elements::material::Material;
use crate::physics::voxelsand::util::vectors::XyzVector;

/// How full a cell is with liquid
/// 1.0 is nominally full, anything above that is pressurized
#[derive(Default, Clone, Copy, Debug, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, From, Into)]
pub struct LiquidAmount(pub f32);

impl LiquidAmount {
    pub const ZERO: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Negative amounts are never meaningful
    pub fn clamped(self) -> Self {
        if self.0 < 0.0 || self.0.is_nan() {
            Self::ZERO
        } else {
            self
        }
    }
}

/// One cell
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Voxel {
    pub material: Material,
    pub liquid: LiquidAmount,
    /// Set once this cell's contents have moved or received liquid during the current step
    pub moved_this_tick: bool,
    /// Derived from the grid index, the grid rewrites it on every swap
    pub position: XyzVector,
}

impl Voxel {
    /// An air cell at the given position
    pub fn empty(position: XyzVector) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn is(&self, material: Material) -> bool {
        self.material == material
    }

    pub fn is_air(&self) -> bool {
        self.material == Material::Air
    }

    /// Reassign Air/Water after a transfer
    /// Only cells that can hold liquid are touched, the threshold avoids flicker
    /// between the two for near empty cells. Residual liquid under the threshold stays
    /// on the air cell so the grid total does not drift.
    pub fn reclassify(&mut self, threshold: LiquidAmount) {
        self.liquid = self.liquid.clamped();
        if !self.material.holds_liquid() {
            return;
        }
        self.material = if self.liquid < threshold {
            Material::Air
        } else {
            Material::Water
        };
    }
}
