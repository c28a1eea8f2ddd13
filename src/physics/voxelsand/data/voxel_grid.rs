use bevy::log::debug;
use rayon::prelude::*;
use thiserror::Error;

use crate::physics::voxelsand::elements::material::{Material, MaterialTable};
use crate::physics::voxelsand::util::grid::Grid3;
use crate::physics::voxelsand::util::vectors::{Dimensions, XyzOffset, XyzVector};

use super::voxel::{LiquidAmount, Voxel};

/// Everything that can go wrong building or initializing a grid
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("grid dimensions must all be positive, got {0}")]
    InvalidDimensions(Dimensions),
    #[error("{0} is outside the grid")]
    OutOfBounds(XyzVector),
    #[error("water at {position} needs a positive liquid amount, got {amount}")]
    InvalidLiquidAmount { position: XyzVector, amount: f32 },
}

/// A dense 3D grid of voxels
/// The dimensions are fixed at construction. The stepper owns it mutably for the
/// duration of a step, everything else only reads it between steps.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    grid: Grid3<Voxel>,
    dims: Dimensions,
}

/* Initialization */
impl VoxelGrid {
    /// Creates a new grid full of dry air
    pub fn new(width: usize, height: usize, depth: usize) -> Result<Self, GridError> {
        Self::from_dimensions(Dimensions::new(width, height, depth))
    }

    pub fn from_dimensions(dims: Dimensions) -> Result<Self, GridError> {
        if dims.width == 0 || dims.height == 0 || dims.depth == 0 {
            return Err(GridError::InvalidDimensions(dims));
        }
        debug!("Creating voxel grid {}", dims);
        Ok(Self {
            grid: Grid3::new_from_fn(dims, Voxel::empty),
            dims,
        })
    }
}

/* Getters */
impl VoxelGrid {
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }
    pub fn width(&self) -> usize {
        self.dims.width
    }
    pub fn height(&self) -> usize {
        self.dims.height
    }
    pub fn depth(&self) -> usize {
        self.dims.depth
    }

    /// True iff all three coordinates are within `[0, dim)`
    pub fn is_valid_position(&self, x: isize, y: isize, z: isize) -> bool {
        self.dims.contains(x, y, z)
    }

    /// The neighbor at `offset`, if it exists
    pub fn neighbor(&self, pos: XyzVector, offset: XyzOffset) -> Option<XyzVector> {
        let (x, y, z) = pos.offset(offset)?;
        if !self.is_valid_position(x, y, z) {
            return None;
        }
        // All three are non negative now
        Some(XyzVector::new(x as usize, y as usize, z as usize))
    }

    /// The neighbor at `offset`, if it exists and its voxel satisfies `predicate`
    pub fn neighbor_matching<F>(
        &self,
        pos: XyzVector,
        offset: XyzOffset,
        predicate: F,
    ) -> Option<XyzVector>
    where
        F: FnOnce(&Voxel) -> bool,
    {
        self.neighbor(pos, offset)
            .filter(|n| predicate(self.grid.get(*n)))
    }

    /// Panics on an invalid position, rules only call this after a bounds check
    pub fn get(&self, pos: XyzVector) -> &Voxel {
        self.grid.get(pos)
    }

    pub fn get_mut(&mut self, pos: XyzVector) -> &mut Voxel {
        self.grid.get_mut(pos)
    }

    pub fn checked_get(&self, pos: XyzVector) -> Result<&Voxel, GridError> {
        self.grid
            .checked_get(pos)
            .map_err(|err| GridError::OutOfBounds(err.0))
    }

    pub fn material_at(&self, pos: XyzVector) -> Material {
        self.grid.get(pos).material
    }

    pub fn liquid_at(&self, pos: XyzVector) -> LiquidAmount {
        self.grid.get(pos).liquid
    }

    pub fn iter(&self) -> impl Iterator<Item = &Voxel> {
        self.grid.iter()
    }
}

/* Mutation used by the rules */
impl VoxelGrid {
    /// Exchange the full contents of two cells, then rewrite their derived positions
    /// The moved flag travels with the contents, callers mark the destination afterwards
    pub fn swap(&mut self, a: XyzVector, b: XyzVector) {
        if a == b {
            return;
        }
        self.grid.swap(a, b);
        self.grid.get_mut(a).position = a;
        self.grid.get_mut(b).position = b;
    }

    pub fn mark_moved(&mut self, pos: XyzVector) {
        self.grid.get_mut(pos).moved_this_tick = true;
    }

    pub fn reset_moved_flags(&mut self) {
        for voxel in self.grid.iter_mut() {
            voxel.moved_this_tick = false;
        }
    }

    /// Move `amount` of liquid from one cell to another and reclassify both ends
    /// Always zero sum. Non positive amounts are ignored.
    pub fn transfer_liquid(
        &mut self,
        from: XyzVector,
        to: XyzVector,
        amount: LiquidAmount,
        threshold: LiquidAmount,
    ) {
        if !amount.is_positive() || from == to {
            return;
        }
        {
            let source = self.grid.get_mut(from);
            source.liquid -= amount;
            source.reclassify(threshold);
        }
        let target = self.grid.get_mut(to);
        target.liquid += amount;
        target.reclassify(threshold);
    }
}

/* Initialization helpers for terrain and tools */
impl VoxelGrid {
    /// Paint a material at a position
    /// Water gets a full cell, everything else is dry
    pub fn set_material(&mut self, pos: XyzVector, material: Material) -> Result<(), GridError> {
        if material == Material::Water {
            return self.set_water(pos, LiquidAmount::FULL.0);
        }
        let voxel = self
            .grid
            .checked_get_mut(pos)
            .map_err(|err| GridError::OutOfBounds(err.0))?;
        voxel.material = material;
        voxel.liquid = LiquidAmount::ZERO;
        Ok(())
    }

    /// Paint water with a specific amount, which must be positive
    pub fn set_water(&mut self, pos: XyzVector, amount: f32) -> Result<(), GridError> {
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(GridError::InvalidLiquidAmount {
                position: pos,
                amount,
            });
        }
        let voxel = self
            .grid
            .checked_get_mut(pos)
            .map_err(|err| GridError::OutOfBounds(err.0))?;
        voxel.material = Material::Water;
        voxel.liquid = LiquidAmount(amount);
        Ok(())
    }
}

/* Read-only summaries, safe to compute in parallel because nothing mutates */
impl VoxelGrid {
    /// Sum of liquid over every cell, including residue left on air cells
    pub fn total_liquid(&self) -> f32 {
        self.grid
            .get_data()
            .par_iter()
            .map(|voxel| voxel.liquid.0)
            .sum()
    }

    pub fn count_material(&self, material: Material) -> usize {
        self.grid
            .get_data()
            .par_iter()
            .filter(|voxel| voxel.material == material)
            .count()
    }

    pub fn count_moved(&self) -> usize {
        self.grid
            .get_data()
            .par_iter()
            .filter(|voxel| voxel.moved_this_tick)
            .count()
    }
}

/* Drawing */
impl VoxelGrid {
    /// Every non air voxel, for visualizers that draw one object per cell
    pub fn visible_voxels(&self) -> impl Iterator<Item = &Voxel> {
        self.grid.iter().filter(|voxel| !voxel.is_air())
    }

    /// The color of every cell as RGBA bytes, in x, then y, then z order
    pub fn rgba_buffer(&self, table: &MaterialTable) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.dims.volume() * 4);
        for voxel in self.grid.iter() {
            buffer.extend_from_slice(bytemuck::bytes_of(&table.rgba(voxel.material)));
        }
        buffer
    }
}
