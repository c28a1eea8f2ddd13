//! Scene initializers that paint materials into a fresh grid.

use bevy::log::debug;

use super::data::voxel::LiquidAmount;
use super::data::voxel_grid::{GridError, VoxelGrid};
use super::elements::material::Material;
use super::util::vectors::XyzVector;

/// Something that can lay out a starting scene
pub trait Terrain {
    /// Paint into the grid, failing on the first cell that does not fit
    fn apply(&self, grid: &mut VoxelGrid) -> Result<(), GridError>;
}

/// A walled basin: stone floor, stone border walls, a shallow pool of water and a
/// column of water pouring in from above the center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasinTerrain {
    wall_height: Option<usize>,
    pool_depth: usize,
    column: bool,
    fill: LiquidAmount,
}

impl Terrain for BasinTerrain {
    fn apply(&self, grid: &mut VoxelGrid) -> Result<(), GridError> {
        let dims = grid.dimensions();
        let wall_height = self.wall_height.unwrap_or(dims.height / 2);
        let (cx, cz) = (dims.width / 2, dims.depth / 2);
        debug!(
            "Basin terrain on {}: walls {}, pool {}, column {}",
            dims, wall_height, self.pool_depth, self.column
        );

        for x in 0..dims.width {
            for z in 0..dims.depth {
                let border = x == 0 || z == 0 || x == dims.width - 1 || z == dims.depth - 1;
                for y in 0..dims.height {
                    let pos = XyzVector::new(x, y, z);
                    if y == 0 || (border && y < wall_height) {
                        grid.set_material(pos, Material::Stone)?;
                    } else if y <= self.pool_depth {
                        grid.set_water(pos, self.fill.0)?;
                    } else if self.column && x == cx && z == cz && y >= dims.height / 2 {
                        grid.set_water(pos, self.fill.0)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// A builder for BasinTerrain
#[derive(Debug, Clone, Copy)]
pub struct BasinTerrainBuilder {
    wall_height: Option<usize>,
    pool_depth: usize,
    column: bool,
    fill: LiquidAmount,
}

impl Default for BasinTerrainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BasinTerrainBuilder {
    pub fn new() -> Self {
        Self {
            wall_height: None,
            pool_depth: 3,
            column: true,
            fill: LiquidAmount::FULL,
        }
    }

    /// Walls go up to, but not including, this layer. Defaults to half the grid height.
    pub fn wall_height(mut self, wall_height: usize) -> Self {
        self.wall_height = Some(wall_height);
        self
    }

    /// Number of water layers above the floor
    pub fn pool_depth(mut self, pool_depth: usize) -> Self {
        self.pool_depth = pool_depth;
        self
    }

    pub fn column(mut self, column: bool) -> Self {
        self.column = column;
        self
    }

    /// Amount each water cell starts with
    pub fn fill(mut self, fill: f32) -> Self {
        self.fill = LiquidAmount(fill);
        self
    }

    pub fn build(self) -> BasinTerrain {
        BasinTerrain {
            wall_height: self.wall_height,
            pool_depth: self.pool_depth,
            column: self.column,
            fill: self.fill,
        }
    }
}

/// A solid block of sand, handy for watching a pile form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandPile {
    /// Lowest corner of the block
    pub corner: XyzVector,
    /// Edge lengths along x, y and z
    pub size: (usize, usize, usize),
}

impl SandPile {
    pub fn new(corner: XyzVector, size: (usize, usize, usize)) -> Self {
        Self { corner, size }
    }
}

impl Terrain for SandPile {
    fn apply(&self, grid: &mut VoxelGrid) -> Result<(), GridError> {
        let (sx, sy, sz) = self.size;
        for x in self.corner.x..self.corner.x.saturating_add(sx) {
            for y in self.corner.y..self.corner.y.saturating_add(sy) {
                for z in self.corner.z..self.corner.z.saturating_add(sz) {
                    grid.set_material(XyzVector::new(x, y, z), Material::Sand)?;
                }
            }
        }
        Ok(())
    }
}
