//! Coordinate types for the voxel grid.

use std::fmt;

/// My personal coordinate type for a cell in the voxel grid
/// x is the "width" axis, y is "up" (the floor is 0), z is the "depth" axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct XyzVector {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl XyzVector {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Adds a signed offset, producing signed coordinates that still need a bounds check.
    /// Returns None only if the arithmetic itself overflows.
    pub fn offset(&self, offset: XyzOffset) -> Option<(isize, isize, isize)> {
        let x = isize::try_from(self.x).ok()?.checked_add(offset.dx)?;
        let y = isize::try_from(self.y).ok()?.checked_add(offset.dy)?;
        let z = isize::try_from(self.z).ok()?.checked_add(offset.dz)?;
        Some((x, y, z))
    }

    pub fn to_array(self) -> [usize; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<(usize, usize, usize)> for XyzVector {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for XyzVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A relative step between two cells, used for neighbor lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XyzOffset {
    pub dx: isize,
    pub dy: isize,
    pub dz: isize,
}

impl XyzOffset {
    pub const fn new(dx: isize, dy: isize, dz: isize) -> Self {
        Self { dx, dy, dz }
    }

    pub const fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0 && self.dz == 0
    }
}

/// The dimensions of a grid, one per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub const fn volume(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// True iff every coordinate lies in `[0, dim)`
    pub fn contains(&self, x: isize, y: isize, z: isize) -> bool {
        let within = |v: isize, dim: usize| usize::try_from(v).map_or(false, |v| v < dim);
        within(x, self.width) && within(y, self.height) && within(z, self.depth)
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}
