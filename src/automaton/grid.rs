//! Grid storage, cell access helpers and the boundary policy.

use std::fmt;

use crate::error::AutomatonError;

/// State of a single lattice cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Byte encoding used by region buffers and the C ABI (0 = dead, 1 = alive).
    #[inline]
    pub fn as_byte(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }

    /// Any non-zero byte is alive.
    #[inline]
    pub fn from_byte(value: u8) -> Self {
        if value == 0 {
            Cell::Dead
        } else {
            Cell::Alive
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Integer lattice coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Coord {
    #[inline]
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Coord { x, y, z }
    }

    #[inline]
    pub fn offset(self, dx: i16, dy: i16, dz: i16) -> Self {
        Coord::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Largest lattice, in cells, that [`Grid::new`] will allocate (512³).
pub const MAX_CELLS: usize = 1 << 27;

/// Grid dimensions along x, y and z.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub width: i16,
    pub height: i16,
    pub depth: i16,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

impl Shape {
    /// Total number of cells, X·Y·Z.
    pub fn volume(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Number of strictly interior cells, (X-2)·(Y-2)·(Z-2), or 0 if any axis < 3.
    pub fn interior_volume(&self) -> usize {
        let inner = |n: i16| (n.max(2) - 2) as usize;
        inner(self.width) * inner(self.height) * inner(self.depth)
    }

    /// True if some axis is too small to hold an interior cell.
    pub fn is_degenerate(&self) -> bool {
        self.interior_volume() == 0
    }

    /// Reject negative axes and lattices larger than [`MAX_CELLS`].
    pub fn validate(&self) -> Result<(), AutomatonError> {
        let (w, h, d) = (self.width, self.height, self.depth);
        let fits = w >= 0
            && h >= 0
            && d >= 0
            && (w as u64) * (h as u64) * (d as u64) <= MAX_CELLS as u64;
        if !fits {
            return Err(AutomatonError::InvalidDimensions {
                width: w,
                height: h,
                depth: d,
            });
        }
        Ok(())
    }
}

/// A fixed-size 3-D occupancy grid.
///
/// Cells are stored in z,y,x order (z changes slowest, x changes fastest).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i16,
    height: i16,
    depth: i16,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid. Zero-sized axes are allowed; negative ones
    /// and lattices over [`MAX_CELLS`] are not.
    pub fn new(width: i16, height: i16, depth: i16) -> Result<Self, AutomatonError> {
        let shape = Shape {
            width,
            height,
            depth,
        };
        shape.validate()?;

        Ok(Grid {
            width,
            height,
            depth,
            cells: vec![Cell::Dead; shape.volume()],
        })
    }

    /// A grid with no cells.
    pub fn empty() -> Self {
        Grid {
            width: 0,
            height: 0,
            depth: 0,
            cells: Vec::new(),
        }
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    pub fn depth(&self) -> i16 {
        self.depth
    }

    pub fn shape(&self) -> Shape {
        Shape {
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }

    /// Raw cell storage in z,y,x order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Calculate the linear index for a 3D coordinate.
    #[inline]
    pub fn index_of(&self, x: i16, y: i16, z: i16) -> usize {
        z as usize * self.height as usize * self.width as usize
            + y as usize * self.width as usize
            + x as usize
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, x: i16, y: i16, z: i16) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height && z >= 0 && z < self.depth
    }

    /// True for cells with a full one-cell margin on every side.
    #[inline]
    pub fn is_interior(&self, at: Coord) -> bool {
        at.x >= 1
            && at.x < self.width - 1
            && at.y >= 1
            && at.y < self.height - 1
            && at.z >= 1
            && at.z < self.depth - 1
    }

    /// Out-of-bounds reads are dead.
    #[inline]
    pub fn get(&self, at: Coord) -> Cell {
        if self.in_bounds(at.x, at.y, at.z) {
            self.cells[self.index_of(at.x, at.y, at.z)]
        } else {
            Cell::Dead
        }
    }

    /// Out-of-bounds writes are ignored. Returns whether the write landed.
    #[inline]
    pub fn set(&mut self, at: Coord, cell: Cell) -> bool {
        if !self.in_bounds(at.x, at.y, at.z) {
            return false;
        }
        let idx = self.index_of(at.x, at.y, at.z);
        self.cells[idx] = cell;
        true
    }

    /// Number of live cells anywhere in the grid.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Force every cell on the six bounding faces to dead.
    pub fn zero_boundary(&mut self) {
        if self.cells.is_empty() {
            return;
        }

        let (w, h, d) = (self.width, self.height, self.depth);

        // x = 0 and x = X-1 faces
        for z in 0..d {
            for y in 0..h {
                let a = self.index_of(0, y, z);
                let b = self.index_of(w - 1, y, z);
                self.cells[a] = Cell::Dead;
                self.cells[b] = Cell::Dead;
            }
        }

        // y = 0 and y = Y-1 faces
        for z in 0..d {
            for x in 0..w {
                let a = self.index_of(x, 0, z);
                let b = self.index_of(x, h - 1, z);
                self.cells[a] = Cell::Dead;
                self.cells[b] = Cell::Dead;
            }
        }

        // z = 0 and z = Z-1 faces
        for y in 0..h {
            for x in 0..w {
                let a = self.index_of(x, y, 0);
                let b = self.index_of(x, y, d - 1);
                self.cells[a] = Cell::Dead;
                self.cells[b] = Cell::Dead;
            }
        }
    }

    /// True if no cell on any bounding face is alive.
    pub fn boundary_is_dead(&self) -> bool {
        for z in 0..self.depth {
            for y in 0..self.height {
                for x in 0..self.width {
                    let on_face = x == 0
                        || y == 0
                        || z == 0
                        || x == self.width - 1
                        || y == self.height - 1
                        || z == self.depth - 1;
                    if on_face && self.cells[self.index_of(x, y, z)].is_alive() {
                        return false;
                    }
                }
            }
        }
        true
    }
}
