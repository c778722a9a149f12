use std::fmt;

use smallvec::SmallVec;

/// A cell position on a rectangular grid. `x` is the column, `z` the row.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: u32,
    pub z: u32,
}

impl GridCoordinate {
    pub fn new(x: u32, z: u32) -> GridCoordinate {
        GridCoordinate { x, z }
    }

    /// The coordinate one step away in `dir`, if it is representable (i.e. not negative).
    /// Whether it lies within a particular grid is for the grid to decide.
    pub fn offset(&self, dir: Direction) -> Option<GridCoordinate> {
        let (dx, dz) = dir.offset();
        let x = i64::from(self.x) + i64::from(dx);
        let z = i64::from(self.z) + i64::from(dz);
        if x < 0 || z < 0 || x > i64::from(u32::MAX) || z > i64::from(u32::MAX) {
            None
        } else {
            Some(GridCoordinate::new(x as u32, z as u32))
        }
    }
}

impl From<(u32, u32)> for GridCoordinate {
    fn from(x_z_pair: (u32, u32)) -> GridCoordinate {
        GridCoordinate::new(x_z_pair.0, x_z_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;
pub type DirectionSmallVec = SmallVec<[Direction; 4]>;

/// The four sides of a cell.
///
/// `Front` faces increasing `z`, `Back` faces decreasing `z`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Front,
    Back,
}

/// Directions in the order neighbours are tested: right, left, front, back.
pub const CANONICAL_DIRECTIONS: [Direction; 4] =
    [Direction::Right, Direction::Left, Direction::Front, Direction::Back];

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Front => Direction::Back,
            Direction::Back => Direction::Front,
        }
    }

    /// The `(dx, dz)` step taken when moving through this side of a cell.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Front => (0, 1),
            Direction::Back => (0, -1),
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Direction::Left => 0b0001,
            Direction::Right => 0b0010,
            Direction::Front => 0b0100,
            Direction::Back => 0b1000,
        }
    }

    /// Which side of `previous` faces `current`.
    ///
    /// The ordered tests mirror the wall clearing rule: x before z. Grid adjacent cells differ in
    /// exactly one coordinate so exactly one case applies to them. Returns None only when the two
    /// coordinates are equal.
    pub fn between(previous: GridCoordinate, current: GridCoordinate) -> Option<Direction> {
        if previous.x < current.x {
            Some(Direction::Right)
        } else if previous.x > current.x {
            Some(Direction::Left)
        } else if previous.z < current.z {
            Some(Direction::Front)
        } else if previous.z > current.z {
            Some(Direction::Back)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Front => "front",
            Direction::Back => "back",
        };
        f.write_str(name)
    }
}

/// The walls still standing around a cell, one bit per `Direction`.
#[derive(Hash, Eq, PartialEq, Copy, Clone)]
pub struct Walls(u8);

impl Walls {
    const ALL_BITS: u8 = 0b1111;

    pub fn all() -> Walls {
        Walls(Walls::ALL_BITS)
    }

    #[inline]
    pub fn has(&self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Knock down one wall. Returns false if it was already gone.
    #[inline]
    pub fn clear(&mut self, dir: Direction) -> bool {
        let was_standing = self.has(dir);
        self.0 &= !dir.bit();
        was_standing
    }

    /// The sides that have been opened up, in canonical order.
    pub fn cleared(&self) -> DirectionSmallVec {
        CANONICAL_DIRECTIONS.iter()
            .cloned()
            .filter(|dir| !self.has(*dir))
            .collect()
    }

    pub fn standing_count(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl Default for Walls {
    fn default() -> Walls {
        Walls::all()
    }
}

impl fmt::Debug for Walls {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Walls({:04b})", self.0)
    }
}

/// One square of the maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    coord: GridCoordinate,
    walls: Walls,
    visited: bool,
}

impl Cell {
    pub fn new(coord: GridCoordinate) -> Cell {
        Cell {
            coord,
            walls: Walls::all(),
            visited: false,
        }
    }

    #[inline]
    pub fn coord(&self) -> GridCoordinate {
        self.coord
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.coord.x
    }

    #[inline]
    pub fn z(&self) -> u32 {
        self.coord.z
    }

    #[inline]
    pub fn walls(&self) -> Walls {
        self.walls
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls.has(dir)
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    // Mutation is left to the grid so that wall pairs are always cleared together.
    pub(crate) fn visit(&mut self) {
        self.visited = true;
    }

    pub(crate) fn clear_wall(&mut self, dir: Direction) -> bool {
        self.walls.clear(dir)
    }
}
