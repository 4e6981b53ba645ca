//! Direction/axis algebra, points, and the ordering predicates the insertion
//! engine uses as its only tie-break.

use std::fmt;

// ─── Axis ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

// ─── Direction ────────────────────────────────────────────────────────────────

/// One of the four neighbor slots of a vertex.
///
/// The discriminant doubles as the slot index; `invert` is `(d + 2) % 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

impl Direction {
    /// Slot order used by every walk. First-match searches depend on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    pub fn invert(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn axis(self) -> Axis {
        if self.is_vertical() { Axis::Y } else { Axis::X }
    }

    /// +1 when moving in this direction increases the coordinate, -1 otherwise.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Up | Direction::Left => -1,
            Direction::Down | Direction::Right => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

// ─── Point ────────────────────────────────────────────────────────────────────

/// Integer grid coordinate. `y` grows downward, matching canvas rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn along(self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:2}, {:2})", self.x, self.y)
    }
}

// ─── Predicates ───────────────────────────────────────────────────────────────

/// `a` lies strictly further than `b` when travelling in `direction`.
pub fn is_ahead(direction: Direction, a: Point, b: Point) -> bool {
    match direction {
        Direction::Up => a.y < b.y,
        Direction::Left => a.x < b.x,
        Direction::Down => a.y > b.y,
        Direction::Right => a.x > b.x,
    }
}

/// `a` lies strictly short of `b` when travelling in `direction`.
pub fn is_behind(direction: Direction, a: Point, b: Point) -> bool {
    match direction {
        Direction::Up => a.y > b.y,
        Direction::Left => a.x > b.x,
        Direction::Down => a.y < b.y,
        Direction::Right => a.x < b.x,
    }
}

/// True iff `value` is strictly between `lo` and `hi`, in either order.
pub fn within_open_range(value: i64, lo: i64, hi: i64) -> bool {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    value > lo && value < hi
}

/// True iff `p` sits on the shared X or Y line of `a` and `b`, strictly
/// between them.
pub fn lies_between(p: Point, a: Point, b: Point) -> bool {
    if p.x == a.x && p.x == b.x {
        within_open_range(p.y, a.y, b.y)
    } else if p.y == a.y && p.y == b.y {
        within_open_range(p.x, a.x, b.x)
    } else {
        false
    }
}

/// Distance between `a` and `b` along the axis of `direction`.
pub fn line_length(a: Point, direction: Direction, b: Point) -> i64 {
    let axis = direction.axis();
    (a.along(axis) - b.along(axis)).abs()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
