//! Box-drawing character sets and junction classification.

use crate::grid::{Direction, Vertex};

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to use for box-drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

// ─── BoxChars ─────────────────────────────────────────────────────────────────

/// Unicode or ASCII box-drawing character set.
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub tee_right: char, // ├ left-T opening right
    pub tee_left: char,  // ┤ right-T opening left
    pub tee_down: char,  // ┬ top-T opening down
    pub tee_up: char,    // ┴ bottom-T opening up
    pub cross: char,     // ┼
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            tee_right: '├',
            tee_left: '┤',
            tee_down: '┬',
            tee_up: '┴',
            cross: '┼',
        }
    }

    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            tee_right: '+',
            tee_left: '+',
            tee_down: '+',
            tee_up: '+',
            cross: '+',
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }

    pub fn glyph(&self, junction: Junction) -> char {
        match junction {
            Junction::CornerNW => self.bottom_right,
            Junction::CornerNE => self.bottom_left,
            Junction::CornerSW => self.top_right,
            Junction::CornerSE => self.top_left,
            Junction::TeeNSE => self.tee_right,
            Junction::TeeNSW => self.tee_left,
            Junction::TeeSWE => self.tee_down,
            Junction::TeeNWE => self.tee_up,
            Junction::Cross => self.cross,
            Junction::StraightH => self.horizontal,
            Junction::StraightV => self.vertical,
        }
    }
}

// ─── Arms ────────────────────────────────────────────────────────────────────

/// Which neighbor slots of a vertex are occupied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arms {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
}

impl Arms {
    pub const fn new(up: bool, left: bool, down: bool, right: bool) -> Self {
        Self {
            up,
            left,
            down,
            right,
        }
    }

    pub fn of(vertex: &Vertex) -> Self {
        let has = |d: Direction| vertex.neighbor(d).is_some();
        Self::new(
            has(Direction::Up),
            has(Direction::Left),
            has(Direction::Down),
            has(Direction::Right),
        )
    }

    /// Decode a box-drawing character into its arms. Returns None for non-junction chars.
    pub fn from_char(c: char) -> Option<Self> {
        JUNCTIONS
            .iter()
            .find(|(junction, _)| BoxChars::unicode().glyph(*junction) == c)
            .map(|&(_, arms)| arms)
    }

    /// First junction in table order whose pattern matches exactly.
    pub fn junction(self) -> Option<Junction> {
        JUNCTIONS
            .iter()
            .find(|&&(_, arms)| arms == self)
            .map(|&(junction, _)| junction)
    }
}

// ─── Junction ────────────────────────────────────────────────────────────────

/// The eleven drawable neighbor patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Junction {
    CornerNW,
    CornerNE,
    CornerSW,
    CornerSE,
    TeeNSE,
    TeeNSW,
    TeeSWE,
    TeeNWE,
    Cross,
    StraightH,
    StraightV,
}

/// Junction patterns in matching order. Arms are (up, left, down, right).
pub const JUNCTIONS: [(Junction, Arms); 11] = [
    (Junction::CornerNW, Arms::new(true, true, false, false)),
    (Junction::CornerNE, Arms::new(true, false, false, true)),
    (Junction::CornerSW, Arms::new(false, true, true, false)),
    (Junction::CornerSE, Arms::new(false, false, true, true)),
    (Junction::TeeNSE, Arms::new(true, false, true, true)),
    (Junction::TeeNSW, Arms::new(true, true, true, false)),
    (Junction::TeeSWE, Arms::new(false, true, true, true)),
    (Junction::TeeNWE, Arms::new(true, true, false, true)),
    (Junction::Cross, Arms::new(true, true, true, true)),
    (Junction::StraightH, Arms::new(false, true, false, true)),
    (Junction::StraightV, Arms::new(true, false, true, false)),
];

// ─── Tests ───────────────────────────────────────────────────────────────────
