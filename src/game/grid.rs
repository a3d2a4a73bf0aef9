use std::fmt;

/// A 1-based cell coordinate on the game grid.
///
/// `(1, 1)` is the top-left cell; `x` grows rightwards and `y` grows
/// downwards, matching the board as drawn.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Coord {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Coord {
    pub(crate) fn new(x: u16, y: u16) -> Coord {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The fixed dimensions of one game session's grid.
///
/// The grid itself stores nothing; cell contents live in
/// [`CellMap`][crate::game::cells::CellMap].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    max_cols: u16,
    max_rows: u16,
}

impl Grid {
    pub(crate) fn new(max_cols: u16, max_rows: u16) -> Grid {
        Grid { max_cols, max_rows }
    }

    pub(crate) fn max_cols(self) -> u16 {
        self.max_cols
    }

    pub(crate) fn max_rows(self) -> u16 {
        self.max_rows
    }

    /// Total number of cells on the grid
    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.max_cols) * usize::from(self.max_rows)
    }

    pub(crate) fn in_bounds(self, coord: Coord) -> bool {
        (1..=self.max_cols).contains(&coord.x) && (1..=self.max_rows).contains(&coord.y)
    }

    /// Iterate over every coordinate on the grid in row-major order
    pub(crate) fn coords(self) -> impl Iterator<Item = Coord> {
        let cols = self.max_cols;
        (1..=self.max_rows).flat_map(move |y| (1..=cols).map(move |x| Coord::new(x, y)))
    }
}
