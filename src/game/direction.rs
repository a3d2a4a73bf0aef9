use super::grid::Coord;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The coordinate one cell away from `coord` in this direction.
    ///
    /// Pure; the result may lie outside the grid (including a zero
    /// component), which callers detect with
    /// [`Grid::in_bounds`][super::grid::Grid::in_bounds].
    pub(crate) fn offset(self, coord: Coord) -> Coord {
        let Coord { mut x, mut y } = coord;
        match self {
            Direction::Up => y = y.saturating_sub(1),
            Direction::Down => y = y.saturating_add(1),
            Direction::Left => x = x.saturating_sub(1),
            Direction::Right => x = x.saturating_add(1),
        }
        Coord { x, y }
    }
}
