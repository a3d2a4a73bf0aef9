use super::grid::{Coord, Grid};

/// What occupies a single cell.  Exactly one kind holds per coordinate at
/// any time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum CellKind {
    #[default]
    Empty,
    Food,
    Snake,
}

/// Dense per-coordinate record of what occupies each cell.
///
/// This is the single source of truth for occupancy queries; the snake and
/// food keep no independent occupancy state.  Out-of-bounds coordinates are
/// tolerated everywhere: `set` ignores them and `get` reports them as
/// [`CellKind::Empty`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CellMap {
    grid: Grid,
    cells: Vec<CellKind>,
    empty: usize,
}

impl CellMap {
    pub(crate) fn new(grid: Grid) -> CellMap {
        let count = grid.cell_count();
        CellMap {
            grid,
            cells: vec![CellKind::Empty; count],
            empty: count,
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.grid.in_bounds(coord).then(|| {
            usize::from(coord.y - 1) * usize::from(self.grid.max_cols()) + usize::from(coord.x - 1)
        })
    }

    pub(crate) fn set(&mut self, coord: Coord, kind: CellKind) {
        let Some(i) = self.index(coord) else {
            return;
        };
        let old = self.cells[i];
        if old == kind {
            return;
        }
        if old == CellKind::Empty {
            self.empty -= 1;
        }
        if kind == CellKind::Empty {
            self.empty += 1;
        }
        self.cells[i] = kind;
    }

    pub(crate) fn get(&self, coord: Coord) -> CellKind {
        self.index(coord)
            .map_or(CellKind::Empty, |i| self.cells[i])
    }

    pub(crate) fn is_kind(&self, coord: Coord, kind: CellKind) -> bool {
        self.get(coord) == kind
    }

    /// Number of cells currently holding [`CellKind::Empty`]
    pub(crate) fn empty_cells(&self) -> usize {
        self.empty
    }

    /// Iterate over every `(coordinate, kind)` pair on the grid
    pub(crate) fn kinds(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        self.grid.coords().zip(self.cells.iter().copied())
    }
}
