use super::direction::Direction;
use super::grid::Coord;
use std::collections::VecDeque;

/// Snake state: the segment sequence plus steering.
///
/// Segments run tail to head, so the front of `body` is the tail and the
/// back is the head.  The sequence never drops below length 1.  Occupancy
/// truth lives in [`CellMap`][super::cells::CellMap]; the session keeps the
/// two in step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The segment coordinates, tail first, head last
    pub(super) body: VecDeque<Coord>,

    /// The direction the snake moves in on the next tick
    pub(super) direction: Direction,

    /// Directions queued by the input boundary and not yet applied.
    /// Unbounded; drained one entry per tick.
    pub(super) pending: VecDeque<Direction>,
}

impl Snake {
    /// Create a snake of `length` segments ending at `head`, laid out
    /// opposite its heading so that it moves head-first from the start.
    pub(super) fn new(head: Coord, length: u16, direction: Direction) -> Snake {
        let back = direction.reverse();
        let mut body = VecDeque::with_capacity(usize::from(length));
        let mut coord = head;
        body.push_front(coord);
        for _ in 1..length {
            coord = back.offset(coord);
            body.push_front(coord);
        }
        Snake {
            body,
            direction,
            pending: VecDeque::new(),
        }
    }

    pub(crate) fn head(&self) -> Coord {
        *self
            .body
            .back()
            .expect("snake body should never be empty")
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub(crate) fn segments(&self) -> impl Iterator<Item = Coord> + '_ {
        self.body.iter().copied()
    }

    /// Enqueue a direction change from the input boundary.  Any number of
    /// changes may queue up between ticks; they are consumed one per tick.
    pub(crate) fn queue_direction(&mut self, direction: Direction) {
        self.pending.push_back(direction);
    }

    /// Consume at most one pending direction.  The entry is discarded when
    /// it matches the current direction or would reverse the snake into its
    /// own neck.
    pub(super) fn apply_direction_change(&mut self) {
        let Some(next) = self.pending.pop_front() else {
            return;
        };
        if next == self.direction || next == self.direction.reverse() {
            return;
        }
        self.direction = next;
    }

    /// The cell the head would move into on this tick.  Pure.
    pub(super) fn next_head(&self) -> Coord {
        self.direction.offset(self.head())
    }

    /// Append `new_head` without dropping the tail (food was eaten)
    pub(super) fn grow(&mut self, new_head: Coord) {
        self.body.push_back(new_head);
    }

    /// Append `new_head` and drop the tail, returning the vacated tail
    /// coordinate so the caller can clear its cell.
    pub(super) fn slide(&mut self, new_head: Coord) -> Coord {
        self.body.push_back(new_head);
        self.body
            .pop_front()
            .expect("snake body should never be empty")
    }
}
