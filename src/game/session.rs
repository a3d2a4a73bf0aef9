use super::cells::{CellKind, CellMap};
use super::direction::Direction;
use super::grid::{Coord, Grid};
use super::snake::Snake;
use crate::options::Options;
use rand::Rng;

/// One complete game from start to terminal end.
///
/// A session exclusively owns its grid, cell map, snake, food, score and
/// RNG; starting a new game builds a fresh session rather than resetting
/// shared state.  All gameplay conditions (hitting a wall, hitting the
/// body, a full board) are expressed as [`TickOutcome`] values, never as
/// errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    pub(super) rng: R,
    pub(super) grid: Grid,
    pub(super) cells: CellMap,
    pub(super) snake: Snake,
    pub(super) food: Option<Coord>,
    pub(super) score: u32,
    pub(super) end: Option<EndReason>,
    pub(super) options: Options,
}

impl Session<rand::rngs::ThreadRng> {
    pub(crate) fn new(options: Options) -> Self {
        Session::with_rng(options, rand::rng())
    }
}

impl<R: Rng> Session<R> {
    pub(crate) fn with_rng(options: Options, rng: R) -> Session<R> {
        let grid = Grid::new(options.grid_cols, options.grid_rows);
        let mut cells = CellMap::new(grid);
        // Centered, horizontally oriented, heading right.  The head is
        // nudged rightwards when the snake would not otherwise fit to the
        // left of center.
        let head = Coord::new(
            (grid.max_cols() / 2).max(options.snake_length),
            (grid.max_rows() / 2).max(1),
        );
        let snake = Snake::new(head, options.snake_length, Direction::Right);
        for coord in snake.segments() {
            cells.set(coord, CellKind::Snake);
        }
        let mut session = Session {
            rng,
            grid,
            cells,
            snake,
            food: None,
            score: 0,
            end: None,
            options,
        };
        session.spawn_food();
        if session.food.is_none() {
            session.end = Some(EndReason::Cleared);
        }
        session
    }

    /// Advance the game by one step.  Ticking a finished session is a
    /// no-op that reports the terminal outcome again.
    pub(crate) fn tick(&mut self) -> TickOutcome {
        if let Some(reason) = self.end {
            return TickOutcome::Ended(reason);
        }
        self.snake.apply_direction_change();
        let head = self.snake.next_head();
        // Collision is judged against the pre-move body, so the tail cell
        // still counts as occupied on the tick it vacates.
        if !self.grid.in_bounds(head) {
            return self.finish(EndReason::OutOfBounds);
        }
        if self.cells.is_kind(head, CellKind::Snake) {
            return self.finish(EndReason::SelfCollision);
        }
        if self.cells.is_kind(head, CellKind::Food) {
            self.snake.grow(head);
            self.cells.set(head, CellKind::Snake);
            self.score += self.options.food_points;
            self.spawn_food();
            if self.food.is_none() {
                return self.finish(EndReason::Cleared);
            }
            TickOutcome::Ate
        } else {
            let tail = self.snake.slide(head);
            self.cells.set(tail, CellKind::Empty);
            self.cells.set(head, CellKind::Snake);
            self.score += self.options.move_points;
            TickOutcome::Moved
        }
    }

    /// Mark a uniformly random empty cell as food.  Leaves `self.food`
    /// unset when the board has no empty cell left.
    fn spawn_food(&mut self) {
        self.food = None;
        if self.cells.empty_cells() == 0 {
            return;
        }
        loop {
            let coord = Coord::new(
                self.rng.random_range(1..=self.grid.max_cols()),
                self.rng.random_range(1..=self.grid.max_rows()),
            );
            if self.cells.is_kind(coord, CellKind::Empty) {
                self.cells.set(coord, CellKind::Food);
                self.food = Some(coord);
                return;
            }
        }
    }

    fn finish(&mut self, reason: EndReason) -> TickOutcome {
        self.end = Some(reason);
        TickOutcome::Ended(reason)
    }
}

impl<R> Session<R> {
    pub(crate) fn in_progress(&self) -> bool {
        self.end.is_none()
    }

    pub(crate) fn end(&self) -> Option<EndReason> {
        self.end
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn cells(&self) -> &CellMap {
        &self.cells
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    /// The cell the head last tried to enter; where a self-collision
    /// happened, when one did.
    pub(crate) fn next_head(&self) -> Coord {
        self.snake.next_head()
    }

    pub(crate) fn queue_direction(&mut self, direction: Direction) {
        self.snake.queue_direction(direction);
    }
}

/// The result of one tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    /// The snake slid forwards one cell
    Moved,
    /// The snake ate food and grew by one segment
    Ate,
    /// The session reached a terminal state
    Ended(EndReason),
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EndReason {
    /// The head moved outside the grid
    OutOfBounds,
    /// The head moved onto a snake cell
    SelfCollision,
    /// The snake filled the board and no cell was left to spawn food in
    Cleared,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn options(cols: u16, rows: u16, length: u16) -> Options {
        Options {
            grid_cols: cols,
            grid_rows: rows,
            snake_length: length,
            ..Options::default()
        }
    }

    fn session(cols: u16, rows: u16, length: u16) -> Session<ChaCha12Rng> {
        Session::with_rng(
            options(cols, rows, length),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    /// Move the food to a known cell so ticks are fully deterministic
    fn pin_food(session: &mut Session<ChaCha12Rng>, coord: Coord) {
        if let Some(old) = session.food {
            session.cells.set(old, CellKind::Empty);
        }
        assert!(session.cells.is_kind(coord, CellKind::Empty));
        session.cells.set(coord, CellKind::Food);
        session.food = Some(coord);
    }

    fn body(session: &Session<ChaCha12Rng>) -> Vec<Coord> {
        session.snake.segments().collect()
    }

    #[test]
    fn new_session() {
        let session = session(10, 10, 3);
        assert!(session.in_progress());
        assert_eq!(session.score(), 0);
        assert_eq!(
            body(&session),
            [Coord::new(3, 5), Coord::new(4, 5), Coord::new(5, 5)]
        );
        for coord in session.snake.segments() {
            assert!(session.cells.is_kind(coord, CellKind::Snake));
        }
        let food = session.food.expect("food should spawn");
        assert!(session.cells.is_kind(food, CellKind::Food));
        assert_eq!(session.cells.empty_cells(), 100 - 3 - 1);
    }

    #[test]
    fn plain_move() {
        let mut session = session(10, 10, 3);
        pin_food(&mut session, Coord::new(1, 1));
        assert_eq!(session.tick(), TickOutcome::Moved);
        assert_eq!(
            body(&session),
            [Coord::new(4, 5), Coord::new(5, 5), Coord::new(6, 5)]
        );
        assert_eq!(session.score(), 1);
        assert!(session.cells.is_kind(Coord::new(3, 5), CellKind::Empty));
        assert!(session.cells.is_kind(Coord::new(6, 5), CellKind::Snake));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut session = session(10, 10, 3);
        pin_food(&mut session, Coord::new(1, 1));
        session.queue_direction(Direction::Left);
        assert_eq!(session.tick(), TickOutcome::Moved);
        // moved right regardless
        assert_eq!(
            body(&session),
            [Coord::new(4, 5), Coord::new(5, 5), Coord::new(6, 5)]
        );
        assert_eq!(session.snake.direction(), Direction::Right);
    }

    #[test]
    fn eating_grows_and_respawns() {
        let mut session = session(10, 10, 3);
        pin_food(&mut session, Coord::new(6, 5));
        assert_eq!(session.tick(), TickOutcome::Ate);
        assert_eq!(session.snake.len(), 4);
        assert_eq!(
            body(&session),
            [
                Coord::new(3, 5),
                Coord::new(4, 5),
                Coord::new(5, 5),
                Coord::new(6, 5),
            ]
        );
        assert_eq!(session.score(), 10);
        let food = session.food.expect("food should respawn");
        assert!(session.cells.is_kind(food, CellKind::Food));
        assert!(!session.snake.segments().any(|c| c == food));
    }

    #[test]
    fn score_accumulates_per_tick_kind() {
        let mut session = session(10, 10, 3);
        pin_food(&mut session, Coord::new(1, 1));
        assert_eq!(session.tick(), TickOutcome::Moved);
        assert_eq!(session.tick(), TickOutcome::Moved);
        pin_food(&mut session, Coord::new(8, 5));
        assert_eq!(session.tick(), TickOutcome::Ate);
        // two plain moves and one food tick
        assert_eq!(session.score(), 2 + 10);
    }

    #[test]
    fn wall_collision_ends_session() {
        let mut session = session(4, 3, 3);
        pin_food(&mut session, Coord::new(1, 3));
        assert_eq!(session.tick(), TickOutcome::Moved);
        assert_eq!(session.tick(), TickOutcome::Ended(EndReason::OutOfBounds));
        assert!(!session.in_progress());
        assert_eq!(session.score(), 1);
        // ticking a finished session changes nothing
        assert_eq!(session.tick(), TickOutcome::Ended(EndReason::OutOfBounds));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn self_collision_ends_session() {
        let mut session = session(10, 10, 5);
        pin_food(&mut session, Coord::new(1, 1));
        session.queue_direction(Direction::Up);
        assert_eq!(session.tick(), TickOutcome::Moved);
        session.queue_direction(Direction::Left);
        assert_eq!(session.tick(), TickOutcome::Moved);
        session.queue_direction(Direction::Down);
        assert_eq!(
            session.tick(),
            TickOutcome::Ended(EndReason::SelfCollision)
        );
        assert!(!session.in_progress());
    }

    #[test]
    fn tail_cell_blocks_on_the_tick_it_vacates() {
        // A length-4 snake turning in a tight square runs into the cell
        // its tail is about to leave.
        let mut session = session(10, 10, 4);
        pin_food(&mut session, Coord::new(1, 1));
        session.queue_direction(Direction::Down);
        assert_eq!(session.tick(), TickOutcome::Moved);
        session.queue_direction(Direction::Left);
        assert_eq!(session.tick(), TickOutcome::Moved);
        assert_eq!(
            body(&session),
            [
                Coord::new(4, 5),
                Coord::new(5, 5),
                Coord::new(5, 6),
                Coord::new(4, 6),
            ]
        );
        session.queue_direction(Direction::Up);
        assert_eq!(
            session.tick(),
            TickOutcome::Ended(EndReason::SelfCollision)
        );
    }

    #[test]
    fn food_never_spawns_on_the_snake() {
        for seed in 0..64 {
            let session = Session::with_rng(options(4, 4, 3), ChaCha12Rng::seed_from_u64(seed));
            let food = session.food.expect("food should spawn");
            assert!(session.cells.is_kind(food, CellKind::Food));
            assert!(!session.snake.segments().any(|c| c == food));
        }
    }

    #[test]
    fn filling_the_board_clears_it() {
        let mut session = session(2, 1, 1);
        // the only empty cell is (2, 1), so the food must be there
        assert_eq!(session.food, Some(Coord::new(2, 1)));
        assert_eq!(session.tick(), TickOutcome::Ended(EndReason::Cleared));
        assert_eq!(session.score(), 10);
        assert_eq!(session.food, None);
        assert_eq!(session.cells.empty_cells(), 0);
    }

    #[test]
    fn board_full_at_start_ends_immediately() {
        let mut session = session(3, 1, 3);
        assert!(!session.in_progress());
        assert_eq!(session.tick(), TickOutcome::Ended(EndReason::Cleared));
        assert_eq!(session.score(), 0);
    }
}
