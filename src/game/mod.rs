mod cells;
mod direction;
mod grid;
mod session;
mod snake;
use self::cells::CellKind;
use self::direction::Direction;
use self::grid::Coord;
use self::session::{EndReason, Session};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::title::TitleScreen;
use crate::util::{center_rect, get_display_area, Globals};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

/// The game screen: one [`Session`] plus the timer that ticks it.
///
/// Input events only ever touch the snake's pending-direction queue; the
/// session itself mutates once per tick, so ticks are strictly serial.
/// When the session ends, ticking stops and the final score is shown until
/// the player acknowledges it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    session: Session<R>,
    globals: Globals,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, rng: R) -> Game<R> {
        let session = Session::with_rng(globals.options, rng);
        Game {
            session,
            globals,
            next_tick: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.session.in_progress() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.globals.options.tick_interval());
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                let _ = self.session.tick();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if self.session.in_progress() {
            match cmd {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.session.queue_direction(Direction::Up),
                Command::Down => self.session.queue_direction(Direction::Down),
                Command::Left => self.session.queue_direction(Direction::Left),
                Command::Right => self.session.queue_direction(Direction::Right),
                _ => (),
            }
        } else {
            match cmd {
                Command::Space | Command::Enter => {
                    return Some(Screen::Title(TitleScreen::new(self.globals.clone())))
                }
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            }
        }
        None
    }

    fn head_symbol(&self) -> char {
        match self.session.snake().direction() {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}", self.session.score()),
            self.globals.theme.score_bar(),
        )
        .render(score_area, buf);

        let grid = self.session.grid();
        let block_size = Size {
            width: grid.max_cols().saturating_add(2),
            height: grid.max_rows().saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let board = block_area.inner(Margin::new(1, 1));
        let mut canvas = Canvas { area: board, buf };
        for (coord, kind) in self.session.cells().kinds() {
            match kind {
                CellKind::Empty => (),
                CellKind::Food => {
                    canvas.draw_cell(coord, consts::FOOD_SYMBOL, self.globals.theme.food());
                }
                CellKind::Snake => {
                    canvas.draw_cell(coord, consts::SNAKE_BODY_SYMBOL, self.globals.theme.snake());
                }
            }
        }
        canvas.draw_cell(
            self.session.snake().head(),
            self.head_symbol(),
            self.globals.theme.snake(),
        );

        if let Some(reason) = self.session.end() {
            if let Some(hit) = match reason {
                EndReason::SelfCollision => Some(self.session.next_head()),
                EndReason::OutOfBounds => Some(self.session.snake().head()),
                EndReason::Cleared => None,
            } {
                canvas.draw_cell(hit, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            }
            let banner = if reason == EndReason::Cleared {
                " — BOARD CLEARED —"
            } else {
                " — GAME OVER —"
            };
            Span::from(banner).render(msg1_area, buf);
            Line::from_iter([
                Span::raw(format!(" Final Score: {} — Title (", self.session.score())),
                Span::styled("Space", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        }
    }
}

/// Maps 1-based grid coordinates onto a buffer region, clipping anything
/// outside it.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, coord: Coord, symbol: char, style: Style) {
        let Some(dx) = coord.x.checked_sub(1) else {
            return;
        };
        let Some(dy) = coord.y.checked_sub(1) else {
            return;
        };
        if dx >= self.area.width || dy >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(dx) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(dy) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
