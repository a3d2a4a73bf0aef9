use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::util::{get_display_area, Globals};
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::Widget,
    Frame,
};
use std::io;

/// The title screen shown between games.
///
/// A `Warning` pop-up (e.g. a config file that failed to load) takes over
/// input until dismissed.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TitleScreen {
    globals: Globals,
    warning: Option<Warning>,
}

impl TitleScreen {
    pub(crate) fn new(globals: Globals) -> TitleScreen {
        TitleScreen {
            globals,
            warning: None,
        }
    }

    pub(crate) fn with_warning(globals: Globals, warning: Option<Warning>) -> TitleScreen {
        TitleScreen { globals, warning }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if let Some(ref warning) = self.warning {
            let outcome = warning.handle_command(cmd)?;
            match outcome {
                WarningOutcome::Dismissed => self.warning = None,
                WarningOutcome::Quit => return Some(Screen::Quit),
            }
            return None;
        }
        match cmd {
            Command::Space | Command::Enter => {
                Some(Screen::Game(Game::new(self.globals.clone())))
            }
            Command::Q | Command::Quit => Some(Screen::Quit),
            _ => None,
        }
    }
}

static INSTRUCTIONS: &[&str] = &[
    "Steer the snake with:",
    "      ← ↓ ↑ →",
    "  or: w a s d",
    "  or: h j k l",
    "Eat the food; don't hit",
    "the walls or yourself!",
];

const INSTRUCTIONS_WIDTH: u16 = 24;
const INSTRUCTIONS_HEIGHT: u16 = 6;

impl Widget for &TitleScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [mut logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(display);
        logo_area.y = logo_area.y.saturating_add(1);
        logo_area.height = Logo::HEIGHT;
        Logo.render(logo_area, buf);

        let mut y = logo_area.bottom().saturating_add(2);
        let [instructions_area] = Layout::horizontal([INSTRUCTIONS_WIDTH])
            .flex(Flex::Center)
            .areas(Rect {
                y,
                height: INSTRUCTIONS_HEIGHT,
                ..display
            });
        Text::from_iter(INSTRUCTIONS.iter().copied()).render(instructions_area, buf);
        y = y.saturating_add(INSTRUCTIONS_HEIGHT + 2);

        Line::from_iter([
            Span::raw("Play ("),
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .centered()
        .render(
            Rect {
                y,
                height: 1,
                ..display
            },
            buf,
        );
        y = y.saturating_add(2);
        Line::from_iter([
            Span::raw("Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .centered()
        .render(
            Rect {
                y,
                height: 1,
                ..display
            },
            buf,
        );

        if let Some(ref warning) = self.warning {
            warning.render(display, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Logo;

impl Logo {
    const GRID_WIDTH: u16 = 20;
    const SNAKE_WIDTH: u16 = 28;
    const HEIGHT: u16 = 5;
    const WIDTH: u16 = Self::GRID_WIDTH + Self::SNAKE_WIDTH;
}

#[rustfmt::skip]
static GRID: &[&str] = &[
     "  ____      _     _ ",
     " / ___|_ __(_) __| |",
     "| |  _| '__| |/ _` |",
     "| |_| | |  | | (_| |",
    r" \____|_|  |_|\__,_|",
];

#[rustfmt::skip]
static SNAKE: &[&str] = &[
     " ____              _        ",
     "/ ___| _ __   __ _| | _____ ",
    r"\___ \| '_ \ / _` | |/ / _ \",
     " ___) | | | | (_| |   <  __/",
    r"|____/|_| |_|\__,_|_|\_\___|",
];

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid_text = Text::from_iter(GRID.iter().copied()).style(consts::FOOD_STYLE);
        grid_text.render(area, buf);
        let snake_area = Rect {
            x: area.x.saturating_add(Self::GRID_WIDTH),
            width: area.width.saturating_sub(Self::GRID_WIDTH),
            ..area
        };
        let snake_text = Text::from_iter(SNAKE.iter().copied()).style(consts::SNAKE_STYLE);
        snake_text.render(snake_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn space_starts_a_game() {
        let mut screen = TitleScreen::new(Globals::default());
        assert!(matches!(
            screen.handle_event(Event::Key(KeyCode::Char(' ').into())),
            Some(Screen::Game(_))
        ));
    }

    #[test]
    fn q_quits() {
        let mut screen = TitleScreen::new(Globals::default());
        assert!(matches!(
            screen.handle_event(Event::Key(KeyCode::Char('q').into())),
            Some(Screen::Quit)
        ));
    }

    #[test]
    fn movement_keys_are_ignored() {
        let mut screen = TitleScreen::new(Globals::default());
        assert!(screen
            .handle_event(Event::Key(KeyCode::Char('w').into()))
            .is_none());
    }

    #[test]
    fn warning_blocks_start_until_dismissed() {
        let warning = Warning::from_error(&anyhow::anyhow!("something broke"));
        let mut screen = TitleScreen::with_warning(Globals::default(), Some(warning));
        assert!(screen
            .handle_event(Event::Key(KeyCode::Char(' ').into()))
            .is_none());
        assert!(screen.warning.is_some());
        assert!(screen
            .handle_event(Event::Key(KeyCode::Enter.into()))
            .is_none());
        assert!(screen.warning.is_none());
        assert!(matches!(
            screen.handle_event(Event::Key(KeyCode::Char(' ').into())),
            Some(Screen::Game(_))
        ));
    }
}
