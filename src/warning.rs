use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A pop-up for problems worth telling the player about without aborting,
/// such as a config file that failed to load.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    /// Build a warning from an error and its chain of causes, wrapped to
    /// the pop-up width.
    pub(crate) fn from_error(e: &anyhow::Error) -> Warning {
        let mut lines = Vec::new();
        for (i, cause) in e.chain().enumerate() {
            let msg = if i == 0 {
                cause.to_string()
            } else {
                format!("Caused by: {cause}")
            };
            let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH)).break_words(true);
            lines.extend(textwrap::wrap(&msg, opts).into_iter().map(String::from));
        }
        Warning { lines }
    }

    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter | Command::Space => Some(WarningOutcome::Dismissed),
            Command::Quit => Some(WarningOutcome::Quit),
            _ => None,
        }
    }

    fn height(&self) -> u16 {
        // text, a blank line, the dismissal hint, and the borders
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX).saturating_add(4)
    }
}

impl Widget for &Warning {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = center_rect(
            area,
            Size {
                width: Warning::WIDTH,
                height: self.height(),
            },
        );
        Clear.render(popup, buf);
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);
        block.render(popup, buf);
        let mut text = Text::from_iter(self.lines.iter().map(|s| Line::from(s.as_str())));
        text.push_line(Line::raw(""));
        text.push_line(Line::from("Press Enter to continue").centered());
        text.render(inner, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}
