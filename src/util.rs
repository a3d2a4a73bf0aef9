use crate::consts;
use crate::options::Options;
use crate::theme::Theme;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Values shared by every screen of the application
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Globals {
    pub(crate) options: Options,
    pub(crate) theme: Theme,
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}
