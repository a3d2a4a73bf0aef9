use crate::consts;
use ratatui::style::Style;
use serde::Deserialize;

/// Optional style overrides from the `[theme]` config table.
///
/// Values are `parse-style` strings such as `"bold green"` or
/// `"yellow on black"`; anything left unset falls back to the defaults in
/// [`consts`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Theme {
    snake: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    score_bar: Option<parse_style::Style>,
}

impl Theme {
    pub(crate) fn snake(&self) -> Style {
        self.snake
            .as_ref()
            .map_or(consts::SNAKE_STYLE, |s| Style::from(s.clone()))
    }

    pub(crate) fn food(&self) -> Style {
        self.food
            .as_ref()
            .map_or(consts::FOOD_STYLE, |s| Style::from(s.clone()))
    }

    pub(crate) fn score_bar(&self) -> Style {
        self.score_bar
            .as_ref()
            .map_or(consts::SCORE_BAR_STYLE, |s| Style::from(s.clone()))
    }
}
