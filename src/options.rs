use crate::consts;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Gameplay options.
///
/// All values have defaults, so a config file only needs to name the ones
/// it changes.  Validation happens during deserialization via
/// [`RawOptions`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawOptions")]
pub(crate) struct Options {
    /// Number of columns on the game grid
    pub(crate) grid_cols: u16,

    /// Number of rows on the game grid
    pub(crate) grid_rows: u16,

    /// Time between game ticks, in milliseconds
    pub(crate) tick_interval_ms: u64,

    /// Snake length at session start
    pub(crate) snake_length: u16,

    /// Points awarded for eating food
    pub(crate) food_points: u32,

    /// Points awarded for a plain move
    pub(crate) move_points: u32,
}

impl Options {
    pub(crate) fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            grid_cols: consts::GRID_COLS,
            grid_rows: consts::GRID_ROWS,
            tick_interval_ms: consts::TICK_INTERVAL_MS,
            snake_length: consts::INITIAL_SNAKE_LENGTH,
            food_points: consts::FOOD_POINTS,
            move_points: consts::MOVE_POINTS,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawOptions {
    grid_cols: u16,
    grid_rows: u16,
    tick_interval_ms: u64,
    snake_length: u16,
    food_points: u32,
    move_points: u32,
}

impl Default for RawOptions {
    fn default() -> RawOptions {
        let Options {
            grid_cols,
            grid_rows,
            tick_interval_ms,
            snake_length,
            food_points,
            move_points,
        } = Options::default();
        RawOptions {
            grid_cols,
            grid_rows,
            tick_interval_ms,
            snake_length,
            food_points,
            move_points,
        }
    }
}

impl TryFrom<RawOptions> for Options {
    type Error = OptionsError;

    fn try_from(value: RawOptions) -> Result<Options, OptionsError> {
        if value.grid_cols == 0 || value.grid_rows == 0 {
            return Err(OptionsError::EmptyGrid);
        }
        if value.tick_interval_ms == 0 {
            return Err(OptionsError::ZeroTick);
        }
        if value.snake_length == 0 {
            return Err(OptionsError::ZeroLength);
        }
        if value.snake_length > value.grid_cols {
            return Err(OptionsError::SnakeTooLong);
        }
        Ok(Options {
            grid_cols: value.grid_cols,
            grid_rows: value.grid_rows,
            tick_interval_ms: value.tick_interval_ms,
            snake_length: value.snake_length,
            food_points: value.food_points,
            move_points: value.move_points,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum OptionsError {
    #[error("grid-cols and grid-rows must be positive")]
    EmptyGrid,
    #[error("tick-interval-ms must be positive")]
    ZeroTick,
    #[error("snake-length must be at least 1")]
    ZeroLength,
    #[error("snake-length must not exceed grid-cols")]
    SnakeTooLong,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        let raw = RawOptions::default();
        assert_eq!(Options::try_from(raw), Ok(Options::default()));
    }

    #[test]
    fn deserialize_partial_table() {
        let opts = toml::from_str::<Options>("grid-cols = 10\ngrid-rows = 8\n").unwrap();
        assert_eq!(
            opts,
            Options {
                grid_cols: 10,
                grid_rows: 8,
                ..Options::default()
            }
        );
    }

    #[test]
    fn tick_interval() {
        let opts = toml::from_str::<Options>("tick-interval-ms = 125\n").unwrap();
        assert_eq!(opts.tick_interval(), Duration::from_millis(125));
    }

    #[rstest]
    #[case("grid-cols = 0\n")]
    #[case("grid-rows = 0\n")]
    #[case("tick-interval-ms = 0\n")]
    #[case("snake-length = 0\n")]
    #[case("grid-cols = 4\nsnake-length = 5\n")]
    fn rejects_invalid(#[case] src: &str) {
        assert!(toml::from_str::<Options>(src).is_err());
    }
}
