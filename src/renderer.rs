//! State-to-frame projection for the LED strip.
//!
//! Each channel owns a group of four consecutive cells: one status cell and
//! three progress cells. The projection is a pure function of the channel
//! states; rendering the same states twice produces the same frame.

use embassy_time::Duration;

use crate::color::{OFF, Rgb, blink_dark};
use crate::timer::{ChannelState, ChannelStatus};

/// LED cells reserved per channel.
pub const CELLS_PER_CHANNEL: usize = 4;

const STATUS_CELL: usize = 0;
const PROGRESS_CELL_1: usize = 1;
const PROGRESS_CELL_2: usize = 2;
/// Lit only during the finished animation, never while running.
const PROGRESS_CELL_3: usize = 3;

/// Colors used by the projection; off cells are [`OFF`].
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Status cell while running.
    pub active: Rgb,
    /// Progress cells while running.
    pub progress: Rgb,
    /// Whole group during the finished animation.
    pub done: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active: Rgb { r: 0xFF, g: 0, b: 0 },
            progress: Rgb { r: 0, g: 0xFF, b: 0 },
            done: Rgb { r: 0, g: 0xFF, b: 0 },
        }
    }
}

/// Configuration for the display projection.
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub palette: Palette,
    /// Running time at which a channel finishes; progress cells light at
    /// one third and two thirds of it.
    pub timer_duration: Duration,
    /// How long a finished channel blinks before going dark.
    pub finished_animation_duration: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            timer_duration: Duration::from_millis(24_000),
            finished_animation_duration: Duration::from_millis(20_000),
        }
    }
}

/// Rejected display configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayConfigError {
    /// `CELLS` must equal `CHANNELS * CELLS_PER_CHANNEL`.
    CellCountMismatch { expected: usize, actual: usize },
    ZeroTimerDuration,
}

impl core::fmt::Display for DisplayConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::ZeroTimerDuration => write!(f, "timer duration must be non-zero"),
        }
    }
}

/// Maps channel states to an owned frame of `CELLS` colors.
pub struct DisplayRenderer<const CHANNELS: usize, const CELLS: usize> {
    config: DisplayConfig,
    frame: [Rgb; CELLS],
}

impl<const CHANNELS: usize, const CELLS: usize> DisplayRenderer<CHANNELS, CELLS> {
    pub fn new(config: DisplayConfig) -> Result<Self, DisplayConfigError> {
        if CELLS != CHANNELS * CELLS_PER_CHANNEL {
            return Err(DisplayConfigError::CellCountMismatch {
                expected: CHANNELS * CELLS_PER_CHANNEL,
                actual: CELLS,
            });
        }
        if config.timer_duration.as_millis() == 0 {
            return Err(DisplayConfigError::ZeroTimerDuration);
        }
        Ok(Self {
            config,
            frame: [OFF; CELLS],
        })
    }

    /// Project the channel states into the frame buffer.
    ///
    /// Pure with respect to `states`: no state survives between calls, every
    /// cell is rewritten.
    pub fn render(&mut self, states: &[ChannelState; CHANNELS]) -> &[Rgb] {
        let config = self.config;
        self.frame = [OFF; CELLS];
        for (group, state) in self.frame.chunks_exact_mut(CELLS_PER_CHANNEL).zip(states) {
            render_group(&config, *state, group);
        }
        &self.frame
    }
}

fn render_group(config: &DisplayConfig, state: ChannelState, group: &mut [Rgb]) {
    match state.status {
        ChannelStatus::Deactivated => {}
        ChannelStatus::Running => {
            group[STATUS_CELL] = if blink_dark(state.running_elapsed) {
                OFF
            } else {
                config.palette.active
            };

            let elapsed = state.running_elapsed.as_millis();
            let duration = config.timer_duration.as_millis();
            if elapsed > duration / 3 {
                group[PROGRESS_CELL_1] = config.palette.progress;
            }
            if elapsed > duration * 2 / 3 {
                group[PROGRESS_CELL_2] = config.palette.progress;
            }
        }
        ChannelStatus::Finished => {
            if state.finished_elapsed < config.finished_animation_duration {
                let color = if blink_dark(state.finished_elapsed) {
                    OFF
                } else {
                    config.palette.done
                };
                group[STATUS_CELL] = color;
                group[PROGRESS_CELL_1] = color;
                group[PROGRESS_CELL_2] = color;
                group[PROGRESS_CELL_3] = color;
            }
        }
    }
}
