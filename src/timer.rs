//! Per-channel hold-to-start timer state machine.
//!
//! Each channel is driven by one physical button. A short hold starts the
//! countdown, a long hold shuts the channel down, a very long hold asks for
//! every channel to shut down. Thresholds are evaluated once, on the tick
//! the button is released.

use embassy_time::Duration;

use crate::bank::TimerBankConfig;

/// Lifecycle state of a single timer channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelStatus {
    /// No countdown in progress, LED group dark.
    #[default]
    Deactivated,
    /// Countdown in progress.
    Running,
    /// Countdown ran out. Only a re-press or a shutdown leaves this state;
    /// the finished animation ending does not.
    Finished,
}

/// Observable state of one channel after a tick.
///
/// The running and finished counters are separate fields; each one is reset
/// on the transition into its state and is meaningful only while the
/// channel is in that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelState {
    pub status: ChannelStatus,
    /// Time spent in `Running`, counted from the most recent start.
    pub running_elapsed: Duration,
    /// Time spent in `Finished`, counted from the most recent finish.
    pub finished_elapsed: Duration,
}

impl ChannelState {
    pub const fn new() -> Self {
        Self {
            status: ChannelStatus::Deactivated,
            running_elapsed: Duration::from_millis(0),
            finished_elapsed: Duration::from_millis(0),
        }
    }
}

impl Default for ChannelState {
    fn default() -> Self {
        Self::new()
    }
}

/// What a single `step` call did to the channel.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StepOutcome {
    pub(crate) started: bool,
    pub(crate) shut_down: bool,
    pub(crate) finished: bool,
    pub(crate) global_shutdown: bool,
}

/// One timer slot: observable state plus the button-hold bookkeeping.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TimerChannel {
    pub(crate) state: ChannelState,
    /// Consecutive time the button has been held, cleared on release.
    held: Duration,
    /// Previous tick's held flag, for explicit release-edge detection.
    was_held: bool,
}

impl TimerChannel {
    pub(crate) const fn new() -> Self {
        Self {
            state: ChannelState::new(),
            held: Duration::from_millis(0),
            was_held: false,
        }
    }

    /// Advance the channel by one tick.
    ///
    /// A channel that starts or finishes on this tick reports the freshly
    /// reset counter (zero) in its post-tick state; accumulation for that
    /// counter begins on the next tick.
    pub(crate) fn step(&mut self, held: bool, config: &TimerBankConfig) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let mut just_started = false;

        if held {
            self.held = accrue(self.held, config.tick_period);
        } else if self.was_held {
            // Release edge: highest matched threshold wins.
            if self.held > config.global_shutdown_threshold {
                outcome.global_shutdown = true;
            } else if self.held > config.channel_shutdown_threshold {
                self.deactivate();
                outcome.shut_down = true;
            } else if self.held > config.start_threshold
                && self.state.status != ChannelStatus::Running
            {
                self.state.status = ChannelStatus::Running;
                self.state.running_elapsed = Duration::from_millis(0);
                just_started = true;
                outcome.started = true;
            }
            self.held = Duration::from_millis(0);
        }
        self.was_held = held;

        if self.state.status == ChannelStatus::Running && !just_started {
            self.state.running_elapsed = accrue(self.state.running_elapsed, config.tick_period);
            if self.state.running_elapsed > config.timer_duration {
                self.state.status = ChannelStatus::Finished;
                self.state.finished_elapsed = Duration::from_millis(0);
                outcome.finished = true;
                return outcome;
            }
        }

        if self.state.status == ChannelStatus::Finished {
            self.state.finished_elapsed = accrue(self.state.finished_elapsed, config.tick_period);
        }

        outcome
    }

    /// Reset the channel to `Deactivated` and clear both counters.
    pub(crate) fn deactivate(&mut self) {
        self.state = ChannelState::new();
    }
}

/// Saturating duration accumulation; the finished counter may grow without
/// bound, so overflow must pin instead of wrap.
fn accrue(total: Duration, step: Duration) -> Duration {
    Duration::from_millis(total.as_millis().saturating_add(step.as_millis()))
}
