//! Timer bank: N channels advanced once per fixed-period tick.

use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::event::TimerEvent;
use crate::timer::{ChannelState, ChannelStatus, TimerChannel};

/// Upper bound on lifecycle events a single tick can produce.
pub const MAX_EVENTS_PER_TICK: usize = 16;

/// Timing configuration for the bank.
///
/// Defaults are the device's stock timings. All thresholds compare against
/// consecutive button-hold time and are evaluated on release.
#[derive(Debug, Clone, Copy)]
pub struct TimerBankConfig {
    /// Fixed period between `tick` calls.
    pub tick_period: Duration,
    /// Minimum hold to start a stopped channel.
    pub start_threshold: Duration,
    /// Minimum hold to shut one channel down.
    pub channel_shutdown_threshold: Duration,
    /// Minimum hold to request shutting every channel down.
    pub global_shutdown_threshold: Duration,
    /// Running time after which a channel finishes.
    pub timer_duration: Duration,
    /// Time a finished channel blocks suspension after finishing.
    pub suspend_delay: Duration,
}

impl Default for TimerBankConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(100),
            start_threshold: Duration::from_millis(100),
            channel_shutdown_threshold: Duration::from_millis(2000),
            global_shutdown_threshold: Duration::from_millis(5000),
            timer_duration: Duration::from_millis(24_000),
            suspend_delay: Duration::from_millis(5000),
        }
    }
}

/// Rejected bank configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankConfigError {
    ZeroTickPeriod,
    ZeroTimerDuration,
    /// Hold thresholds must satisfy start < channel shutdown < global shutdown.
    ThresholdsNotAscending,
}

impl core::fmt::Display for BankConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroTickPeriod => write!(f, "tick period must be non-zero"),
            Self::ZeroTimerDuration => write!(f, "timer duration must be non-zero"),
            Self::ThresholdsNotAscending => {
                write!(f, "hold thresholds must be strictly ascending")
            }
        }
    }
}

impl TimerBankConfig {
    /// Check the construction-time contract.
    pub fn validate(&self) -> Result<(), BankConfigError> {
        if self.tick_period.as_millis() == 0 {
            return Err(BankConfigError::ZeroTickPeriod);
        }
        if self.timer_duration.as_millis() == 0 {
            return Err(BankConfigError::ZeroTimerDuration);
        }
        if self.start_threshold >= self.channel_shutdown_threshold
            || self.channel_shutdown_threshold >= self.global_shutdown_threshold
        {
            return Err(BankConfigError::ThresholdsNotAscending);
        }
        Ok(())
    }
}

/// Everything one tick produced.
#[derive(Debug, Clone)]
pub struct TickOutcome<const N: usize> {
    /// Post-tick channel states, index order matches the inputs.
    pub states: [ChannelState; N],
    /// Lifecycle transitions observed this tick.
    pub events: Vec<TimerEvent, MAX_EVENTS_PER_TICK>,
    /// A very long press asked for a device-level shutdown. The bank has
    /// already deactivated every channel; powering down is the host's call.
    pub global_shutdown_requested: bool,
    /// No channel is held, running, or freshly finished; the host may enter
    /// low-power mode. Advisory only.
    pub may_suspend: bool,
}

/// Owner of the N per-channel state machines.
///
/// Single-threaded by design: one caller invokes `tick` once per period and
/// the bank owns all of its state exclusively.
pub struct TimerBank<const N: usize> {
    config: TimerBankConfig,
    channels: [TimerChannel; N],
}

impl<const N: usize> TimerBank<N> {
    /// Create a bank with all channels `Deactivated`.
    pub fn new(config: TimerBankConfig) -> Result<Self, BankConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            channels: [TimerChannel::new(); N],
        })
    }

    pub fn config(&self) -> &TimerBankConfig {
        &self.config
    }

    /// Post-tick snapshot of every channel, in index order.
    pub fn states(&self) -> [ChannelState; N] {
        self.channels.map(|channel| channel.state)
    }

    /// Advance every channel by one tick.
    ///
    /// Channels are processed in index order 0..N. `inputs[i]` is true while
    /// channel i's button is held.
    pub fn tick(&mut self, inputs: [bool; N]) -> TickOutcome<N> {
        let mut events: Vec<TimerEvent, MAX_EVENTS_PER_TICK> = Vec::new();
        let mut global_shutdown_requested = false;

        for (channel, (slot, held)) in self.channels.iter_mut().zip(inputs).enumerate() {
            let outcome = slot.step(held, &self.config);

            if outcome.started {
                #[cfg(feature = "esp32-log")]
                println!("timer {} started", channel);
                let _ = events.push(TimerEvent::Started { channel });
            }
            if outcome.shut_down {
                #[cfg(feature = "esp32-log")]
                println!("timer {} shut down", channel);
                let _ = events.push(TimerEvent::ChannelShutdown { channel });
            }
            if outcome.finished {
                #[cfg(feature = "esp32-log")]
                println!("timer {} finished", channel);
                let _ = events.push(TimerEvent::Finished { channel });
            }
            if outcome.global_shutdown {
                #[cfg(feature = "esp32-log")]
                println!("shutdown all requested by timer {}", channel);
                global_shutdown_requested = true;
                let _ = events.push(TimerEvent::ShutdownAllRequested);
            }
        }

        if global_shutdown_requested {
            for slot in &mut self.channels {
                slot.deactivate();
            }
        }

        let may_suspend = self
            .channels
            .iter()
            .zip(inputs)
            .all(|(slot, held)| !held && Self::channel_allows_suspend(slot.state, &self.config));

        TickOutcome {
            states: self.states(),
            events,
            global_shutdown_requested,
            may_suspend,
        }
    }

    fn channel_allows_suspend(state: ChannelState, config: &TimerBankConfig) -> bool {
        match state.status {
            ChannelStatus::Deactivated => true,
            ChannelStatus::Running => false,
            ChannelStatus::Finished => state.finished_elapsed >= config.suspend_delay,
        }
    }
}
