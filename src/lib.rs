#![no_std]

pub mod bank;
pub mod color;
pub mod event;
pub mod renderer;
pub mod scheduler;
pub mod timer;

pub use bank::{BankConfigError, MAX_EVENTS_PER_TICK, TickOutcome, TimerBank, TimerBankConfig};
pub use color::{OFF, Rgb};
pub use event::{EVENT_QUEUE_DEPTH, EventQueue, TimerEvent};
pub use renderer::{
    CELLS_PER_CHANNEL, DisplayConfig, DisplayConfigError, DisplayRenderer, Palette,
};
pub use scheduler::{TickResult, TickScheduler};
pub use timer::{ChannelState, ChannelStatus};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Per-tick button sampler.
///
/// Implement this over the device's digital inputs; `true` means the
/// channel's button is currently held.
pub trait InputSource<const N: usize> {
    /// Sample all channel buttons for this tick.
    fn poll(&mut self) -> [bool; N];
}
