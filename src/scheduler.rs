//! Tick pacing for the timer loop.
//!
//! Portable pacing without async/await or platform-specific timers. The
//! scheduler samples inputs, ticks the bank, renders and writes the frame;
//! the caller performs the actual wait between ticks and acts on the
//! suspend and shutdown signals.

use embassy_time::{Duration, Instant};

use crate::bank::TimerBank;
use crate::event::EventQueue;
use crate::renderer::DisplayRenderer;
use crate::{InputSource, OutputDriver};

/// Result of one scheduled tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
    /// Aggregate suspend signal from the bank, advisory.
    pub may_suspend: bool,
    /// A very long press asked for a device-level shutdown.
    pub global_shutdown_requested: bool,
}

/// Drives the whole pipeline once per tick.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(bank, renderer, buttons, strip);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     if result.may_suspend {
///         // enter low-power mode
///     }
///     // platform-specific sleep until result.next_deadline
/// }
/// ```
pub struct TickScheduler<'a, I, O, const CHANNELS: usize, const CELLS: usize>
where
    I: InputSource<CHANNELS>,
    O: OutputDriver,
{
    input: I,
    output: O,
    bank: TimerBank<CHANNELS>,
    renderer: DisplayRenderer<CHANNELS, CELLS>,
    events: Option<&'a EventQueue>,
    next_tick: Instant,
    tick_period: Duration,
}

impl<'a, I, O, const CHANNELS: usize, const CELLS: usize>
    TickScheduler<'a, I, O, CHANNELS, CELLS>
where
    I: InputSource<CHANNELS>,
    O: OutputDriver,
{
    /// Create a scheduler; the tick period comes from the bank's config.
    pub fn new(
        bank: TimerBank<CHANNELS>,
        renderer: DisplayRenderer<CHANNELS, CELLS>,
        input: I,
        output: O,
    ) -> Self {
        let tick_period = bank.config().tick_period;
        Self {
            input,
            output,
            bank,
            renderer,
            events: None,
            next_tick: Instant::from_millis(0),
            tick_period,
        }
    }

    /// Forward per-tick lifecycle events into a diagnostics queue.
    pub fn with_events(mut self, events: &'a EventQueue) -> Self {
        self.events = Some(events);
        self
    }

    /// Process one tick and return timing plus the host-facing signals.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        // Drift correction: after a long stall, skip the backlog instead of
        // running catch-up ticks back to back.
        let max_drift = self.tick_period.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift {
            self.next_tick = now;
        }

        let inputs = self.input.poll();
        let outcome = self.bank.tick(inputs);

        let frame = self.renderer.render(&outcome.states);
        self.output.write(frame);

        if let Some(events) = self.events {
            for event in &outcome.events {
                events.publish(*event);
            }
        }

        self.next_tick += self.tick_period;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
            may_suspend: outcome.may_suspend,
            global_shutdown_requested: outcome.global_shutdown_requested,
        }
    }

    /// Get a reference to the bank.
    pub fn bank(&self) -> &TimerBank<CHANNELS> {
        &self.bank
    }

    /// Get a mutable reference to the bank.
    pub fn bank_mut(&mut self) -> &mut TimerBank<CHANNELS> {
        &mut self.bank
    }
}
