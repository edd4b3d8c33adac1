//! Lifecycle events and a bounded diagnostics queue.
//!
//! The tick loop publishes transitions, a host logger task drains them at
//! its own pace. Built on `critical-section` and a `heapless::Deque` so
//! publishing is safe from any context and never blocks the tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Depth of the diagnostics queue.
pub const EVENT_QUEUE_DEPTH: usize = 16;

/// A channel lifecycle transition observed during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// A release started the channel's countdown.
    Started { channel: usize },
    /// A long press shut the channel down.
    ChannelShutdown { channel: usize },
    /// The channel's countdown ran out.
    Finished { channel: usize },
    /// A very long press asked for every channel to shut down.
    ShutdownAllRequested,
}

/// Bounded, interrupt-safe diagnostics queue.
///
/// Publishing never fails: when the queue is full the oldest event is
/// dropped, so a stalled consumer loses history rather than stalling the
/// tick loop.
pub struct EventQueue {
    inner: Mutex<RefCell<Deque<TimerEvent, EVENT_QUEUE_DEPTH>>>,
}

impl EventQueue {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Publish an event, dropping the oldest one if the queue is full.
    pub fn publish(&self, event: TimerEvent) {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if queue.is_full() {
                queue.pop_front();
            }
            let _ = queue.push_back(event);
        });
    }

    /// Take the oldest pending event, if any.
    pub fn take(&self) -> Option<TimerEvent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
