//! Stop/start timers whose ticks travel through the message channel.
//!
//! The toolkit only offers fire-and-forget timeouts, so every start hands out
//! a [`TimerTicket`] stamped with a fresh generation. When the timeout later
//! posts the ticket back, [`DispatchTimer::accept`] only honours it if the
//! timer is still running and no newer start has happened since.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Re-render the preview after typing pauses.
    PreviewRefresh,
    /// Swap the live preview back in after the toolbar closes.
    PreviewRestore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    pub kind: TimerKind,
    pub generation: u64,
}

#[derive(Debug)]
pub struct DispatchTimer {
    kind: TimerKind,
    interval: Duration,
    generation: u64,
    enabled: bool,
}

impl DispatchTimer {
    pub fn new(kind: TimerKind, interval: Duration) -> Self {
        Self {
            kind,
            interval,
            generation: 0,
            enabled: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start (or restart) the timer. Tickets from earlier starts become stale.
    pub fn start(&mut self) -> TimerTicket {
        self.generation += 1;
        self.enabled = true;
        TimerTicket {
            kind: self.kind,
            generation: self.generation,
        }
    }

    pub fn stop(&mut self) {
        self.enabled = false;
    }

    /// True if `ticket` is the live tick of this timer.
    pub fn accept(&self, ticket: TimerTicket) -> bool {
        self.enabled && ticket.kind == self.kind && ticket.generation == self.generation
    }
}
