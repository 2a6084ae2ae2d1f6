use std::time::Duration;

use crate::app::infrastructure::host::{PreviewSurface, TimerHost};
use crate::app::services::timer::{DispatchTimer, TimerKind, TimerTicket};

/// Debounced preview refresh plus the live/snapshot swap used while
/// something overlaps the preview.
pub struct PreviewController {
    refresh: DispatchTimer,
    restore: DispatchTimer,
    snapshot_shown: bool,
}

impl PreviewController {
    pub fn new(delay: Duration) -> Self {
        Self {
            refresh: DispatchTimer::new(TimerKind::PreviewRefresh, delay),
            restore: DispatchTimer::new(TimerKind::PreviewRestore, delay),
            snapshot_shown: false,
        }
    }

    #[cfg(test)]
    pub fn is_refresh_pending(&self) -> bool {
        self.refresh.is_enabled()
    }

    #[cfg(test)]
    pub fn is_restore_pending(&self) -> bool {
        self.restore.is_enabled()
    }

    /// Restart the quiet-period countdown.
    pub fn text_changed<H: TimerHost>(&mut self, host: &mut H) {
        self.refresh.stop();
        let ticket = self.refresh.start();
        host.schedule(ticket, self.refresh.interval());
    }

    /// Consume a refresh tick. True when the preview should be re-rendered.
    pub fn refresh_elapsed(&mut self, ticket: TimerTicket) -> bool {
        if !self.refresh.accept(ticket) {
            return false;
        }
        self.refresh.stop();
        true
    }

    /// Call after the live view was re-rendered. A visible snapshot is
    /// refreshed so it never shows older content than the live view.
    pub fn rendered<H: PreviewSurface>(&mut self, host: &mut H) {
        if self.snapshot_shown {
            host.redraw_snapshot();
        }
    }

    /// Freeze the preview: show the snapshot in place of the live view.
    pub fn show_snapshot<H: PreviewSurface>(&mut self, host: &mut H) {
        if self.restore.is_enabled() {
            self.restore.stop();
        }
        host.redraw_snapshot();
        host.set_snapshot_visible(true);
        host.set_live_visible(false);
        self.snapshot_shown = true;
    }

    /// Bring the live preview back once the restore delay passes.
    pub fn schedule_restore<H: TimerHost>(&mut self, host: &mut H) {
        if self.restore.is_enabled() {
            self.restore.stop();
        }
        let ticket = self.restore.start();
        host.schedule(ticket, self.restore.interval());
    }

    /// Consume a restore tick, swapping the live view back in if it is current.
    pub fn restore_elapsed<H: PreviewSurface>(&mut self, ticket: TimerTicket, host: &mut H) -> bool {
        if !self.restore.accept(ticket) {
            return false;
        }
        self.restore.stop();
        host.set_live_visible(true);
        host.set_snapshot_visible(false);
        self.snapshot_shown = false;
        true
    }
}
