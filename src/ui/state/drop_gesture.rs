// SPDX-License-Identifier: MPL-2.0
//! Drop gesture tracking.
//!
//! The windowing layer reports a multi-file drop as one `FileDropped` event per
//! file. [`DropGesture`] groups those events back into gestures so that only the
//! first file of each gesture reaches the drop pipeline.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    /// Files are being dragged over the window.
    Hovering,
    /// A drop was handled at this instant.
    Consumed(Instant),
}

/// What to do with a reported dropped file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropDecision {
    /// First file of a gesture: hand it to the pipeline.
    Handle,
    /// Another file of a gesture that was already handled.
    Coalesced,
}

/// Groups per-file drop events into gestures.
#[derive(Debug, Clone)]
pub struct DropGesture {
    phase: Phase,
    window: Duration,
}

impl DropGesture {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            window,
        }
    }

    /// A file is hovering over the window; starts a new gesture.
    pub fn on_hovered(&mut self) {
        self.phase = Phase::Hovering;
    }

    /// Hovering files left the window without being dropped.
    pub fn on_left(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Classifies a dropped file reported at `now`.
    pub fn on_dropped(&mut self, now: Instant) -> DropDecision {
        if let Phase::Consumed(at) = self.phase {
            if now.saturating_duration_since(at) <= self.window {
                return DropDecision::Coalesced;
            }
        }
        self.phase = Phase::Consumed(now);
        DropDecision::Handle
    }

    /// True while files are dragged over the window.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.phase == Phase::Hovering
    }
}

impl Default for DropGesture {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_DROP_COALESCE_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(250);

    #[test]
    fn hover_then_leave_returns_to_idle() {
        let mut gesture = DropGesture::new(WINDOW);
        gesture.on_hovered();
        assert!(gesture.is_hovering());
        gesture.on_left();
        assert!(!gesture.is_hovering());
    }

    #[test]
    fn multi_file_drop_is_handled_once() {
        let mut gesture = DropGesture::new(WINDOW);
        let start = Instant::now();
        gesture.on_hovered();
        gesture.on_hovered();

        assert_eq!(gesture.on_dropped(start), DropDecision::Handle);
        assert!(!gesture.is_hovering());
        assert_eq!(
            gesture.on_dropped(start + Duration::from_millis(5)),
            DropDecision::Coalesced
        );
        assert_eq!(
            gesture.on_dropped(start + Duration::from_millis(10)),
            DropDecision::Coalesced
        );
    }

    #[test]
    fn new_hover_starts_a_new_gesture_inside_the_window() {
        let mut gesture = DropGesture::new(WINDOW);
        let start = Instant::now();
        assert_eq!(gesture.on_dropped(start), DropDecision::Handle);

        gesture.on_hovered();
        assert_eq!(
            gesture.on_dropped(start + Duration::from_millis(1)),
            DropDecision::Handle
        );
    }

    #[test]
    fn drop_after_the_window_is_a_new_gesture() {
        let mut gesture = DropGesture::new(WINDOW);
        let start = Instant::now();
        assert_eq!(gesture.on_dropped(start), DropDecision::Handle);
        assert_eq!(
            gesture.on_dropped(start + WINDOW + Duration::from_millis(1)),
            DropDecision::Handle
        );
    }

    #[test]
    fn drop_without_hover_is_handled() {
        let mut gesture = DropGesture::default();
        assert_eq!(gesture.on_dropped(Instant::now()), DropDecision::Handle);
    }
}
