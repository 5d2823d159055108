//! Frame scheduling and animation time
//!
//! The scheduler is the single cooperative loop driver: the host calls
//! `tick()` once per display refresh and runs one render step with the time
//! it returns. Cancelling the handle makes every subsequent `tick()` return
//! `None`, so no render step can touch a surface after teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Monotone animation tick counter, reset whenever a scheduler is created
///
/// The map advances it by one per rendered frame; dash phase and pulse radius
/// are exact functions of it, which keeps frames reproducible in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationTime(pub u64);

impl AnimationTime {
    pub fn ticks(self) -> u64 {
        self.0
    }

    /// Dash phase for the flowing route overlays, linear in time
    pub fn dash_offset(self) -> f32 {
        -(self.0 as f32) * 2.0
    }

    /// Radius of the depot halo, oscillating between 15 and 35 units
    pub fn pulse_radius(self) -> f32 {
        25.0 + (self.0 as f32 / 10.0).sin() * 10.0
    }

    /// Slow 0..1 pulse used for the marker halos, period of two seconds at
    /// sixty ticks per second
    pub fn halo_phase(self) -> f32 {
        let t = (self.0 % 120) as f32 / 120.0;
        (t * std::f32::consts::TAU).sin() * 0.5 + 0.5
    }
}

/// Cancellation side of a frame scheduler
///
/// `cancel()` takes effect atomically: once it returns, no further `tick()`
/// yields a time.
#[derive(Debug, Clone)]
pub struct CancellationHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancellationHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Drives the continuous redraw loop of the map
pub struct FrameScheduler {
    cancelled: Arc<AtomicBool>,
    next_tick: u64,
    frames_rendered: u64,
}

impl FrameScheduler {
    /// New scheduler with animation time reset to zero, plus its handle
    pub fn new() -> (Self, CancellationHandle) {
        let cancelled = Arc::new(AtomicBool::new(false));
        let handle = CancellationHandle {
            cancelled: Arc::clone(&cancelled),
        };
        (
            Self {
                cancelled,
                next_tick: 0,
                frames_rendered: 0,
            },
            handle,
        )
    }

    /// Time for the next render step, or `None` once cancelled
    pub fn tick(&mut self) -> Option<AnimationTime> {
        if self.cancelled.load(Ordering::SeqCst) {
            return None;
        }
        let time = AnimationTime(self.next_tick);
        self.next_tick += 1;
        self.frames_rendered += 1;
        Some(time)
    }

    /// Number of render steps handed out so far
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_are_monotone() {
        let (mut scheduler, _handle) = FrameScheduler::new();
        assert_eq!(scheduler.tick(), Some(AnimationTime(0)));
        assert_eq!(scheduler.tick(), Some(AnimationTime(1)));
        assert_eq!(scheduler.tick(), Some(AnimationTime(2)));
        assert_eq!(scheduler.frames_rendered(), 3);
    }

    #[test]
    fn test_cancel_stops_render_steps() {
        let (mut scheduler, handle) = FrameScheduler::new();
        scheduler.tick();
        scheduler.tick();
        assert!(!handle.is_cancelled());
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(scheduler.tick(), None);
        assert_eq!(scheduler.tick(), None);
        // the call counter stops increasing
        assert_eq!(scheduler.frames_rendered(), 2);
    }

    #[test]
    fn test_cancel_before_first_tick() {
        let (mut scheduler, handle) = FrameScheduler::new();
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(scheduler.tick(), None);
        assert_eq!(scheduler.frames_rendered(), 0);
    }

    #[test]
    fn test_dash_offset_is_linear() {
        assert_eq!(AnimationTime(0).dash_offset(), 0.0);
        assert_eq!(AnimationTime(1).dash_offset(), -2.0);
        assert_eq!(AnimationTime(30).dash_offset(), -60.0);
    }

    #[test]
    fn test_pulse_radius_bounds() {
        for t in 0..240 {
            let r = AnimationTime(t).pulse_radius();
            assert!((15.0..=35.0).contains(&r), "radius {} out of range", r);
        }
    }
}
