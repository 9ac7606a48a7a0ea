// FolioFx
// copyright folio_fx developers 2025

use super::clock::{Clock, SystemClock};
use crate::DEFAULT_FPS;
use log::trace;

const WINDOW_MS: f64 = 1000.0;

/// Frames-per-second over a 1 second window
///
/// update() is called once per rendered frame. The estimate only changes
/// when a window closes; in between the previous value is returned.
#[derive(Debug, Clone)]
pub struct FrameRateSampler<C: Clock = SystemClock> {
    clock: C,
    frames: u32,
    last_ms: f64,
    fps: u32,
}

impl FrameRateSampler<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for FrameRateSampler<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FrameRateSampler<C> {
    pub fn with_clock(clock: C) -> Self {
        let last_ms = clock.now_ms();
        Self {
            clock,
            frames: 0,
            last_ms,
            fps: DEFAULT_FPS,
        }
    }

    /// count one frame, returns the latest estimate
    pub fn update(&mut self) -> u32 {
        self.frames += 1;
        let now = self.clock.now_ms();
        let elapsed = now - self.last_ms;

        if elapsed >= WINDOW_MS {
            self.fps = (self.frames as f64 * 1000.0 / elapsed).round() as u32;
            trace!("fps window closed: {} frames in {:.1}ms -> {}", self.frames, elapsed, self.fps);
            self.frames = 0;
            self.last_ms = now;
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf::ManualClock;

    #[test]
    fn test_default_before_first_window() {
        let clock = ManualClock::new();
        let mut s = FrameRateSampler::with_clock(clock.clone());
        for _ in 0..10 {
            clock.advance(50.0);
            assert_eq!(s.update(), DEFAULT_FPS);
        }
    }

    #[test]
    fn test_thirty_frames_in_one_second() {
        let clock = ManualClock::new();
        let mut s = FrameRateSampler::with_clock(clock.clone());
        let mut last = 0;
        for k in 1..=30 {
            clock.set(k as f64 * 1000.0 / 30.0);
            last = s.update();
            if k < 30 {
                assert_eq!(last, DEFAULT_FPS);
            }
        }
        assert_eq!(last, 30);
        assert_eq!(s.fps(), 30);
    }

    #[test]
    fn test_value_held_between_windows() {
        let clock = ManualClock::new();
        let mut s = FrameRateSampler::with_clock(clock.clone());
        for _ in 0..20 {
            clock.advance(50.0);
            s.update();
        }
        assert_eq!(s.fps(), 20);
        clock.advance(10.0);
        assert_eq!(s.update(), 20);
    }

    #[test]
    fn test_rounding_on_long_window() {
        let clock = ManualClock::new();
        let mut s = FrameRateSampler::with_clock(clock.clone());
        // a stalled window: 45 frames, the last one 1500ms in -> 30 fps
        for _ in 0..44 {
            s.update();
        }
        clock.set(1500.0);
        assert_eq!(s.update(), 30);
    }
}
