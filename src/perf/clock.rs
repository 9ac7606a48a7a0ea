// FolioFx
// copyright folio_fx developers 2025

use std::{cell::Cell, rc::Rc};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Millisecond time source for the sampler and the controller
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic wall clock, zero at construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    start: Instant,
    #[cfg(target_arch = "wasm32")]
    start: f64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            start: Instant::now(),
            #[cfg(target_arch = "wasm32")]
            start: js_sys::Date::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> f64 {
        js_sys::Date::now() - self.start
    }
}

/// Clock advanced by hand. Clones share the same time, so one handle can
/// drive a sampler and a controller together in simulations and tests.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms.max(0.0));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared() {
        let a = ManualClock::new();
        let b = a.clone();
        a.advance(250.0);
        b.advance(250.0);
        assert_eq!(a.now_ms(), 500.0);
        a.advance(-10.0);
        assert_eq!(b.now_ms(), 500.0);
        b.set(42.0);
        assert_eq!(a.now_ms(), 42.0);
    }

    #[test]
    fn test_system_clock_monotonic() {
        let c = SystemClock::new();
        let t0 = c.now_ms();
        let t1 = c.now_ms();
        assert!(t1 >= t0);
    }
}
