//! Animation Clock - One shared frame clock per mounted site
//!
//! Springs and toast timers subscribe to the clock and are stepped on every
//! animation frame the platform delivers.
//!
//! # Pattern
//!
//! - All subscribers share one clock, so every layer advances in lockstep
//! - The clock runs while it has at least one subscriber and stops when the
//!   last one unsubscribes; the platform only requests frames while running
//! - `running` is a signal so the platform shell can react to start/stop
//!
//! # Example
//!
//! ```
//! use artvince_site::state::FrameClock;
//!
//! let clock = FrameClock::new();
//! assert!(!clock.is_running());
//!
//! let unsubscribe = clock.subscribe(|dt| assert!(dt > 0.0));
//! assert!(clock.is_running());
//!
//! clock.tick(1.0 / 60.0);
//!
//! unsubscribe();
//! assert!(!clock.is_running());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use super::Cleanup;

/// Longest step handed to subscribers. Frames after a stall (background tab)
/// are split so springs stay stable.
pub const MAX_FRAME_DT: f64 = 1.0 / 30.0;

/// Frame callback; receives the step in seconds.
pub type FrameCallback = Rc<dyn Fn(f64)>;

#[derive(Default)]
struct ClockRegistry {
    subscribers: Vec<(usize, FrameCallback)>,
    next_id: usize,
    elapsed: f64,
    frames: u64,
}

/// Shared animation clock.
///
/// Cloning yields another handle to the same clock.
#[derive(Clone)]
pub struct FrameClock {
    registry: Rc<RefCell<ClockRegistry>>,
    running: Signal<bool>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(ClockRegistry::default())),
            running: signal(false),
        }
    }

    /// Subscribe to frames.
    ///
    /// Returns an unsubscribe function that must be called when the owner
    /// is disposed.
    pub fn subscribe<F>(&self, callback: F) -> Cleanup
    where
        F: Fn(f64) + 'static,
    {
        let count = {
            let mut reg = self.registry.borrow_mut();
            let id = reg.next_id;
            reg.next_id += 1;
            reg.subscribers.push((id, Rc::new(callback)));
            (id, reg.subscribers.len())
        };
        let (id, subscribers) = count;

        // Start clock on first subscriber
        if subscribers == 1 {
            log::trace!("frame clock started");
            self.running.set(true);
        }

        let registry = Rc::downgrade(&self.registry);
        let running = self.running.clone();
        Box::new(move || {
            let Some(registry) = registry.upgrade() else {
                return;
            };
            let remaining = {
                let mut reg = registry.borrow_mut();
                reg.subscribers.retain(|(sub_id, _)| *sub_id != id);
                reg.subscribers.len()
            };
            // Stop clock when no more subscribers
            if remaining == 0 {
                log::trace!("frame clock stopped");
                running.set(false);
            }
        })
    }

    /// Advance every subscriber by `dt` seconds.
    ///
    /// Non-finite or non-positive steps are ignored. Long steps are split
    /// into equal chunks of at most [`MAX_FRAME_DT`].
    pub fn tick(&self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        let chunks = (dt / MAX_FRAME_DT - 1e-9).ceil().max(1.0) as usize;
        let step = dt / chunks as f64;
        for _ in 0..chunks {
            let callbacks: Vec<FrameCallback> = {
                let mut reg = self.registry.borrow_mut();
                reg.elapsed += step;
                reg.subscribers.iter().map(|(_, cb)| cb.clone()).collect()
            };
            for callback in &callbacks {
                callback(step);
            }
        }

        self.registry.borrow_mut().frames += 1;
    }

    /// Whether at least one subscriber is attached.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Running flag as a signal.
    pub fn running_signal(&self) -> Signal<bool> {
        self.running.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }

    /// Seconds of animation time delivered so far.
    pub fn elapsed(&self) -> f64 {
        self.registry.borrow().elapsed
    }

    /// Number of `tick` calls that advanced time.
    pub fn frames(&self) -> u64 {
        self.registry.borrow().frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
