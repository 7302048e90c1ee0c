//! Damped spring smoothing.
//!
//! A [`Spring`] moves a value toward a target. Integration is semi-implicit
//! Euler over fixed substeps, so results do not depend on the frame rate
//! the platform happens to deliver.
//!
//! # Example
//!
//! ```
//! use artvince_site::motion::{Spring, SpringConfig};
//!
//! let mut spring = Spring::new(SpringConfig::default(), 0.0);
//! for _ in 0..240 {
//!     spring.step(0.5, 1.0 / 60.0);
//! }
//! assert_eq!(spring.position(), 0.5);
//! assert!(spring.is_at_rest());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use spark_signals::{signal, Signal};

use crate::error::MotionError;
use crate::state::{Cleanup, FrameClock};

/// Longest integration substep in seconds.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

// =============================================================================
// Config
// =============================================================================

/// Spring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may settle.
    pub rest_delta: f64,
    /// Speed under which the spring may settle.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    /// Hero pointer smoothing: stiffness 700, damping 25, mass 1.
    fn default() -> Self {
        Self {
            stiffness: 700.0,
            damping: 25.0,
            mass: 1.0,
            rest_delta: 0.0005,
            rest_speed: 0.005,
        }
    }
}

impl SpringConfig {
    /// Critically damped spring for the given stiffness (unit mass).
    pub fn critical(stiffness: f64) -> Self {
        let mass = 1.0;
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
            ..Self::default()
        }
    }

    /// Damping ratio; 1.0 is critical, below 1.0 overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Reject non-positive or non-finite parameters.
    pub fn validate(&self) -> Result<(), MotionError> {
        let checks = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("rest_delta", self.rest_delta),
            ("rest_speed", self.rest_speed),
        ];
        for (field, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(MotionError::InvalidSpring { field, value });
            }
        }
        Ok(())
    }
}

// =============================================================================
// Spring
// =============================================================================

/// Position/velocity integrator.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Whether the spring has settled (zero velocity).
    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0
    }

    /// Jump to `position` with no velocity.
    pub fn reset(&mut self, position: f64) {
        self.position = position;
        self.velocity = 0.0;
    }

    /// Advance toward `target` by `dt` seconds and return the new position.
    ///
    /// A spring resting on its target stays exactly there.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        if !target.is_finite() || !dt.is_finite() || dt <= 0.0 {
            return self.position;
        }
        if self.is_at_rest() && self.position == target {
            return self.position;
        }

        let SpringConfig { stiffness, damping, mass, rest_delta, rest_speed } = self.config;
        let substeps = (dt / MAX_SUBSTEP - 1e-9).ceil().max(1.0) as usize;
        let h = dt / substeps as f64;

        for _ in 0..substeps {
            let force = -stiffness * (self.position - target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;

            if (self.position - target).abs() < rest_delta && self.velocity.abs() < rest_speed {
                self.position = target;
                self.velocity = 0.0;
                break;
            }
        }

        self.position
    }
}

// =============================================================================
// Smoothed signal
// =============================================================================

/// Spring-smoothed follower of a raw value.
///
/// The target is read from a closure each frame, so any signal (or a field
/// of one) can drive it. The output only changes while attached to a
/// [`FrameClock`]; the clock subscription is released by the cleanup
/// returned from [`attach`].
///
/// [`attach`]: SmoothedSignal::attach
#[derive(Clone)]
pub struct SmoothedSignal {
    target: Rc<dyn Fn() -> f64>,
    output: Signal<f64>,
    spring: Rc<RefCell<Spring>>,
}

impl SmoothedSignal {
    /// Follow `target`, starting at its current value.
    pub fn new<F>(target: F, config: SpringConfig) -> Self
    where
        F: Fn() -> f64 + 'static,
    {
        let initial = target();
        Self {
            target: Rc::new(target),
            output: signal(initial),
            spring: Rc::new(RefCell::new(Spring::new(config, initial))),
        }
    }

    /// Follow a numeric signal.
    pub fn follow(source: Signal<f64>, config: SpringConfig) -> Self {
        Self::new(move || source.get(), config)
    }

    /// Smoothed output signal.
    pub fn output(&self) -> Signal<f64> {
        self.output.clone()
    }

    /// Current smoothed value.
    pub fn get(&self) -> f64 {
        self.output.get()
    }

    pub fn is_at_rest(&self) -> bool {
        let spring = self.spring.borrow();
        spring.is_at_rest() && spring.position() == (self.target)()
    }

    /// Step the spring toward the target's current value.
    pub fn step(&self, dt: f64) {
        let target = (self.target)();
        let (before, after) = {
            let mut spring = self.spring.borrow_mut();
            let before = spring.position();
            (before, spring.step(target, dt))
        };
        if after != before {
            self.output.set(after);
        }
    }

    /// Step on every frame of `clock` until the returned cleanup runs.
    pub fn attach(&self, clock: &FrameClock) -> Cleanup {
        let this = self.clone();
        clock.subscribe(move |dt| this.step(dt))
    }
}

// =============================================================================
// Tests
// =============================================================================
