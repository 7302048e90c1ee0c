//! Motion - Spring smoothing and pointer/scroll driven transforms
//!
//! Raw pointer and scroll signals are smoothed by damped springs stepped on
//! the shared [`FrameClock`](crate::state::FrameClock), then mapped into
//! presentation values (rotation, translation, opacity, blur) by pure
//! consumers.

pub mod spring;
pub mod transform;

pub use spring::{SmoothedSignal, Spring, SpringConfig};
pub use transform::{GlowLayer, HeroFrame, HeroMotion, Mapping, MotionSignals, Particle, ParticleLayer, Transform};
