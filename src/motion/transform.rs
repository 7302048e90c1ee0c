//! Pointer/scroll transform pipeline.
//!
//! The runtime keeps one [`MotionSignals`] per mounted hero: smoothed pointer
//! x/y in [-0.5, 0.5], smoothed scroll progress in [0, 1] and animation
//! time. Consumers ([`HeroMotion`], [`ParticleLayer`], [`GlowLayer`]) map
//! those through [`Mapping`]s into presentation values. Consumers only
//! read the shared signals and never each other's output.
//!
//! # Example
//!
//! ```
//! use artvince_site::motion::{HeroMotion, Mapping, MotionSignals};
//!
//! let fade = Mapping::new(vec![0.0, 0.5], vec![1.0, 0.0]).unwrap();
//! assert_eq!(fade.map(0.25), 0.5);
//! assert_eq!(fade.map(0.9), 0.0);
//!
//! let hero = HeroMotion::new(MotionSignals::fixed(0.5, -0.5, 0.0));
//! let frame = hero.frame();
//! assert_eq!(frame.rotate_y, 5.0);
//! assert_eq!(frame.rotate_x, 5.0);
//! ```

use std::f64::consts::TAU;
use std::fmt::Write;

use spark_signals::{derived, signal, Derived, Signal};

use crate::error::MotionError;
use crate::state::{Cleanup, FrameClock, InputSignals, PointerOffset};
use crate::types::Icon;

use super::spring::{SmoothedSignal, SpringConfig};

// =============================================================================
// Mapping
// =============================================================================

/// Clamped piecewise-linear mapping between matched stop lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Mapping {
    /// Build a mapping. Input stops must be finite and strictly increasing.
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> Result<Self, MotionError> {
        if input.len() != output.len() {
            return Err(MotionError::StopCountMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(MotionError::TooFewStops(input.len()));
        }
        for (index, pair) in input.windows(2).enumerate() {
            if !pair[0].is_finite() || !pair[1].is_finite() || pair[0] >= pair[1] {
                return Err(MotionError::UnorderedInput { index: index + 1 });
            }
        }
        Ok(Self { input, output })
    }

    /// Two-stop mapping from literal ranges known to be ordered.
    fn linear(from: (f64, f64), to: (f64, f64)) -> Self {
        debug_assert!(from.0 < from.1);
        Self {
            input: vec![from.0, from.1],
            output: vec![to.0, to.1],
        }
    }

    /// Map `value`. Inputs outside the stops clamp to the end outputs;
    /// NaN maps to the first output.
    pub fn map(&self, value: f64) -> f64 {
        let last = self.input.len() - 1;
        if value.is_nan() || value <= self.input[0] {
            return self.output[0];
        }
        if value >= self.input[last] {
            return self.output[last];
        }
        let segment = self
            .input
            .windows(2)
            .position(|pair| value < pair[1])
            .unwrap_or(last - 1);
        let (x0, x1) = (self.input[segment], self.input[segment + 1]);
        let (y0, y1) = (self.output[segment], self.output[segment + 1]);
        y0 + (value - x0) / (x1 - x0) * (y1 - y0)
    }
}

// =============================================================================
// Shared signals
// =============================================================================

/// The shared smoothed signals every motion consumer reads.
#[derive(Clone)]
pub struct MotionSignals {
    pub pointer_x: Signal<f64>,
    pub pointer_y: Signal<f64>,
    pub scroll: Signal<f64>,
    /// Animation time in seconds since mount.
    pub time: Signal<f64>,
}

impl MotionSignals {
    /// Constant signals, for settled rendering and tests.
    pub fn fixed(pointer_x: f64, pointer_y: f64, scroll: f64) -> Self {
        Self {
            pointer_x: signal(pointer_x),
            pointer_y: signal(pointer_y),
            scroll: signal(scroll),
            time: signal(0.0),
        }
    }

    /// Spring-smooth the raw input signals on `clock`.
    ///
    /// The returned cleanup detaches every spring and the time counter.
    pub fn smoothed(
        inputs: &InputSignals,
        pointer: SpringConfig,
        scroll: SpringConfig,
        clock: &FrameClock,
    ) -> (Self, Cleanup) {
        let raw = inputs.pointer.clone();
        let x = SmoothedSignal::new(move || raw.get().x, pointer);
        let raw = inputs.pointer.clone();
        let y = SmoothedSignal::new(move || raw.get().y, pointer);
        let s = SmoothedSignal::follow(inputs.scroll_progress.clone(), scroll);

        let time = signal(0.0);
        let t = time.clone();
        let cleanups = [
            x.attach(clock),
            y.attach(clock),
            s.attach(clock),
            clock.subscribe(move |dt| {
                t.set(t.get() + dt);
            }),
        ];

        let signals = Self {
            pointer_x: x.output(),
            pointer_y: y.output(),
            scroll: s.output(),
            time,
        };
        let cleanup: Cleanup = Box::new(move || {
            for cleanup in cleanups {
                cleanup();
            }
        });
        (signals, cleanup)
    }

    pub fn pointer(&self) -> PointerOffset {
        PointerOffset::new(self.pointer_x.get(), self.pointer_y.get())
    }

    pub fn scroll_progress(&self) -> f64 {
        self.scroll.get()
    }
}

// =============================================================================
// Transform
// =============================================================================

/// A length in a CSS transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Percent(f64),
    Px(f64),
}

impl Length {
    fn is_zero(&self) -> bool {
        matches!(self, Self::Percent(v) | Self::Px(v) if *v == 0.0)
    }

    fn to_css(self) -> String {
        match self {
            Self::Percent(v) => format!("{}%", css_number(v)),
            Self::Px(v) => format!("{}px", css_number(v)),
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

/// Presentation values for one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: Length,
    pub translate_y: Length,
    /// Degrees.
    pub rotate_x: f64,
    /// Degrees.
    pub rotate_y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub blur_px: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate_x: Length::default(),
            translate_y: Length::default(),
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            opacity: 1.0,
            blur_px: 0.0,
        }
    }
}

impl Transform {
    /// Inline style declarations. Identity parts are omitted; the identity
    /// transform renders as an empty string.
    pub fn to_css(&self) -> String {
        let mut parts = Vec::new();
        if !self.translate_x.is_zero() {
            parts.push(format!("translateX({})", self.translate_x.to_css()));
        }
        if !self.translate_y.is_zero() {
            parts.push(format!("translateY({})", self.translate_y.to_css()));
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({}deg)", css_number(self.rotate_x)));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({}deg)", css_number(self.rotate_y)));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", css_number(self.scale)));
        }

        let mut css = String::new();
        if !parts.is_empty() {
            let _ = write!(css, "transform: {};", parts.join(" "));
        }
        if self.opacity != 1.0 {
            let _ = write!(css, "{}opacity: {};", sep(&css), css_number(self.opacity));
        }
        if self.blur_px != 0.0 {
            let _ = write!(css, "{}filter: blur({}px);", sep(&css), css_number(self.blur_px));
        }
        css
    }
}

fn sep(css: &str) -> &'static str {
    if css.is_empty() { "" } else { " " }
}

/// Number with at most three decimals and no trailing zeros.
pub(crate) fn css_number(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

// =============================================================================
// Hero content
// =============================================================================

/// Hero content values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Percent of the content's own height.
    pub translate_y: f64,
    pub opacity: f64,
}

impl HeroFrame {
    pub fn transform(&self) -> Transform {
        Transform {
            translate_y: Length::Percent(self.translate_y),
            rotate_x: self.rotate_x,
            rotate_y: self.rotate_y,
            opacity: self.opacity,
            ..Transform::default()
        }
    }
}

/// Hero headline tilt and scroll fade.
///
/// - rotateX: pointer y [-0.5, 0.5] to [5, -5] degrees
/// - rotateY: pointer x [-0.5, 0.5] to [-5, 5] degrees
/// - translateY: scroll [0, 1] to [0%, 30%]
/// - opacity: scroll [0, 0.5] to [1, 0]
#[derive(Clone)]
pub struct HeroMotion {
    signals: MotionSignals,
    rotate_x: Mapping,
    rotate_y: Mapping,
    translate_y: Mapping,
    opacity: Mapping,
}

impl HeroMotion {
    pub fn new(signals: MotionSignals) -> Self {
        Self {
            signals,
            rotate_x: Mapping::linear((-0.5, 0.5), (5.0, -5.0)),
            rotate_y: Mapping::linear((-0.5, 0.5), (-5.0, 5.0)),
            translate_y: Mapping::linear((0.0, 1.0), (0.0, 30.0)),
            opacity: Mapping::linear((0.0, 0.5), (1.0, 0.0)),
        }
    }

    pub fn frame(&self) -> HeroFrame {
        let scroll = self.signals.scroll.get();
        HeroFrame {
            rotate_x: self.rotate_x.map(self.signals.pointer_y.get()),
            rotate_y: self.rotate_y.map(self.signals.pointer_x.get()),
            translate_y: self.translate_y.map(scroll),
            opacity: self.opacity.map(scroll),
        }
    }

    /// Frame as a derived value that recomputes when the signals move.
    pub fn frames(self) -> Derived<HeroFrame> {
        derived(move || self.frame())
    }
}

// =============================================================================
// Particles
// =============================================================================

/// A floating decorative icon in the hero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub icon: Icon,
    /// Anchor position in percent of the hero box.
    pub left: f64,
    pub top: f64,
    pub size: u32,
    /// Entrance delay in seconds.
    pub delay: f64,
    /// Parallax speed multiplier.
    pub speed: f64,
}

static HERO_PARTICLES: [Particle; 5] = [
    Particle { icon: Icon::Sparkles, left: -10.0, top: 20.0, size: 20, delay: 0.0, speed: 0.05 },
    Particle { icon: Icon::Play, left: 15.0, top: 10.0, size: 24, delay: 0.2, speed: 0.08 },
    Particle { icon: Icon::Zap, left: -15.0, top: 60.0, size: 18, delay: 0.4, speed: 0.03 },
    Particle { icon: Icon::GraduationCap, left: 12.0, top: 70.0, size: 22, delay: 0.6, speed: 0.06 },
    Particle { icon: Icon::Globe, left: 25.0, top: 40.0, size: 16, delay: 0.8, speed: 0.04 },
];

/// The five floating hero particles.
pub fn hero_particles() -> &'static [Particle] {
    &HERO_PARTICLES
}

/// Pointer parallax for decorative particles.
///
/// Each particle maps the pointer [-0.5, 0.5] to [-50 * speed %, 50 * speed %]
/// on both axes.
#[derive(Clone)]
pub struct ParticleLayer {
    signals: MotionSignals,
    particles: Vec<Particle>,
}

impl ParticleLayer {
    pub fn new(signals: MotionSignals, particles: Vec<Particle>) -> Self {
        Self { signals, particles }
    }

    /// The five hero particles.
    pub fn hero(signals: MotionSignals) -> Self {
        Self::new(signals, hero_particles().to_vec())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Offset transform of particle `index`, if it exists.
    pub fn offset(&self, index: usize) -> Option<Transform> {
        let particle = self.particles.get(index)?;
        let reach = 50.0 * particle.speed;
        let mapping = Mapping::linear((-0.5, 0.5), (-reach, reach));
        Some(Transform {
            translate_x: Length::Percent(mapping.map(self.signals.pointer_x.get())),
            translate_y: Length::Percent(mapping.map(self.signals.pointer_y.get())),
            ..Transform::default()
        })
    }

    /// Offsets of every particle, in order.
    pub fn offsets(&self) -> Vec<Transform> {
        (0..self.particles.len()).filter_map(|i| self.offset(i)).collect()
    }
}

// =============================================================================
// Glow
// =============================================================================

/// A blurred background orb that breathes and drifts with the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowOrb {
    pub speed: f64,
    pub opacity: (f64, f64),
    pub scale: (f64, f64),
    /// Breathing period in seconds.
    pub period: f64,
    /// Start at the high end of the cycle instead of the low end.
    pub inverted: bool,
}

const HERO_GLOWS: [GlowOrb; 2] = [
    GlowOrb { speed: 0.04, opacity: (0.3, 0.5), scale: (1.0, 1.2), period: 8.0, inverted: false },
    GlowOrb { speed: 0.02, opacity: (0.2, 0.4), scale: (1.0, 1.2), period: 10.0, inverted: true },
];

/// Background glow orbs.
///
/// Translation follows the pointer at the orb's speed. Opacity and scale
/// breathe over the orb's period. Scrolling through the hero widens the blur
/// from 64px to 96px and fades the orbs to 40%.
#[derive(Clone)]
pub struct GlowLayer {
    signals: MotionSignals,
    orbs: Vec<GlowOrb>,
    blur: Mapping,
    fade: Mapping,
}

impl GlowLayer {
    pub fn new(signals: MotionSignals, orbs: Vec<GlowOrb>) -> Self {
        Self {
            signals,
            orbs,
            blur: Mapping::linear((0.0, 1.0), (64.0, 96.0)),
            fade: Mapping::linear((0.0, 1.0), (1.0, 0.4)),
        }
    }

    pub fn hero(signals: MotionSignals) -> Self {
        Self::new(signals, HERO_GLOWS.to_vec())
    }

    pub fn orbs(&self) -> &[GlowOrb] {
        &self.orbs
    }

    pub fn frame(&self, index: usize) -> Option<Transform> {
        let orb = self.orbs.get(index)?;
        let reach = 50.0 * orb.speed;
        let drift = Mapping::linear((-0.5, 0.5), (-reach, reach));

        // 0 at the cycle start, 1 halfway through
        let phase = (1.0 - (TAU * self.signals.time.get() / orb.period).cos()) / 2.0;
        let pulse = if orb.inverted { 1.0 - phase } else { phase };

        let scroll = self.signals.scroll.get();
        Some(Transform {
            translate_x: Length::Percent(drift.map(self.signals.pointer_x.get())),
            translate_y: Length::Percent(drift.map(self.signals.pointer_y.get())),
            scale: orb.scale.0 + (orb.scale.1 - orb.scale.0) * pulse,
            opacity: (orb.opacity.0 + (orb.opacity.1 - orb.opacity.0) * pulse) * self.fade.map(scroll),
            blur_px: self.blur.map(scroll),
            ..Transform::default()
        })
    }

    pub fn frames(&self) -> Vec<Transform> {
        (0..self.orbs.len()).filter_map(|i| self.frame(i)).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Viewport;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mapping_rejects_bad_stops() {
        assert_eq!(Mapping::new(vec![0.0], vec![1.0]), Err(MotionError::TooFewStops(1)));
        assert_eq!(
            Mapping::new(vec![0.0, 1.0], vec![1.0]),
            Err(MotionError::StopCountMismatch { input: 2, output: 1 })
        );
        assert_eq!(
            Mapping::new(vec![0.0, 1.0, 1.0], vec![0.0, 1.0, 2.0]),
            Err(MotionError::UnorderedInput { index: 2 })
        );
    }

    #[test]
    fn test_mapping_clamps_outside_range() {
        let m = Mapping::new(vec![0.0, 0.5], vec![1.0, 0.0]).unwrap();
        assert_eq!(m.map(-3.0), 1.0);
        assert_eq!(m.map(10.0), 0.0);
        assert_eq!(m.map(f64::NAN), 1.0);
        assert!(close(m.map(0.1), 0.8));
    }

    #[test]
    fn test_mapping_multiple_segments() {
        let m = Mapping::new(vec![0.0, 1.0, 3.0], vec![0.0, 10.0, 0.0]).unwrap();
        assert!(close(m.map(0.5), 5.0));
        assert!(close(m.map(1.0), 10.0));
        assert!(close(m.map(2.0), 5.0));
    }

    #[test]
    fn test_hero_frame_at_rest() {
        let hero = HeroMotion::new(MotionSignals::fixed(0.0, 0.0, 0.0));
        let frame = hero.frame();
        assert_eq!(frame, HeroFrame { rotate_x: 0.0, rotate_y: 0.0, translate_y: 0.0, opacity: 1.0 });
        assert_eq!(frame.transform().to_css(), "");
    }

    #[test]
    fn test_hero_scroll_fade() {
        let signals = MotionSignals::fixed(0.0, 0.0, 0.25);
        let hero = HeroMotion::new(signals.clone());
        let frame = hero.frame();
        assert!(close(frame.translate_y, 7.5));
        assert!(close(frame.opacity, 0.5));

        signals.scroll.set(0.8);
        assert!(close(hero.frame().opacity, 0.0));
        assert!(close(hero.frame().translate_y, 24.0));
    }

    #[test]
    fn test_hero_frames_derived_tracks_pointer() {
        let signals = MotionSignals::fixed(0.0, 0.0, 0.0);
        let frames = HeroMotion::new(signals.clone()).frames();
        assert_eq!(frames.get().rotate_y, 0.0);
        signals.pointer_x.set(0.25);
        assert!(close(frames.get().rotate_y, 2.5));
        signals.pointer_y.set(0.5);
        assert!(close(frames.get().rotate_x, -5.0));
    }

    #[test]
    fn test_particle_parallax_scales_with_speed() {
        let layer = ParticleLayer::hero(MotionSignals::fixed(0.5, -0.5, 0.0));
        assert_eq!(layer.particles().len(), 5);

        let second = layer.offset(1).unwrap();
        assert_eq!(second.translate_x, Length::Percent(4.0));
        assert_eq!(second.translate_y, Length::Percent(-4.0));
        assert!(layer.offset(5).is_none());
        assert_eq!(layer.offsets().len(), 5);
    }

    #[test]
    fn test_consumers_share_signals_without_interfering() {
        let signals = MotionSignals::fixed(0.5, 0.0, 0.0);
        let hero = HeroMotion::new(signals.clone());
        let particles = ParticleLayer::hero(signals.clone());
        let before = hero.frame();
        let _ = particles.offsets();
        assert_eq!(hero.frame(), before);
    }

    #[test]
    fn test_glow_breathes_and_blurs() {
        let signals = MotionSignals::fixed(0.0, 0.0, 0.0);
        let glow = GlowLayer::hero(signals.clone());
        let first = glow.frame(0).unwrap();
        assert!(close(first.opacity, 0.3));
        assert!(close(first.scale, 1.0));
        assert!(close(first.blur_px, 64.0));

        signals.time.set(4.0);
        let mid = glow.frame(0).unwrap();
        assert!(close(mid.opacity, 0.5));
        assert!(close(mid.scale, 1.2));

        let second = glow.frame(1).unwrap();
        assert!(close(second.scale, 1.0 + 0.2 * (1.0 - (1.0 - (TAU * 0.4).cos()) / 2.0)));

        signals.scroll.set(1.0);
        let scrolled = glow.frame(0).unwrap();
        assert!(close(scrolled.blur_px, 96.0));
        assert!(close(scrolled.opacity, 0.2));
    }

    #[test]
    fn test_transform_css() {
        let t = Transform {
            translate_y: Length::Percent(12.5),
            rotate_x: -2.0,
            opacity: 0.25,
            blur_px: 64.0,
            ..Transform::default()
        };
        assert_eq!(
            t.to_css(),
            "transform: translateY(12.5%) rotateX(-2deg); opacity: 0.25; filter: blur(64px);"
        );
        assert_eq!(css_number(-0.0001), "0");
        assert_eq!(css_number(1.0 / 3.0), "0.333");
    }

    #[test]
    fn test_smoothed_signals_release_clock() {
        let clock = FrameClock::new();
        let inputs = InputSignals::new(Viewport::default());
        let (signals, cleanup) =
            MotionSignals::smoothed(&inputs, SpringConfig::default(), SpringConfig::critical(100.0), &clock);
        assert_eq!(clock.subscriber_count(), 4);

        inputs.pointer.set(PointerOffset::new(0.5, -0.5));
        inputs.scroll_progress.set(1.0);
        for _ in 0..600 {
            clock.tick(1.0 / 60.0);
        }
        assert_eq!(signals.pointer(), PointerOffset::new(0.5, -0.5));
        assert_eq!(signals.scroll_progress(), 1.0);
        assert!(close(signals.time.get(), 10.0));

        cleanup();
        assert_eq!(clock.subscriber_count(), 0);
    }
}
