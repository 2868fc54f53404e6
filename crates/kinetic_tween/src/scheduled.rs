//! Delay- and timescale-aware tweens
//!
//! [`ScheduledTween`] is the form a [`crate::TweenGroup`] manages. On top of
//! the fixed form it adds a start `delay` and a per-instance `timescale`,
//! and reports a three-state lifecycle:
//!
//! ```text
//! Pending (time < delay) -> Active (< delay + duration) -> Done
//! ```
//!
//! Convention: `delay` is a separate offset. `time` starts at and resets to
//! `0.0`; the ease is evaluated at `time - delay` once the delay has
//! elapsed, and while pending the reported value is the `from` endpoint.
//! Delay is never modeled as negative time.

use kinetic_ease::Ease;

use crate::curve::Curve;
use crate::lerp::{ease_between, Lerp};

/// Lifecycle phase of a scheduled tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TweenState {
    Pending,
    Active,
    Done,
}

/// A tween with a start delay and a per-instance timescale.
#[derive(Clone, Copy, Debug)]
pub struct ScheduledTween<T: Lerp> {
    ease: Ease,
    from: T,
    to: T,
    duration: f32,
    delay: f32,
    timescale: f32,
    time: f32,
    value: T,
}

impl<T: Lerp> ScheduledTween<T> {
    /// Create with no delay and a timescale of 1.
    ///
    /// `duration` must be positive (caller precondition, debug-asserted).
    pub fn new(ease: Ease, from: T, to: T, duration: f32) -> Self {
        debug_assert!(duration > 0.0, "tween duration must be positive");
        let mut tween = Self {
            ease,
            from,
            to,
            duration,
            delay: 0.0,
            timescale: 1.0,
            time: 0.0,
            value: from,
        };
        tween.refresh();
        tween
    }

    /// Hold the `from` value for `delay` seconds before easing starts.
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self.refresh();
        self
    }

    /// Scale every incoming advance delta by `timescale`.
    ///
    /// Independent of any group timescale; the effective rate is the
    /// product of the two.
    pub fn with_timescale(mut self, timescale: f32) -> Self {
        self.timescale = timescale;
        self
    }

    fn eval(&self, time: f32) -> T {
        if time < self.delay {
            self.from
        } else {
            ease_between(self.ease, self.from, self.to, time - self.delay, self.duration)
        }
    }

    fn refresh(&mut self) -> T {
        self.value = self.eval(self.time);
        self.value
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn timescale(&self) -> f32 {
        self.timescale
    }

    pub fn from(&self) -> T {
        self.from
    }

    pub fn to(&self) -> T {
        self.to
    }

    /// Accumulate `delta * timescale` into the clock and return the new
    /// value.
    pub fn advance(&mut self, delta: f32) -> T {
        self.time += delta * self.timescale;
        self.refresh()
    }

    /// Absolute jump to `time`. Unlike [`ScheduledTween::advance`] the
    /// timescale does not apply.
    pub fn set(&mut self, time: f32) -> T {
        self.time = time;
        self.refresh()
    }

    /// Rewind the clock to its initial position (`time = 0`, before any
    /// delay).
    pub fn reset_time(&mut self) -> T {
        self.set(0.0)
    }

    pub fn state(&self) -> TweenState {
        if self.time < self.delay {
            TweenState::Pending
        } else if self.time < self.delay + self.duration {
            TweenState::Active
        } else {
            TweenState::Done
        }
    }

    pub fn is_done(&self) -> bool {
        self.time >= self.delay + self.duration
    }
}

/// A scalar tween driven through an externally authored [`Curve`].
///
/// The catalog ease still shapes progress over time; the curve then remaps
/// that progress before it binds to the endpoints:
/// `value = lerp(from, to, curve.evaluate(ease(t, d)))`. The surface is the
/// same as any other tween, so callers cannot tell a curve-backed value
/// from a catalog one.
#[derive(Clone, Debug)]
pub struct CurveTween<C: Curve> {
    // Eased 0 -> 1 progress clock; endpoints live here, not in the clock.
    clock: ScheduledTween<f32>,
    from: f32,
    to: f32,
    curve: C,
    value: f32,
}

impl<C: Curve> CurveTween<C> {
    pub fn new(curve: C, ease: Ease, from: f32, to: f32, duration: f32) -> Self {
        let mut tween = Self {
            clock: ScheduledTween::new(ease, 0.0, 1.0, duration),
            from,
            to,
            curve,
            value: from,
        };
        tween.refresh();
        tween
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.clock = self.clock.with_delay(delay);
        self.refresh();
        self
    }

    pub fn with_timescale(mut self, timescale: f32) -> Self {
        self.clock = self.clock.with_timescale(timescale);
        self
    }

    fn refresh(&mut self) -> f32 {
        self.value = if self.clock.state() == TweenState::Pending {
            self.from
        } else {
            f32::lerp(self.from, self.to, self.curve.evaluate(self.clock.value()))
        };
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn time(&self) -> f32 {
        self.clock.time()
    }

    pub fn advance(&mut self, delta: f32) -> f32 {
        self.clock.advance(delta);
        self.refresh()
    }

    pub fn set(&mut self, time: f32) -> f32 {
        self.clock.set(time);
        self.refresh()
    }

    pub fn reset_time(&mut self) -> f32 {
        self.clock.reset_time();
        self.refresh()
    }

    pub fn state(&self) -> TweenState {
        self.clock.state()
    }

    pub fn is_done(&self) -> bool {
        self.clock.is_done()
    }
}
