//! Fixed-form tween container
//!
//! A [`Tween`] tracks one value easing from `from` to `to` over `duration`.
//! The cached value is recomputed from the bound ease on every time change;
//! it is never mutated independently, so reading it is always consistent
//! with the current time.
//!
//! Time evolution comes in two flavors: pure ([`Tween::at`],
//! [`Tween::advanced`], [`Tween::clamped`]) returning an advanced copy, and
//! mutating ([`Tween::advance`], [`Tween::clamp`]) returning the new value.
//! Advancing past the duration is allowed and intentional; only the `clamp`
//! operations restrict time to `[0, duration]`.

use kinetic_ease::Ease;

use crate::lerp::{ease_between, Lerp};

/// One in-flight interpolation with per-frame time accumulation.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T: Lerp> {
    ease: Ease,
    from: T,
    to: T,
    duration: f32,
    time: f32,
    value: T,
}

impl<T: Lerp> Tween<T> {
    /// Create a tween at `time = 0`.
    ///
    /// `duration` must be positive; this is a caller precondition, asserted
    /// in debug builds only.
    pub fn new(ease: Ease, from: T, to: T, duration: f32) -> Self {
        debug_assert!(duration > 0.0, "tween duration must be positive");
        Self {
            ease,
            from,
            to,
            duration,
            time: 0.0,
            value: ease_between(ease, from, to, 0.0, duration),
        }
    }

    fn eval(&self, time: f32) -> T {
        ease_between(self.ease, self.from, self.to, time, self.duration)
    }

    /// The value at the current time.
    pub fn value(&self) -> T {
        self.value
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn from(&self) -> T {
        self.from
    }

    pub fn to(&self) -> T {
        self.to
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Normalized time, `time / duration`. Not clamped.
    pub fn progress(&self) -> f32 {
        self.time / self.duration
    }

    /// Jump to the time corresponding to `progress`.
    pub fn set_progress(&mut self, progress: f32) {
        *self = self.at(self.duration * progress);
    }

    /// A copy of this tween evaluated at absolute time `time`.
    pub fn at(&self, time: f32) -> Self {
        Self {
            time,
            value: self.eval(time),
            ..*self
        }
    }

    /// A copy advanced by `delta`, unclamped.
    pub fn advanced(&self, delta: f32) -> Self {
        self.at(self.time + delta)
    }

    /// A copy advanced by `delta` with time saturated to `[0, duration]`.
    pub fn clamped(&self, delta: f32) -> Self {
        self.at((self.time + delta).clamp(0.0, self.duration))
    }

    /// Advance in place, unclamped, and return the new value.
    pub fn advance(&mut self, delta: f32) -> T {
        *self = self.advanced(delta);
        self.value
    }

    /// Advance in place, saturating to `[0, duration]`, and return the new
    /// value.
    pub fn clamp(&mut self, delta: f32) -> T {
        *self = self.clamped(delta);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_ease::{Direction, Family};

    const EPS: f32 = 1e-5;

    fn quad_out() -> Ease {
        Ease::new(Family::Quadratic, Direction::Out)
    }

    #[test]
    fn quadratic_out_end_to_end() {
        let mut tween = Tween::new(quad_out(), 0.0f32, 10.0, 2.0);
        assert_eq!(tween.value(), 0.0);
        let value = tween.advance(1.0);
        // QuadraticOut(1, 2) = 1 - (1 - 0.5)^2 = 0.75
        assert_eq!(value, 7.5);
        assert_eq!(tween.value(), 7.5);
    }

    #[test]
    fn repeated_advances_compose_additively() {
        let duration = 2.0;
        let mut stepped = Tween::new(quad_out(), -3.0f32, 9.0, duration);
        for _ in 0..3 {
            stepped.advance(duration / 3.0);
        }
        let direct = stepped.at(duration);
        assert!((stepped.value() - direct.value()).abs() < EPS);
        assert!((stepped.time() - duration).abs() < EPS);
    }

    #[test]
    fn pure_variants_leave_the_original_untouched() {
        let tween = Tween::new(quad_out(), 0.0f32, 10.0, 2.0);
        let later = tween.advanced(1.5);
        assert_eq!(tween.time(), 0.0);
        assert_eq!(tween.value(), 0.0);
        assert!((later.time() - 1.5).abs() < EPS);
        assert!(later.value() > tween.value());
    }

    #[test]
    fn clamp_saturates_time() {
        let mut tween = Tween::new(quad_out(), 0.0f32, 10.0, 2.0);
        tween.clamp(1e6);
        assert_eq!(tween.time(), 2.0);
        assert_eq!(tween.value(), 10.0);
        tween.clamp(-1e9);
        assert_eq!(tween.time(), 0.0);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn unclamped_advance_may_overshoot() {
        let mut tween = Tween::new(Ease::default(), 0.0f32, 10.0, 2.0);
        tween.advance(3.0);
        assert_eq!(tween.time(), 3.0);
        assert_eq!(tween.value(), 15.0);
    }

    #[test]
    fn progress_round_trips_through_setter() {
        let mut tween = Tween::new(quad_out(), 0.0f32, 10.0, 4.0);
        tween.set_progress(0.5);
        assert!((tween.time() - 2.0).abs() < EPS);
        assert!((tween.progress() - 0.5).abs() < EPS);
        assert_eq!(tween.value(), 7.5);
    }

    #[test]
    fn value_tracks_time_through_every_mutation() {
        let mut tween = Tween::new(quad_out(), 2.0f32, 6.0, 1.0);
        for delta in [0.1, 0.25, -0.05, 0.6] {
            let reported = tween.advance(delta);
            let expected =
                ease_between(quad_out(), 2.0, 6.0, tween.time(), tween.duration());
            assert!((reported - expected).abs() < EPS);
        }
    }

    #[test]
    fn none_family_jumps_to_the_end() {
        let tween = Tween::new(Family::None.ease(Direction::Out), 1.0f32, 5.0, 1.0);
        assert_eq!(tween.value(), 5.0);
    }
}
