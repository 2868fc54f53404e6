//! Directional variants and the resolved easing function
//!
//! The four directions of a family are derived from its canonical ease-out
//! shape `f`:
//!
//! - `Out(t, d) = f(t/d)`
//! - `In(t, d) = 1 - f(1 - t/d)` (time-reversal)
//! - `InOut`: first half runs `In` at double speed into `[0, 0.5]`, second
//!   half runs `Out` into `[0.5, 1]`
//! - `OutIn`: the mirror, `Out` first then `In`
//!
//! Both split variants meet at exactly 0.5 at `t = d/2`.

use std::fmt;

use crate::family::{self, Family, Shape};

/// A resolved easing function: `(time, duration) -> progress`.
pub type EaseFn = fn(f32, f32) -> f32;

/// Directional variant of an easing family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Out,
    In,
    InOut,
    OutIn,
}

impl Direction {
    /// Every direction, for iteration in catalogs and tests.
    pub const ALL: [Direction; 4] = [
        Direction::Out,
        Direction::In,
        Direction::InOut,
        Direction::OutIn,
    ];
}

fn eased_out<S: Shape>(time: f32, duration: f32) -> f32 {
    S::out(time / duration)
}

fn eased_in<S: Shape>(time: f32, duration: f32) -> f32 {
    1.0 - S::out(1.0 - time / duration)
}

fn eased_in_out<S: Shape>(time: f32, duration: f32) -> f32 {
    if time < duration * 0.5 {
        0.5 * eased_in::<S>(time * 2.0, duration)
    } else {
        0.5 + 0.5 * eased_out::<S>(time * 2.0 - duration, duration)
    }
}

fn eased_out_in<S: Shape>(time: f32, duration: f32) -> f32 {
    if time < duration * 0.5 {
        0.5 * eased_out::<S>(time * 2.0, duration)
    } else {
        0.5 + 0.5 * eased_in::<S>(time * 2.0 - duration, duration)
    }
}

/// Identity family: full progress regardless of time.
fn instant(_time: f32, _duration: f32) -> f32 {
    1.0
}

fn resolve<S: Shape>(direction: Direction) -> EaseFn {
    match direction {
        Direction::Out => eased_out::<S>,
        Direction::In => eased_in::<S>,
        Direction::InOut => eased_in_out::<S>,
        Direction::OutIn => eased_out_in::<S>,
    }
}

/// An easing function selected from the catalog by `(family, direction)`.
///
/// The function pointer is resolved once here; [`Ease::apply`] is a direct
/// call. `Ease` is `Copy` and freely shared between any number of tweens.
///
/// # Preconditions
///
/// `apply` divides by `duration`. A non-positive duration is a caller bug:
/// it is asserted in debug builds and produces meaningless results in
/// release builds. The `None` family is exempt (it never reads time).
#[derive(Clone, Copy)]
pub struct Ease {
    family: Family,
    direction: Direction,
    f: EaseFn,
}

impl Ease {
    pub fn new(family: Family, direction: Direction) -> Self {
        let f = match family {
            Family::Linear => resolve::<family::Linear>(direction),
            Family::Quadratic => resolve::<family::Quadratic>(direction),
            Family::Cubic => resolve::<family::Cubic>(direction),
            Family::Quartic => resolve::<family::Quartic>(direction),
            Family::Quintic => resolve::<family::Quintic>(direction),
            Family::Sinusoidal => resolve::<family::Sinusoidal>(direction),
            Family::Exponential => resolve::<family::Exponential>(direction),
            Family::Circular => resolve::<family::Circular>(direction),
            Family::Elastic => resolve::<family::Elastic>(direction),
            Family::Bounce => resolve::<family::Bounce>(direction),
            Family::Back => resolve::<family::Back>(direction),
            Family::None => instant,
        };
        Self {
            family,
            direction,
            f,
        }
    }

    /// Evaluate the easing function at `time` over `duration`.
    ///
    /// `time` outside `[0, duration]` is allowed; polynomial and sinusoidal
    /// families extrapolate, the endpoint-guarded families saturate.
    pub fn apply(&self, time: f32, duration: f32) -> f32 {
        debug_assert!(
            self.family == Family::None || duration > 0.0,
            "easing requires a positive duration"
        );
        (self.f)(time, duration)
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::new(Family::default(), Direction::default())
    }
}

impl PartialEq for Ease {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.direction == other.direction
    }
}

impl Eq for Ease {}

impl fmt::Debug for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ease")
            .field("family", &self.family)
            .field("direction", &self.direction)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn shaped_families() -> impl Iterator<Item = Family> {
        Family::ALL.into_iter().filter(|f| *f != Family::None)
    }

    #[test]
    fn out_and_in_hit_boundaries_exactly() {
        let duration = 2.0;
        for family in shaped_families() {
            for direction in [Direction::Out, Direction::In] {
                let ease = Ease::new(family, direction);
                let start = ease.apply(0.0, duration);
                let end = ease.apply(duration, duration);
                assert!(
                    start.abs() < EPS,
                    "{family:?} {direction:?} start = {start}"
                );
                assert!(
                    (end - 1.0).abs() < EPS,
                    "{family:?} {direction:?} end = {end}"
                );
            }
        }
    }

    #[test]
    fn guarded_families_are_bit_exact_at_boundaries() {
        // Exponential, elastic and bounce pin their endpoints explicitly;
        // a tween bound to them must land on the target, not near it.
        let duration = 0.7;
        for family in [Family::Exponential, Family::Elastic, Family::Bounce] {
            let out = Ease::new(family, Direction::Out);
            let ease_in = Ease::new(family, Direction::In);
            assert_eq!(out.apply(0.0, duration), 0.0, "{family:?}");
            assert_eq!(out.apply(duration, duration), 1.0, "{family:?}");
            assert_eq!(ease_in.apply(0.0, duration), 0.0, "{family:?}");
            assert_eq!(ease_in.apply(duration, duration), 1.0, "{family:?}");
        }
    }

    #[test]
    fn split_variants_are_continuous_at_midpoint() {
        let duration = 2.0;
        for family in shaped_families() {
            for direction in [Direction::InOut, Direction::OutIn] {
                let ease = Ease::new(family, direction);
                let just_before = ease.apply(duration * 0.5 - 1e-4, duration);
                let mid = ease.apply(duration * 0.5, duration);
                assert!(
                    (mid - 0.5).abs() < EPS,
                    "{family:?} {direction:?} mid = {mid}"
                );
                // Approaching from the first half must meet the same value.
                assert!(
                    (just_before - 0.5).abs() < 1e-2,
                    "{family:?} {direction:?} just_before = {just_before}"
                );
            }
        }
    }

    #[test]
    fn split_variants_hit_boundaries() {
        let duration = 2.0;
        for family in shaped_families() {
            for direction in [Direction::InOut, Direction::OutIn] {
                let ease = Ease::new(family, direction);
                assert!(ease.apply(0.0, duration).abs() < EPS, "{family:?}");
                assert!(
                    (ease.apply(duration, duration) - 1.0).abs() < EPS,
                    "{family:?}"
                );
            }
        }
    }

    #[test]
    fn in_is_time_reversal_of_out() {
        let duration = 2.0;
        for family in shaped_families() {
            let out = Ease::new(family, Direction::Out);
            let ease_in = Ease::new(family, Direction::In);
            for t in [0.0, 0.3, 0.9, 1.0, 1.7, 2.0] {
                let lhs = ease_in.apply(t, duration);
                let rhs = 1.0 - out.apply(duration - t, duration);
                assert!(
                    (lhs - rhs).abs() < 1e-5,
                    "{family:?} t = {t}: {lhs} vs {rhs}"
                );
            }
        }
    }

    #[test]
    fn quadratic_out_matches_canonical_formula() {
        // f(x) = 1 - (1 - x)^2, so halfway through progress is 0.75.
        let ease = Ease::new(Family::Quadratic, Direction::Out);
        assert_eq!(ease.apply(1.0, 2.0), 0.75);
    }

    #[test]
    fn none_family_reports_full_progress_always() {
        for direction in Direction::ALL {
            let ease = Ease::new(Family::None, direction);
            assert_eq!(ease.apply(0.0, 1.0), 1.0);
            assert_eq!(ease.apply(0.5, 1.0), 1.0);
            assert_eq!(ease.apply(-3.0, 1.0), 1.0);
        }
    }

    #[test]
    fn elastic_overshoots_mid_interval() {
        let ease = Ease::new(Family::Elastic, Direction::Out);
        let overshoot = (0..100)
            .map(|i| ease.apply(i as f32 / 100.0, 1.0))
            .fold(f32::MIN, f32::max);
        assert!(overshoot > 1.0, "elastic out never left [0, 1]");
    }

    #[test]
    fn back_in_dips_below_zero() {
        let ease = Ease::new(Family::Back, Direction::In);
        let dip = (1..50)
            .map(|i| ease.apply(i as f32 / 100.0, 1.0))
            .fold(f32::MAX, f32::min);
        assert!(dip < 0.0, "back in never dipped below zero");
    }

    #[test]
    fn default_is_linear_out() {
        let ease = Ease::default();
        assert_eq!(ease.family(), Family::Linear);
        assert_eq!(ease.direction(), Direction::Out);
        assert_eq!(ease.apply(0.25, 1.0), 0.25);
    }

    #[test]
    fn family_shorthand_matches_new() {
        assert_eq!(
            Family::Cubic.ease(Direction::InOut),
            Ease::new(Family::Cubic, Direction::InOut)
        );
    }
}
