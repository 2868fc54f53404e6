//! Easing families and their canonical shapes
//!
//! Every family is defined by a single ease-out curve `f(x)` over normalized
//! time `x = t / d`, with `f(0) = 0` and `f(1) = 1`. The directional variants
//! in [`crate::ease`] are all derived from that one formula.

use std::f32::consts::FRAC_PI_2;

/// A named easing shape.
///
/// `None` is the identity family: it reports full progress unconditionally,
/// so a tween bound to it jumps straight to its end value. It is the safe
/// choice when no shape is configured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Family {
    #[default]
    Linear,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Sinusoidal,
    Exponential,
    Circular,
    Elastic,
    Bounce,
    Back,
    None,
}

impl Family {
    /// Every family, for iteration in catalogs and tests.
    pub const ALL: [Family; 12] = [
        Family::Linear,
        Family::Quadratic,
        Family::Cubic,
        Family::Quartic,
        Family::Quintic,
        Family::Sinusoidal,
        Family::Exponential,
        Family::Circular,
        Family::Elastic,
        Family::Bounce,
        Family::Back,
        Family::None,
    ];

    /// Shorthand for [`crate::Ease::new`].
    pub fn ease(self, direction: crate::Direction) -> crate::Ease {
        crate::Ease::new(self, direction)
    }
}

/// Canonical ease-out curve of one family over normalized time.
pub(crate) trait Shape {
    fn out(x: f32) -> f32;
}

pub(crate) struct Linear;
pub(crate) struct Quadratic;
pub(crate) struct Cubic;
pub(crate) struct Quartic;
pub(crate) struct Quintic;
pub(crate) struct Sinusoidal;
pub(crate) struct Exponential;
pub(crate) struct Circular;
pub(crate) struct Elastic;
pub(crate) struct Bounce;
pub(crate) struct Back;

impl Shape for Linear {
    fn out(x: f32) -> f32 {
        x
    }
}

impl Shape for Quadratic {
    fn out(x: f32) -> f32 {
        1.0 - (1.0 - x) * (1.0 - x)
    }
}

impl Shape for Cubic {
    fn out(x: f32) -> f32 {
        1.0 - (1.0 - x).powi(3)
    }
}

impl Shape for Quartic {
    fn out(x: f32) -> f32 {
        1.0 - (1.0 - x).powi(4)
    }
}

impl Shape for Quintic {
    fn out(x: f32) -> f32 {
        1.0 - (1.0 - x).powi(5)
    }
}

impl Shape for Sinusoidal {
    fn out(x: f32) -> f32 {
        (x * FRAC_PI_2).sin()
    }
}

impl Shape for Exponential {
    fn out(x: f32) -> f32 {
        // 2^-10x never quite reaches 0; pin the endpoint so tweens land
        // exactly on their target.
        if x >= 1.0 {
            1.0
        } else {
            1.0 - 2f32.powf(-10.0 * x)
        }
    }
}

impl Shape for Circular {
    fn out(x: f32) -> f32 {
        // The quarter-circle arc is only defined on [0, 1]; saturate outside
        // rather than produce NaN under unclamped overshoot.
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            (1.0 - (1.0 - x) * (1.0 - x)).sqrt()
        }
    }
}

impl Shape for Elastic {
    fn out(x: f32) -> f32 {
        const TWO_PI_THIRDS: f32 = std::f32::consts::TAU / 3.0;
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            2f32.powf(-10.0 * x) * ((10.0 * x - 0.75) * TWO_PI_THIRDS).sin() + 1.0
        }
    }
}

impl Shape for Bounce {
    fn out(x: f32) -> f32 {
        const N1: f32 = 7.5625;
        const D1: f32 = 2.75;
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else if x < 1.0 / D1 {
            N1 * x * x
        } else if x < 2.0 / D1 {
            let x = x - 1.5 / D1;
            N1 * x * x + 0.75
        } else if x < 2.5 / D1 {
            let x = x - 2.25 / D1;
            N1 * x * x + 0.9375
        } else {
            let x = x - 2.625 / D1;
            N1 * x * x + 0.984375
        }
    }
}

impl Shape for Back {
    fn out(x: f32) -> f32 {
        const S: f32 = 1.70158;
        // The cubic leaves a rounding residue at x = 0; pin it.
        if x <= 0.0 {
            0.0
        } else {
            let u = x - 1.0;
            u * u * ((S + 1.0) * u + S) + 1.0
        }
    }
}
