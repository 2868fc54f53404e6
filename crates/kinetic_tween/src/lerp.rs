//! Value interpolation
//!
//! [`Lerp`] binds a normalized progress value to a pair of endpoints. One
//! generic implementation covers every value type a tween can hold; integer
//! impls truncate toward zero, and [`Quat`] blends rotations spherically
//! along the shorter arc.

use kinetic_ease::Ease;

/// Types a tween can interpolate.
///
/// `t` is eased progress, usually in `[0, 1]` but not clamped: overshooting
/// families hand impls values outside that range and they are expected to
/// extrapolate.
pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f64 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t as f64
    }
}

impl<const N: usize> Lerp for [f32; N] {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        let mut out = a;
        for i in 0..N {
            out[i] = a[i] + (b[i] - a[i]) * t;
        }
        out
    }
}

// Integer endpoints interpolate in real arithmetic and truncate toward zero
// (an `as` cast, not rounding): easing from 0 to 3 at progress 0.9 yields 2.
macro_rules! lerp_int_impl {
    ($($int:ty => $real:ty),* $(,)?) => {$(
        impl Lerp for $int {
            fn lerp(a: Self, b: Self, t: f32) -> Self {
                (a as $real + (b as $real - a as $real) * t as $real) as $int
            }
        }
    )*};
}

lerp_int_impl!(
    i8 => f32,
    i16 => f32,
    i32 => f64,
    i64 => f64,
    u8 => f32,
    u16 => f32,
    u32 => f64,
    u64 => f64,
);

/// Evaluate `ease` at `time` over `duration` and bind the resulting progress
/// to the `from`/`to` endpoints.
pub fn ease_between<T: Lerp>(ease: Ease, from: T, to: T, time: f32, duration: f32) -> T {
    T::lerp(from, to, ease.apply(time, duration))
}

/// Below this value of `sin(angle)` the sine-ratio weights are numerically
/// unstable and slerp falls back to normalized linear blending.
const SLERP_FALLBACK_LIMIT: f32 = 0.1;

/// A rotation as a unit quaternion.
///
/// Its [`Lerp`] impl is spherical: interpolation follows the shorter
/// great-circle arc between the two orientations, so a tween over `Quat`
/// sweeps rotation at constant angular velocity under a linear ease.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians around `axis` (need not be unit length).
    pub fn from_axis_angle(axis: [f32; 3], angle: f32) -> Self {
        let len = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
        let (s, c) = (angle * 0.5).sin_cos();
        let s = s / len;
        Self {
            x: axis[0] * s,
            y: axis[1] * s,
            z: axis[2] * s,
            w: c,
        }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn normalized(self) -> Self {
        self.scaled(1.0 / self.dot(self).sqrt())
    }

    fn scaled(self, s: f32) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
            w: self.w * s,
        }
    }

    fn added(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w,
        }
    }

    /// Normalized linear blend. Cheaper than [`Quat::slerp`] but sweeps at
    /// non-constant angular velocity.
    pub fn nlerp(a: Self, b: Self, t: f32) -> Self {
        a.scaled(1.0 - t).added(b.scaled(t)).normalized()
    }

    /// Spherical interpolation along the shorter arc.
    pub fn slerp(a: Self, b: Self, t: f32) -> Self {
        let d = a.dot(b);
        // q and -q are the same rotation; flip to take the shorter arc.
        let target = b.scaled(d.signum());
        let angle = d.abs().min(1.0).acos();
        let norm = angle.sin();
        if norm < SLERP_FALLBACK_LIMIT {
            return Self::nlerp(a, target, t);
        }
        a.scaled(((1.0 - t) * angle).sin() / norm)
            .added(target.scaled((t * angle).sin() / norm))
    }
}

impl Lerp for Quat {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        Quat::slerp(a, b, t)
    }
}
