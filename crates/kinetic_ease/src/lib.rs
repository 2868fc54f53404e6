//! Kinetic easing catalog
//!
//! Pure easing functions for animation timing. Each named shape (a *family*)
//! is authored once as its canonical ease-out formula; the four directional
//! variants are derived from it mechanically:
//!
//! - **Out**: decelerate toward the target
//! - **In**: accelerate away from the start (time-reversal of Out)
//! - **InOut**: accelerate, then decelerate
//! - **OutIn**: decelerate, then accelerate
//!
//! An [`Ease`] resolves a `(Family, Direction)` pair to a plain function
//! pointer once at construction, so per-frame evaluation is a direct call
//! with no lookup or dynamic dispatch.
//!
//! ```rust
//! use kinetic_ease::{Direction, Ease, Family};
//!
//! let ease = Ease::new(Family::Quadratic, Direction::Out);
//! assert_eq!(ease.apply(1.0, 2.0), 0.75);
//! ```
//!
//! All functions take `(time, duration)` and return normalized progress.
//! Progress is 0 at `time = 0` and 1 at `time = duration`; the elastic,
//! bounce and back families leave `[0, 1]` in between by design.

pub mod ease;
pub mod family;

pub use ease::{Direction, Ease, EaseFn};
pub use family::Family;
