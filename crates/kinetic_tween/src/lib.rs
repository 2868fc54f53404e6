//! Kinetic tween containers
//!
//! Stateful value interpolation on top of the [`kinetic_ease`] catalog:
//!
//! - **Lerp**: one generic interpolation seam for scalars, vectors and
//!   rotations (quaternions blend along the shorter great-circle arc)
//! - **Tween**: a fixed-form container advanced once per frame, with pure
//!   and mutating time evolution
//! - **ScheduledTween**: the delay/timescale-aware form with a
//!   pending/active/done lifecycle
//! - **TweenGroup**: heterogeneous tweens advanced and queried together
//!   under one shared timescale
//! - **Curve**: externally authored sample curves substituted transparently
//!   for catalog shapes
//!
//! The caller drives time explicitly: call `advance(frame_delta)` once per
//! tick on each live tween or on the owning group. Nothing here blocks,
//! allocates per frame, or runs in the background.

pub mod curve;
pub mod group;
pub mod lerp;
pub mod scheduled;
pub mod tween;

pub use curve::{Curve, CurveError, SampledCurve};
pub use group::{GroupTween, TweenGroup, TweenId};
pub use lerp::{ease_between, Lerp, Quat};
pub use scheduled::{CurveTween, ScheduledTween, TweenState};
pub use tween::Tween;

pub use kinetic_ease::{Direction, Ease, EaseFn, Family};
