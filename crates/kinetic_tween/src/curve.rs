//! Externally authored easing curves
//!
//! A [`Curve`] is an arbitrary sampling function over `[0, 1]`, authored
//! outside the catalog (hand-tuned in an editor, baked from an asset, ...).
//! A tween bound through one remaps its eased progress with
//! `curve.evaluate(progress)` before interpolating, so visually authored
//! shapes substitute transparently for catalog shapes.

use smallvec::SmallVec;
use thiserror::Error;

/// An arbitrary (possibly non-monotonic) sampling function over `[0, 1]`.
pub trait Curve {
    fn evaluate(&self, t: f32) -> f32;
}

/// Any plain function of progress is a curve.
impl<F: Fn(f32) -> f32> Curve for F {
    fn evaluate(&self, t: f32) -> f32 {
        self(t)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    #[error("sampled curve needs at least two samples, got {0}")]
    TooFewSamples(usize),
}

/// A curve baked as uniformly spaced samples over `[0, 1]`.
///
/// Evaluation linearly interpolates between the two surrounding samples and
/// clamps outside the sampled range. Small curves stay inline.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledCurve {
    samples: SmallVec<[f32; 16]>,
}

impl SampledCurve {
    pub fn new(samples: impl IntoIterator<Item = f32>) -> Result<Self, CurveError> {
        let samples: SmallVec<[f32; 16]> = samples.into_iter().collect();
        if samples.len() < 2 {
            return Err(CurveError::TooFewSamples(samples.len()));
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

impl Curve for SampledCurve {
    fn evaluate(&self, t: f32) -> f32 {
        let last = self.samples.len() - 1;
        let pos = t.clamp(0.0, 1.0) * last as f32;
        let i = (pos as usize).min(last - 1);
        let frac = pos - i as f32;
        let a = self.samples[i];
        let b = self.samples[i + 1];
        a + (b - a) * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_few_samples() {
        assert_eq!(SampledCurve::new([]), Err(CurveError::TooFewSamples(0)));
        assert_eq!(
            SampledCurve::new([0.5]),
            Err(CurveError::TooFewSamples(1))
        );
    }

    #[test]
    fn interpolates_between_samples() {
        let curve = SampledCurve::new([0.0, 1.0, 0.0]).unwrap();
        assert_eq!(curve.evaluate(0.0), 0.0);
        assert_eq!(curve.evaluate(0.25), 0.5);
        assert_eq!(curve.evaluate(0.5), 1.0);
        assert_eq!(curve.evaluate(0.75), 0.5);
        assert_eq!(curve.evaluate(1.0), 0.0);
    }

    #[test]
    fn clamps_outside_the_sampled_range() {
        let curve = SampledCurve::new([0.2, 0.8]).unwrap();
        assert_eq!(curve.evaluate(-1.0), 0.2);
        assert_eq!(curve.evaluate(2.0), 0.8);
    }

    #[test]
    fn closures_are_curves() {
        let square = |t: f32| t * t;
        assert_eq!(Curve::evaluate(&square, 0.5), 0.25);
    }
}
