// Copyright 2026 the simcurve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Approximate intersection of two Bézier segments by sampling.
//!
//! There is no closed-form solver here for two quadratic Béziers (it leads
//! to a quartic). Instead both curves are sampled on a uniform grid of `t`
//! and close sample pairs are reported. Accuracy is bounded by the grid
//! spacing: a crossing is only found when samples of the two curves happen
//! to fall within `threshold` of each other, so coarse grids and long
//! curves can miss crossings entirely. Cost grows with the square of
//! [`SampleOptions::resolution`].

use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::{ParamCurve, Point, QuadBez};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Tuning for [`bez_intersect_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SampleOptions {
    /// Number of grid steps along each curve; `resolution + 1` samples are taken.
    pub resolution: usize,
    /// Sample pairs closer than this (after rounding) are reported.
    pub threshold: f64,
    /// Number of decimal digits distances are rounded to before comparison.
    pub precision: u32,
}

/// Reasons a [`SampleOptions`] is unusable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleOptionsError {
    /// The resolution was zero.
    ZeroResolution,
    /// The threshold was not a positive finite number.
    InvalidThreshold(f64),
    /// Rounding to this many digits is beyond `f64` precision.
    PrecisionTooHigh(u32),
}

impl SampleOptions {
    /// Largest supported [`precision`](Self::precision).
    pub const MAX_PRECISION: u32 = 15;

    /// Create options with the given resolution and threshold, keeping the
    /// default precision.
    pub fn new(resolution: usize, threshold: f64) -> Result<SampleOptions, SampleOptionsError> {
        let options = SampleOptions {
            resolution,
            threshold,
            ..SampleOptions::default()
        };
        options.validate()?;
        Ok(options)
    }

    /// Check that the options describe a usable sampling grid.
    pub fn validate(&self) -> Result<(), SampleOptionsError> {
        if self.resolution == 0 {
            return Err(SampleOptionsError::ZeroResolution);
        }
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(SampleOptionsError::InvalidThreshold(self.threshold));
        }
        if self.precision > Self::MAX_PRECISION {
            return Err(SampleOptionsError::PrecisionTooHigh(self.precision));
        }
        Ok(())
    }

    /// Set the number of grid steps.
    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the acceptance threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the number of decimal digits used when rounding distances.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Spacing between neighbouring samples in parameter space.
    #[inline]
    pub fn parameter_step(&self) -> f64 {
        (self.resolution.max(1) as f64).recip()
    }

    fn round(&self, distance: f64) -> f64 {
        let scale = 10f64.powi(self.precision.min(Self::MAX_PRECISION) as i32);
        (distance * scale).round() / scale
    }
}

impl Default for SampleOptions {
    fn default() -> Self {
        SampleOptions {
            resolution: 200,
            threshold: 0.003,
            precision: 3,
        }
    }
}

impl fmt::Display for SampleOptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroResolution => write!(f, "sampling resolution must be at least 1"),
            Self::InvalidThreshold(threshold) => {
                write!(f, "sampling threshold must be positive and finite, got {threshold}")
            }
            Self::PrecisionTooHigh(precision) => write!(
                f,
                "rounding precision {precision} exceeds the maximum of {}",
                SampleOptions::MAX_PRECISION
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SampleOptionsError {}

/// A pair of sample parameters whose points nearly coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxIntersection {
    /// Parameter on the first curve.
    pub t1: f64,
    /// Parameter on the second curve.
    pub t2: f64,
    /// Distance between the two sampled points.
    pub distance: f64,
}

/// Resolution-bounded estimates of where two Béziers cross.
///
/// These are not roots: each parameter is only known to within
/// [`parameter_tolerance`](Self::parameter_tolerance) of a true crossing,
/// and crossings may be missed.
#[derive(Clone, Debug, PartialEq)]
pub struct ApproxIntersections {
    pairs: Vec<ApproxIntersection>,
    options: SampleOptions,
}

impl ApproxIntersections {
    /// The accepted sample pairs, in sampling order.
    #[inline]
    pub fn pairs(&self) -> &[ApproxIntersection] {
        &self.pairs
    }

    /// Iterate over the accepted sample pairs.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ApproxIntersection> {
        self.pairs.iter()
    }

    /// Number of accepted pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Were no pairs accepted?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The options the curves were sampled with.
    #[inline]
    pub fn options(&self) -> &SampleOptions {
        &self.options
    }

    /// How far, in parameter space, a reported `t` may be from the sample
    /// grid point nearest the true crossing.
    #[inline]
    pub fn parameter_tolerance(&self) -> f64 {
        self.options.parameter_step()
    }
}

impl<'a> IntoIterator for &'a ApproxIntersections {
    type Item = &'a ApproxIntersection;
    type IntoIter = core::slice::Iter<'a, ApproxIntersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Approximate intersections of two Bézier segments with the default
/// [`SampleOptions`].
pub fn bez_intersect(bez1: &QuadBez, bez2: &QuadBez) -> ApproxIntersections {
    bez_intersect_with(bez1, bez2, &SampleOptions::default())
}

/// Approximate intersections of two Bézier segments.
///
/// Both curves are sampled at `t = i / resolution` for `i` in
/// `0..=resolution` and every pair of samples is compared. A pair is
/// accepted when its distance, rounded to `precision` digits, is below
/// `threshold` and no earlier pair had the same rounded distance. That last
/// rule keeps a single crossing from being reported once per neighbouring
/// sample, but it also means two separate exact crossings collapse into one
/// result.
pub fn bez_intersect_with(
    bez1: &QuadBez,
    bez2: &QuadBez,
    options: &SampleOptions,
) -> ApproxIntersections {
    let n = options.resolution.max(1);
    let samples = |bez: &QuadBez| -> Vec<(f64, Point)> {
        (0..=n)
            .map(|i| {
                let t = i as f64 / n as f64;
                (t, bez.eval(t))
            })
            .collect()
    };
    let samples1 = samples(bez1);
    let samples2 = samples(bez2);

    let mut pairs = Vec::new();
    let mut seen: SmallVec<[f64; 8]> = SmallVec::new();
    for &(t1, p1) in &samples1 {
        for &(t2, p2) in &samples2 {
            let distance = p1.distance(p2);
            let rounded = options.round(distance);
            if rounded < options.threshold && !seen.contains(&rounded) {
                seen.push(rounded);
                pairs.push(ApproxIntersection { t1, t2, distance });
            }
        }
    }
    #[cfg(feature = "log")]
    log::debug!(
        "sampled {} points per curve, accepted {} pairs",
        n + 1,
        pairs.len()
    );
    ApproxIntersections {
        pairs,
        options: *options,
    }
}
