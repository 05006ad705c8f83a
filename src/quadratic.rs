// Copyright 2026 the simcurve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parabolas in standard form.

use core::fmt;

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::common::{approx_eq, solve_quadratic};
use crate::{CurveRoots, Linear, ParamCurve, ParamCurveSolve, Point};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The parabola `y = a x² + b x + c`.
///
/// The leading coefficient is never zero: a zero `a` is replaced by
/// [`Quadratic::DEGENERATE_EPSILON`] on construction, so that the vertex
/// and root formulas never divide by zero. Such a quadratic behaves like
/// the line `y = b x + c` near the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "QuadraticCoeffs"))]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
}

#[cfg(feature = "serde")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(serde::Deserialize)]
struct QuadraticCoeffs {
    a: f64,
    b: f64,
    c: f64,
}

#[cfg(feature = "serde")]
impl From<QuadraticCoeffs> for Quadratic {
    fn from(coeffs: QuadraticCoeffs) -> Quadratic {
        Quadratic::new(coeffs.a, coeffs.b, coeffs.c)
    }
}

impl Quadratic {
    /// Value substituted for a zero leading coefficient.
    pub const DEGENERATE_EPSILON: f64 = 1e-14;

    /// Create a new quadratic from its coefficients.
    pub fn new(a: f64, b: f64, c: f64) -> Quadratic {
        let a = if a == 0.0 {
            #[cfg(feature = "log")]
            log::trace!(
                "quadratic with zero leading coefficient, using {}",
                Self::DEGENERATE_EPSILON
            );
            Self::DEGENERATE_EPSILON
        } else {
            a
        };
        Quadratic { a, b, c }
    }

    /// The quadratic coefficient.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The linear coefficient.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The constant term.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The value of `y` at `x`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// The turning point of the parabola.
    ///
    /// Setting the derivative `2 a x + b` to zero gives `x = -b / 2a`.
    pub fn vertex(&self) -> Point {
        let x = -self.b / (2.0 * self.a);
        Point::new(x, self.evaluate(x))
    }

    /// The derivative, as the line `y = 2 a x + b`.
    #[inline]
    pub fn derivative(&self) -> Linear {
        Linear::new(2.0 * self.a, self.b)
    }

    /// The discriminant `b² - 4ac`.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }
}

impl CurveRoots for Quadratic {
    /// The real roots of `a x² + b x + c = 0`.
    ///
    /// A negative discriminant gives no roots, a zero discriminant a single
    /// root, and a positive one two distinct roots.
    fn roots(&self) -> ArrayVec<f64, 2> {
        let d = self.discriminant();
        if !d.is_finite() {
            return solve_quadratic(self.c, self.b, self.a);
        }
        let mut result = ArrayVec::new();
        if d < 0.0 {
            return result;
        }
        if d == 0.0 {
            result.push(-0.5 * self.b / self.a);
            return result;
        }
        // Pick the sign that avoids cancellation; q is nonzero since d > 0.
        let q = -0.5 * (self.b + d.sqrt().copysign(self.b));
        let (root1, root2) = (q / self.a, self.c / q);
        if !root1.is_finite() || !root2.is_finite() {
            result.extend([root1, root2].into_iter().filter(|r| r.is_finite()));
        } else if root1 == root2 {
            result.push(root1);
        } else {
            result.push(root1.min(root2));
            result.push(root1.max(root2));
        }
        result
    }
}

impl ParamCurve for Quadratic {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        Point::new(t, self.evaluate(t))
    }
}

impl ParamCurveSolve for Quadratic {
    fn solve_with_tolerance(&self, p: Point, tolerance: f64) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        if approx_eq(self.evaluate(p.x), p.y, tolerance) {
            result.push(p.x);
        }
        result
    }
}

impl fmt::Display for Quadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}x^2 + {:.3}x + {:.3}", self.a, self.b, self.c)
    }
}

/// The points where a parabola and a line meet.
///
/// Substituting the line into the parabola gives
/// `0 = a x² + (b - m) x + (c - b_line)`, whose real roots are the x
/// coordinates of the intersections. Returns `None` when that equation has
/// no real roots, so callers can tell "no intersection" apart from an
/// empty result computed elsewhere. Points are ordered by x.
pub fn quad_line_intersect(quad: &Quadratic, line: &Linear) -> Option<SmallVec<[Point; 2]>> {
    let diff = Quadratic::new(quad.a, quad.b - line.m, quad.c - line.b);
    let roots = diff.roots();
    if roots.is_empty() {
        return None;
    }
    Some(roots.iter().map(|&x| Point::new(x, quad.evaluate(x))).collect())
}

/// The points where two parabolas meet, ordered by x.
///
/// Returns `None` when the difference of the two has no real roots. Two
/// parabolas differing only in their constant term are parallel in this
/// sense too.
pub(crate) fn quad_quad_intersect(q1: &Quadratic, q2: &Quadratic) -> Option<SmallVec<[Point; 2]>> {
    let (da, db, dc) = (q1.a - q2.a, q1.b - q2.b, q1.c - q2.c);
    // Equal leading coefficients leave a linear equation; solve it directly
    // rather than through the epsilon substitution.
    let roots = solve_quadratic(dc, db, da);
    if roots.is_empty() || (da == 0.0 && db == 0.0) {
        return None;
    }
    Some(roots.iter().map(|&x| Point::new(x, q1.evaluate(x))).collect())
}
