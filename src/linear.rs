// Copyright 2026 the simcurve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straight lines in slope-intercept form.

use core::fmt;

use arrayvec::ArrayVec;

use crate::common::approx_eq;
use crate::{CurveRoots, ParamCurve, ParamCurveSolve, Point};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The line `y = m x + b`.
///
/// Supply and demand curves in the simulation are lines of this form.
/// Vertical lines cannot be represented; see [`line_intersect_vline`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Linear {
    /// Slope.
    pub m: f64,
    /// Y intercept.
    pub b: f64,
}

/// How two lines meet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineIntersection {
    /// The lines cross at exactly one point.
    Point(Point),
    /// The lines have the same slope and never meet.
    Parallel,
    /// The lines are the same line.
    Coincident,
}

impl Linear {
    /// Create a new line from its slope and y intercept.
    #[inline]
    pub const fn new(m: f64, b: f64) -> Linear {
        Linear { m, b }
    }

    /// The line through two points.
    ///
    /// Returns `None` if the points share an x coordinate.
    pub fn through(p0: Point, p1: Point) -> Option<Linear> {
        let m = (p1.y - p0.y) / (p1.x - p0.x);
        if !m.is_finite() {
            return None;
        }
        Some(Linear::new(m, p0.y - m * p0.x))
    }

    /// The value of `y` at `x`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.m * x + self.b
    }

    /// The angle of the line in radians, measured from the positive x axis.
    ///
    /// Because the slope is finite the result lies strictly between -π/2
    /// and π/2.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.m.atan2(1.0)
    }

    /// Intersect with another line.
    ///
    /// This is the same as [`lines_intersect`].
    #[inline]
    pub fn intersect(&self, other: &Linear) -> LineIntersection {
        lines_intersect(self, other)
    }
}

impl ParamCurve for Linear {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        Point::new(t, self.evaluate(t))
    }
}

impl CurveRoots for Linear {
    /// The x intercept.
    ///
    /// A horizontal line reports no roots, including `y = 0`, which is zero
    /// everywhere.
    fn roots(&self) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        let root = -self.b / self.m;
        if root.is_finite() {
            result.push(root);
        }
        result
    }
}

impl ParamCurveSolve for Linear {
    fn solve_with_tolerance(&self, p: Point, tolerance: f64) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        if approx_eq(self.evaluate(p.x), p.y, tolerance) {
            result.push(p.x);
        }
        result
    }
}

impl fmt::Display for Linear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {:.12}x + {:.12}", self.m, self.b)
    }
}

/// The point where two lines cross.
///
/// Lines with equal slopes do not have a unique intersection; they are
/// reported as [`LineIntersection::Parallel`], or
/// [`LineIntersection::Coincident`] when the intercepts agree as well.
/// The computation is symmetric in its arguments.
pub fn lines_intersect(line1: &Linear, line2: &Linear) -> LineIntersection {
    // m1 x + b1 = m2 x + b2  =>  x = (b2 - b1) / (m1 - m2)
    if line1.m == line2.m {
        if line1.b == line2.b {
            return LineIntersection::Coincident;
        }
        return LineIntersection::Parallel;
    }
    let dm = line1.m - line2.m;
    let x = (line2.b - line1.b) / dm;
    // Written as a ratio so that swapping the lines only flips both signs.
    let y = (line1.m * line2.b - line2.m * line1.b) / dm;
    let p = Point::new(x, y);
    if p.is_finite() {
        LineIntersection::Point(p)
    } else {
        LineIntersection::Parallel
    }
}

/// The point where a line crosses the vertical line `x = vline_x`.
#[inline]
pub fn line_intersect_vline(line: &Linear, vline_x: f64) -> Point {
    line.eval(vline_x)
}

#[cfg(test)]
mod tests {
    use crate::{
        line_intersect_vline, lines_intersect, CurveRoots, LineIntersection, Linear, ParamCurve,
        ParamCurveSolve, Point,
    };
    use core::f64::consts::FRAC_PI_4;

    #[test]
    fn linear_evaluate() {
        let l = Linear::new(2.0, 1.0);
        assert_eq!(l.evaluate(0.0), 1.0);
        assert_eq!(l.evaluate(3.0), 7.0);
        assert_eq!(l.eval(-1.0), Point::new(-1.0, -1.0));
        assert_eq!(l.start(), Point::new(0.0, 1.0));
        assert_eq!(l.end(), Point::new(1.0, 3.0));
    }

    #[test]
    fn linear_angle() {
        assert_eq!(Linear::new(0.0, 5.0).angle(), 0.0);
        assert!((Linear::new(1.0, 0.0).angle() - FRAC_PI_4).abs() < 1e-12);
        assert!((Linear::new(-1.0, 0.0).angle() + FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn linear_roots() {
        let roots = Linear::new(2.0, -4.0).roots();
        assert_eq!(roots.as_slice(), &[2.0]);
        assert!(Linear::new(0.0, 1.0).roots().is_empty());
        assert!(Linear::new(0.0, 0.0).roots().is_empty());
    }

    #[test]
    fn linear_through() {
        let l = Linear::through(Point::new(0.0, 1.0), Point::new(2.0, 5.0)).unwrap();
        assert_eq!(l, Linear::new(2.0, 1.0));
        assert!(Linear::through(Point::new(1.0, 0.0), Point::new(1.0, 5.0)).is_none());
    }

    #[test]
    fn lines_cross() {
        // Supply rising, demand falling.
        let supply = Linear::new(1.0, 0.0);
        let demand = Linear::new(-1.0, 10.0);
        assert_eq!(
            lines_intersect(&supply, &demand),
            LineIntersection::Point(Point::new(5.0, 5.0))
        );
        assert_eq!(supply.intersect(&demand), lines_intersect(&supply, &demand));
    }

    #[test]
    fn lines_intersect_symmetric() {
        let pairs = [
            (Linear::new(0.3, 1.7), Linear::new(-2.9, 0.1)),
            (Linear::new(1e-3, -4.0), Linear::new(7.5, 3.3)),
            (Linear::new(-0.1, 0.2), Linear::new(0.7, -0.3)),
        ];
        for (l1, l2) in pairs {
            assert_eq!(lines_intersect(&l1, &l2), lines_intersect(&l2, &l1));
            match lines_intersect(&l1, &l2) {
                LineIntersection::Point(p) => {
                    assert!((l1.evaluate(p.x) - p.y).abs() < 1e-9);
                    assert!((l2.evaluate(p.x) - p.y).abs() < 1e-9);
                }
                other => panic!("expected a crossing, got {other:?}"),
            }
        }
    }

    #[test]
    fn lines_parallel() {
        let l1 = Linear::new(2.0, 1.0);
        let l2 = Linear::new(2.0, 3.0);
        assert_eq!(lines_intersect(&l1, &l2), LineIntersection::Parallel);
        assert_eq!(lines_intersect(&l1, &l1), LineIntersection::Coincident);
        // Nearly parallel lines whose crossing overflows.
        let l3 = Linear::new(2.0 + 2.0 * f64::EPSILON, 1e300);
        assert_eq!(lines_intersect(&l1, &l3), LineIntersection::Parallel);
    }

    #[test]
    fn vline() {
        let l = Linear::new(0.5, -1.0);
        assert_eq!(line_intersect_vline(&l, 4.0), Point::new(4.0, 1.0));
    }

    #[test]
    fn linear_solve() {
        let l = Linear::new(0.5, -1.0);
        assert_eq!(l.solve(Point::new(4.0, 1.0)).as_slice(), &[4.0]);
        assert!(l.solve(Point::new(4.0, 1.5)).is_empty());
    }

    #[test]
    fn linear_display() {
        let l = Linear::new(1.5, -2.0);
        assert_eq!(format!("{l}"), "y = 1.500000000000x + -2.000000000000");
    }
}
