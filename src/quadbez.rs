// Copyright 2026 the simcurve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::common::{approx_eq, push_unique, solve_quadratic};
use crate::{Axis, CurveRoots, Linear, ParamCurve, ParamCurveSolve, Point, Quadratic, Vec2};

/// A single quadratic Bézier segment.
///
/// `B(t) = (1-t)² p0 + 2(1-t)t p1 + t² p2`, where `p0` is the start, `p1`
/// the control point and `p2` the end. The segment itself is `t` in
/// `[0, 1]`; evaluating outside that range extrapolates the parabola.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    /// The start point.
    pub p0: Point,
    /// The control point.
    pub p1: Point,
    /// The end point.
    pub p2: Point,
}

/// Parameters solving one coordinate of a Bézier.
enum AxisRoots {
    /// The coordinate is constant and equal to the target, so every `t` works.
    Any,
    Roots(ArrayVec<f64, 2>),
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Polynomial coefficients `(a, b, c)` such that `B(t) = a t² + b t + c`.
    #[inline]
    pub fn parameters(&self) -> (Vec2, Vec2, Vec2) {
        let c = self.p0.to_vec2();
        let b = (self.p1 - self.p0) * 2.0;
        let a = self.p2.to_vec2() - self.p1.to_vec2() * 2.0 + c;
        (a, b, c)
    }

    /// The quadratic in `t` whose roots are where the curve's coordinate
    /// along `axis` equals `value`.
    ///
    /// When that coordinate is constant the quadratic's leading coefficient
    /// gets the usual [`Quadratic::DEGENERATE_EPSILON`] substitution.
    pub fn axis_quadratic(&self, axis: Axis, value: f64) -> Quadratic {
        let (a, b, c) = self.axis_coeffs(axis);
        Quadratic::new(a, b, c - value)
    }

    fn axis_coeffs(&self, axis: Axis) -> (f64, f64, f64) {
        let (p0, p1, p2) = (axis.coord(self.p0), axis.coord(self.p1), axis.coord(self.p2));
        (p0 - 2.0 * p1 + p2, -2.0 * p0 + 2.0 * p1, p0)
    }

    /// Is the coordinate along `axis` the same for all `t`?
    fn is_constant_along(&self, axis: Axis) -> bool {
        let (a, b, _) = self.axis_coeffs(axis);
        a == 0.0 && b == 0.0
    }

    fn axis_roots(&self, axis: Axis, value: f64, tolerance: f64) -> AxisRoots {
        if self.is_constant_along(axis) {
            return if approx_eq(axis.coord(self.p0), value, tolerance) {
                AxisRoots::Any
            } else {
                AxisRoots::Roots(ArrayVec::new())
            };
        }
        let quad = self.axis_quadratic(axis, value);
        let mut roots = quad.roots();
        if roots.is_empty() {
            // A target at the coordinate's extremum is a double root, and
            // rounding can push the discriminant slightly negative.
            let vertex = quad.vertex();
            if approx_eq(vertex.y, 0.0, tolerance) {
                roots.push(vertex.x);
            }
        }
        AxisRoots::Roots(roots)
    }
}

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let weighted = self.p1.to_vec2() * (mt * 2.0) + self.p2.to_vec2() * t;
        (self.p0.to_vec2() * (mt * mt) + weighted * t).to_point()
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p2
    }
}

impl ParamCurveSolve for QuadBez {
    /// Find the parameters in `[0, 1]` at which the curve passes through `p`.
    ///
    /// Each coordinate gives a quadratic in `t`; a parameter is accepted when
    /// a root of one lies within `tolerance` of a root of the other. When
    /// every control point coincides with `p`, only `t = 0` is reported.
    fn solve_with_tolerance(&self, p: Point, tolerance: f64) -> ArrayVec<f64, 2> {
        let in_range = |t: f64| (-tolerance..=1.0 + tolerance).contains(&t);
        let mut result = ArrayVec::new();
        match (
            self.axis_roots(Axis::Horizontal, p.x, tolerance),
            self.axis_roots(Axis::Vertical, p.y, tolerance),
        ) {
            (AxisRoots::Any, AxisRoots::Any) => result.push(0.0),
            (AxisRoots::Any, AxisRoots::Roots(roots))
            | (AxisRoots::Roots(roots), AxisRoots::Any) => {
                for t in roots.into_iter().filter(|&t| in_range(t)) {
                    push_unique(&mut result, t.clamp(0.0, 1.0), tolerance);
                }
            }
            (AxisRoots::Roots(tx), AxisRoots::Roots(ty)) => {
                for t in tx.into_iter().filter(|&t| in_range(t)) {
                    if let Some(&u) = ty.iter().find(|&&u| approx_eq(t, u, tolerance)) {
                        push_unique(&mut result, (0.5 * (t + u)).clamp(0.0, 1.0), tolerance);
                    }
                }
            }
        }
        result
    }
}

/// The points where a Bézier crosses the vertical line `x = vline_x`.
///
/// Roots outside `[0, 1]` are kept, so the result may include points on
/// the extrapolated parabola beyond the segment's endpoints. When `x` is
/// linear in `t` there is at most one crossing. If the curve
/// lies entirely on the line its endpoints are returned; if it is parallel
/// to the line and off it, the result is empty.
pub fn bez_intersect_vline(bez: &QuadBez, vline_x: f64) -> SmallVec<[Point; 2]> {
    if bez.is_constant_along(Axis::Horizontal) {
        return if bez.p0.x == vline_x {
            endpoints(bez)
        } else {
            SmallVec::new()
        };
    }
    let (a, b, c) = bez.axis_coeffs(Axis::Horizontal);
    solve_quadratic(c - vline_x, b, a)
        .iter()
        .map(|&t| bez.eval(t))
        .collect()
}

/// The points where a Bézier segment crosses a line, in order of `t`.
///
/// Only parameters in `[0, 1]` are considered. Substituting the curve into
/// `y = m x + b` gives a quadratic in `t` that is solved directly, so
/// straight segments are handled without the epsilon substitution. If the
/// segment lies on the line its endpoints are returned.
pub fn bez_intersect_line(bez: &QuadBez, line: &Linear) -> SmallVec<[Point; 2]> {
    let (ax, bx, cx) = bez.axis_coeffs(Axis::Horizontal);
    let (ay, by, cy) = bez.axis_coeffs(Axis::Vertical);
    let (c2, c1, c0) = (ay - line.m * ax, by - line.m * bx, cy - line.m * cx - line.b);
    if c2 == 0.0 && c1 == 0.0 && c0 == 0.0 {
        return endpoints(bez);
    }
    solve_quadratic(c0, c1, c2)
        .iter()
        .filter(|&&t| (0.0..=1.0).contains(&t))
        .map(|&t| bez.eval(t))
        .collect()
}

fn endpoints(bez: &QuadBez) -> SmallVec<[Point; 2]> {
    let mut result = SmallVec::new();
    result.push(bez.start());
    if bez.end() != bez.start() {
        result.push(bez.end());
    }
    result
}
