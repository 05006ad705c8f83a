// Copyright 2026 the simcurve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits shared by every curve type.
//!
//! [`Linear`](crate::Linear) and [`Quadratic`](crate::Quadratic) are graphs
//! of functions `y = f(x)`; they are parametrized by `x` itself, so
//! `eval(t)` is the point `(t, f(t))`. [`QuadBez`](crate::QuadBez) is
//! parametrized by the Bézier parameter, with `t` in `[0, 1]` covering the
//! segment between its endpoints.

use arrayvec::ArrayVec;

use crate::Point;

/// Default tolerance used when matching a point against a curve.
pub const SOLVE_TOLERANCE: f64 = 1e-6;

/// A curve parametrized by a scalar.
pub trait ParamCurve {
    /// Evaluate the curve at parameter `t`.
    fn eval(&self, t: f64) -> Point;

    /// The point at `t = 0`.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The point at `t = 1`.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// A curve defined by a polynomial whose real zeros can be found in closed form.
pub trait CurveRoots {
    /// The real roots, in increasing order, without duplicates.
    ///
    /// Complex roots are omitted; an empty result means there is no real root.
    fn roots(&self) -> ArrayVec<f64, 2>;
}

/// A curve that can find the parameters at which it passes through a point.
pub trait ParamCurveSolve: ParamCurve {
    /// Parameters `t` for which `eval(t)` is within `tolerance` of `p`.
    ///
    /// Returns an empty set when the point is not on the curve.
    fn solve_with_tolerance(&self, p: Point, tolerance: f64) -> ArrayVec<f64, 2>;

    /// Parameters `t` for which `eval(t)` is `p`, within [`SOLVE_TOLERANCE`].
    fn solve(&self, p: Point) -> ArrayVec<f64, 2> {
        self.solve_with_tolerance(p, SOLVE_TOLERANCE)
    }
}
