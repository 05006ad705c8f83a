// Copyright 2026 the simcurve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A curve of any supported kind, and intersection between any two of them.

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::quadratic::quad_quad_intersect;
use crate::{
    bez_intersect_line, bez_intersect_with, lines_intersect, quad_line_intersect,
    ApproxIntersections, LineIntersection, Linear, ParamCurve, ParamCurveSolve, Point, QuadBez,
    Quadratic, SampleOptions,
};

/// One of the curve types.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveSeg {
    /// A line.
    Linear(Linear),
    /// A parabola.
    Quadratic(Quadratic),
    /// A quadratic Bézier segment.
    QuadBez(QuadBez),
}

/// The outcome of intersecting two curves.
#[derive(Clone, Debug, PartialEq)]
pub enum CurveIntersections {
    /// Exact intersection points. May be empty, for example when a line
    /// misses a Bézier segment.
    Points(SmallVec<[Point; 2]>),
    /// The equation for the intersections has no real solution.
    NoRealSolution,
    /// The curves are translates of each other and never meet.
    Parallel,
    /// The curves are identical.
    Coincident,
    /// Sampled estimates; see [`ApproxIntersections`].
    Approximate(ApproxIntersections),
    /// No method is implemented for this pair of curve kinds.
    Unsupported,
}

impl CurveIntersections {
    /// The exact intersection points, if that is what was computed.
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Self::Points(points) => Some(points.as_slice()),
            _ => None,
        }
    }

    /// Is there at least one known or estimated intersection?
    ///
    /// Coincident curves count as intersecting.
    pub fn is_intersecting(&self) -> bool {
        match self {
            Self::Points(points) => !points.is_empty(),
            Self::Coincident => true,
            Self::Approximate(approx) => !approx.is_empty(),
            Self::NoRealSolution | Self::Parallel | Self::Unsupported => false,
        }
    }
}

impl From<LineIntersection> for CurveIntersections {
    fn from(value: LineIntersection) -> Self {
        match value {
            LineIntersection::Point(p) => {
                let mut points = SmallVec::new();
                points.push(p);
                Self::Points(points)
            }
            LineIntersection::Parallel => Self::Parallel,
            LineIntersection::Coincident => Self::Coincident,
        }
    }
}

impl CurveSeg {
    /// Intersect with another curve, sampling with the default
    /// [`SampleOptions`] when both are Béziers.
    pub fn intersect(&self, other: &CurveSeg) -> CurveIntersections {
        self.intersect_with(other, &SampleOptions::default())
    }

    /// Intersect with another curve.
    ///
    /// | pair                   | method                                    |
    /// |------------------------|-------------------------------------------|
    /// | line, line             | [`lines_intersect`]                       |
    /// | line, parabola         | [`quad_line_intersect`]                   |
    /// | parabola, parabola     | roots of the difference                   |
    /// | Bézier, line           | [`bez_intersect_line`]                    |
    /// | Bézier, Bézier         | [`bez_intersect_with`], approximate       |
    /// | Bézier, parabola       | unsupported                               |
    ///
    /// The order of the two curves does not matter.
    pub fn intersect_with(&self, other: &CurveSeg, options: &SampleOptions) -> CurveIntersections {
        match (self, other) {
            (Self::Linear(l1), Self::Linear(l2)) => lines_intersect(l1, l2).into(),
            (Self::Linear(l), Self::Quadratic(q)) | (Self::Quadratic(q), Self::Linear(l)) => {
                quad_line_intersect(q, l)
                    .map_or(CurveIntersections::NoRealSolution, CurveIntersections::Points)
            }
            (Self::Quadratic(q1), Self::Quadratic(q2)) => {
                if q1 == q2 {
                    CurveIntersections::Coincident
                } else if q1.a() == q2.a() && q1.b() == q2.b() {
                    CurveIntersections::Parallel
                } else {
                    quad_quad_intersect(q1, q2)
                        .map_or(CurveIntersections::NoRealSolution, CurveIntersections::Points)
                }
            }
            (Self::QuadBez(bez), Self::Linear(l)) | (Self::Linear(l), Self::QuadBez(bez)) => {
                CurveIntersections::Points(bez_intersect_line(bez, l))
            }
            (Self::QuadBez(b1), Self::QuadBez(b2)) => {
                CurveIntersections::Approximate(bez_intersect_with(b1, b2, options))
            }
            (Self::QuadBez(_), Self::Quadratic(_)) | (Self::Quadratic(_), Self::QuadBez(_)) => {
                CurveIntersections::Unsupported
            }
        }
    }
}

impl ParamCurve for CurveSeg {
    fn eval(&self, t: f64) -> Point {
        match self {
            Self::Linear(l) => l.eval(t),
            Self::Quadratic(q) => q.eval(t),
            Self::QuadBez(bez) => bez.eval(t),
        }
    }

    fn start(&self) -> Point {
        match self {
            Self::Linear(l) => l.start(),
            Self::Quadratic(q) => q.start(),
            Self::QuadBez(bez) => bez.start(),
        }
    }

    fn end(&self) -> Point {
        match self {
            Self::Linear(l) => l.end(),
            Self::Quadratic(q) => q.end(),
            Self::QuadBez(bez) => bez.end(),
        }
    }
}

impl ParamCurveSolve for CurveSeg {
    fn solve_with_tolerance(&self, p: Point, tolerance: f64) -> ArrayVec<f64, 2> {
        match self {
            Self::Linear(l) => l.solve_with_tolerance(p, tolerance),
            Self::Quadratic(q) => q.solve_with_tolerance(p, tolerance),
            Self::QuadBez(bez) => bez.solve_with_tolerance(p, tolerance),
        }
    }
}

impl From<Linear> for CurveSeg {
    fn from(line: Linear) -> CurveSeg {
        CurveSeg::Linear(line)
    }
}

impl From<Quadratic> for CurveSeg {
    fn from(quad: Quadratic) -> CurveSeg {
        CurveSeg::Quadratic(quad)
    }
}

impl From<QuadBez> for CurveSeg {
    fn from(bez: QuadBez) -> CurveSeg {
        CurveSeg::QuadBez(bez)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        CurveIntersections, CurveSeg, Linear, ParamCurve, ParamCurveSolve, Point, QuadBez,
        Quadratic, SampleOptions,
    };

    fn points(result: &CurveIntersections) -> &[Point] {
        result
            .points()
            .unwrap_or_else(|| panic!("expected points, got {result:?}"))
    }

    #[test]
    fn line_line() {
        let supply: CurveSeg = Linear::new(1.0, 0.0).into();
        let demand: CurveSeg = Linear::new(-1.0, 10.0).into();
        assert_eq!(points(&supply.intersect(&demand)), &[Point::new(5.0, 5.0)]);
        assert_eq!(supply.intersect(&supply), CurveIntersections::Coincident);
        let shifted: CurveSeg = Linear::new(1.0, 3.0).into();
        assert_eq!(supply.intersect(&shifted), CurveIntersections::Parallel);
        assert!(!supply.intersect(&shifted).is_intersecting());
    }

    #[test]
    fn line_quadratic_either_order() {
        let line: CurveSeg = Linear::new(1.0, 2.0).into();
        let quad: CurveSeg = Quadratic::new(1.0, 0.0, 0.0).into();
        let forward = line.intersect(&quad);
        assert_eq!(forward, quad.intersect(&line));
        assert_eq!(points(&forward).len(), 2);
        let above: CurveSeg = Quadratic::new(1.0, 0.0, 5.0).into();
        let flat: CurveSeg = Linear::new(0.0, 0.0).into();
        assert_eq!(above.intersect(&flat), CurveIntersections::NoRealSolution);
    }

    #[test]
    fn quadratic_quadratic() {
        let q1: CurveSeg = Quadratic::new(1.0, 0.0, 0.0).into();
        let q2: CurveSeg = Quadratic::new(-1.0, 0.0, 2.0).into();
        assert_eq!(points(&q1.intersect(&q2)).len(), 2);
        assert_eq!(q1.intersect(&q1), CurveIntersections::Coincident);
        let q3: CurveSeg = Quadratic::new(1.0, 0.0, 1.0).into();
        assert_eq!(q1.intersect(&q3), CurveIntersections::Parallel);
        let q4: CurveSeg = Quadratic::new(2.0, 0.0, 1.0).into();
        assert_eq!(q1.intersect(&q4), CurveIntersections::NoRealSolution);
    }

    #[test]
    fn bez_line() {
        let bez: CurveSeg = QuadBez::new((-1.0, 1.0), (0.0, -1.0), (1.0, 1.0)).into();
        let line: CurveSeg = Linear::new(0.0, 0.25).into();
        let result = bez.intersect(&line);
        assert_eq!(result, line.intersect(&bez));
        assert_eq!(points(&result).len(), 2);
        let miss: CurveSeg = Linear::new(0.0, 5.0).into();
        let result = bez.intersect(&miss);
        assert!(points(&result).is_empty());
        assert!(!result.is_intersecting());
    }

    #[test]
    fn bez_bez_is_approximate() {
        let b1: CurveSeg = QuadBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0)).into();
        let b2: CurveSeg = QuadBez::new((1.0, -1.0), (1.0, 0.0), (1.0, 1.0)).into();
        let options = SampleOptions::default().with_resolution(20);
        match b1.intersect_with(&b2, &options) {
            CurveIntersections::Approximate(approx) => {
                assert_eq!(approx.len(), 1);
                assert_eq!(approx.options().resolution, 20);
            }
            other => panic!("expected approximate result, got {other:?}"),
        }
        assert!(b1.intersect(&b2).is_intersecting());
    }

    #[test]
    fn bez_quadratic_unsupported() {
        let bez: CurveSeg = QuadBez::new((0.0, 0.0), (1.0, 1.0), (2.0, 0.0)).into();
        let quad: CurveSeg = Quadratic::new(1.0, 0.0, 0.0).into();
        assert_eq!(bez.intersect(&quad), CurveIntersections::Unsupported);
        assert_eq!(quad.intersect(&bez), CurveIntersections::Unsupported);
    }

    #[test]
    fn delegation() {
        let bez = QuadBez::new((0.0, 0.0), (1.0, 1.0), (2.0, 0.0));
        let seg = CurveSeg::from(bez);
        assert_eq!(seg.eval(0.5), bez.eval(0.5));
        assert_eq!(seg.start(), Point::new(0.0, 0.0));
        assert_eq!(seg.end(), Point::new(2.0, 0.0));
        assert_eq!(seg.solve(Point::new(1.0, 0.5)), bez.solve(Point::new(1.0, 0.5)));
        let line = CurveSeg::from(Linear::new(2.0, 1.0));
        assert_eq!(line.end(), Point::new(1.0, 3.0));
        assert_eq!(line.solve(Point::new(1.0, 3.0)).as_slice(), &[1.0]);
    }
}
