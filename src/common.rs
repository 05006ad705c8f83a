// Copyright 2026 the simcurve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

use arrayvec::ArrayVec;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("simcurve requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn atan2(self, other: Self) -> Self => atan2;
    fn copysign(self, sign: Self) -> Self => copysign;
    fn hypot(self, other: Self) -> Self => hypot;
    fn powi(self, n: i32) -> Self => pow;
    fn round(self) -> Self => round;
    fn sqrt(self) -> Self => sqrt;
}

/// Find real roots of quadratic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² = 0, in increasing order.
/// A double root is reported once.
///
/// This function tries to be quite numerically robust. If the equation
/// is nearly linear, it will return the root ignoring the quadratic term;
/// the other root might be out of representable range. In the degenerate
/// case where all coefficients are zero, so that all values of x satisfy
/// the equation, a single `0.0` is returned.
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 * c2.recip();
    let sc1 = c1 * c2.recip();
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as linear eqn
        let root = -c0 / c1;
        if root.is_finite() {
            result.push(root);
        } else if c0 == 0.0 && c1 == 0.0 {
            // Degenerate case
            result.push(0.0);
        }
        return result;
    }
    let arg = sc1 * sc1 - 4. * sc0;
    let root1 = if !arg.is_finite() {
        // Likely, calculation of sc1 * sc1 overflowed. Find one root
        // using sc1 x + x² = 0, other root as sc0 / root1.
        -sc1
    } else {
        if arg < 0.0 {
            return result;
        } else if arg == 0.0 {
            result.push(-0.5 * sc1);
            return result;
        }
        // See https://math.stackexchange.com/questions/866331
        -0.5 * (sc1 + arg.sqrt().copysign(sc1))
    };
    let root2 = sc0 / root1;
    if root2.is_finite() && root2 != root1 {
        // Sort just to be friendly and make results deterministic.
        if root2 > root1 {
            result.push(root1);
            result.push(root2);
        } else {
            result.push(root2);
            result.push(root1);
        }
    } else {
        result.push(root1);
    }
    result
}

/// Compare two reals for equality within `tolerance`.
///
/// The tolerance is absolute for values of magnitude up to 1 and relative
/// above that, so that it stays meaningful for large coordinates.
#[inline]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}

/// Push `value` into a sorted root set unless an approximately equal value
/// is already present.
pub(crate) fn push_unique(roots: &mut ArrayVec<f64, 2>, value: f64, tolerance: f64) {
    if roots.iter().any(|&r| approx_eq(r, value, tolerance)) || roots.is_full() {
        return;
    }
    roots.push(value);
    if roots.len() == 2 && roots[0] > roots[1] {
        roots.swap(0, 1);
    }
}

#[cfg(test)]
mod tests {
    use crate::common::*;
    use arrayvec::ArrayVec;

    fn verify<const N: usize>(roots: ArrayVec<f64, N>, expected: &[f64]) {
        assert_eq!(expected.len(), roots.len(), "got {:?} expected {:?}", roots, expected);
        let epsilon = 1e-12;
        for i in 0..expected.len() {
            assert!((roots[i] - expected[i]).abs() < epsilon);
        }
    }

    #[test]
    fn test_solve_quadratic() {
        verify(
            solve_quadratic(-5.0, 0.0, 1.0),
            &[-(5.0f64.sqrt()), 5.0f64.sqrt()],
        );
        verify(solve_quadratic(5.0, 0.0, 1.0), &[]);
        verify(solve_quadratic(5.0, 1.0, 0.0), &[-5.0]);
        verify(solve_quadratic(1.0, 2.0, 1.0), &[-1.0]);
        verify(solve_quadratic(6.0, 5.0, 1.0), &[-3.0, -2.0]);
        verify(solve_quadratic(0.0, 0.0, 0.0), &[0.0]);
    }

    #[test]
    fn test_solve_quadratic_nearly_linear() {
        // 1e-14 x² + x - 2 = 0 has one root near 2 and one far away.
        let roots = solve_quadratic(-2.0, 1.0, 1e-14);
        assert_eq!(roots.len(), 2);
        assert!(roots[0] < -1e13);
        assert!((roots[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-9, 1e-6));
        assert!(!approx_eq(1.0, 1.001, 1e-6));
        assert!(approx_eq(1e9, 1e9 + 1.0, 1e-6));
        assert!(!approx_eq(0.0, 1e-5, 1e-6));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY, 1e-6));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY, 1e-6));
    }

    #[test]
    fn test_push_unique() {
        let mut roots = ArrayVec::new();
        push_unique(&mut roots, 0.75, 1e-6);
        push_unique(&mut roots, 0.75 + 1e-9, 1e-6);
        push_unique(&mut roots, 0.25, 1e-6);
        push_unique(&mut roots, 0.5, 1e-6);
        verify(roots, &[0.25, 0.75]);
    }
}
