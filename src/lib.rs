// Copyright 2026 the simcurve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Analytic 2D curves and their intersections.
//!
//! The simcurve library holds the curve types an agent simulation uses to
//! model supply, demand and trajectories: straight lines ([`Linear`]),
//! parabolas ([`Quadratic`]) and quadratic Bézier segments ([`QuadBez`]).
//! Each can be evaluated, and most pairs can be intersected in closed form.
//! Two Béziers are intersected numerically; that result is typed as
//! [`ApproxIntersections`] so it cannot be mistaken for exact roots.
//!
//! All of these are small `Copy` values. Nothing here allocates except the
//! numeric Bézier sampler.
//!
//! # Examples
//!
//! Where supply meets demand:
//! ```
//! use simcurve::{lines_intersect, LineIntersection, Linear, Point};
//!
//! let supply = Linear::new(1.0, 0.0);
//! let demand = Linear::new(-1.0, 10.0);
//! assert_eq!(
//!     lines_intersect(&supply, &demand),
//!     LineIntersection::Point(Point::new(5.0, 5.0))
//! );
//! ```
//!
//! Any two curves, through [`CurveSeg`]:
//! ```
//! use simcurve::{CurveIntersections, CurveSeg, Linear, Quadratic};
//!
//! let parabola = CurveSeg::from(Quadratic::new(1.0, 0.0, 1.0));
//! let axis = CurveSeg::from(Linear::new(0.0, 0.0));
//! assert_eq!(parabola.intersect(&axis), CurveIntersections::NoRealSolution);
//! ```
//!
//! # Feature Flags
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the curve types
//!   and [`SampleOptions`].
//! - `schemars`: Add best-effort support for using simcurve types in JSON schemas
//!   using [schemars][].
//! - `log`: Emit [log][] records for degenerate inputs and numeric sampling.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! Note that simcurve does require that an allocator is available (i.e. it uses [alloc]).
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars
//! [log]: https://docs.rs/log

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    single_use_lifetimes,
    clippy::cast_possible_truncation,
    clippy::missing_assert_message,
    clippy::missing_errors_doc,
    clippy::exhaustive_enums,
    clippy::match_same_arms,
    clippy::use_self,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("simcurve requires either the `std` or `libm` feature");

extern crate alloc;

mod axis;
pub mod common;
mod curve_seg;
mod linear;
mod param_curve;
mod point;
mod quadbez;
mod quadratic;
mod sampling;
mod vec2;

pub use crate::axis::*;
pub use crate::curve_seg::*;
pub use crate::linear::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::quadratic::*;
pub use crate::sampling::*;
pub use crate::vec2::*;
