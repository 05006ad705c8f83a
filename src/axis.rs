// Copyright 2026 the simcurve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Point;

/// A coordinate axis of the plane.
///
/// Curves in `x` and `y` are solved one coordinate at a time; this names
/// which one.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// The coordinate of `p` along this axis (`x` for [`Self::Horizontal`]).
    #[inline]
    pub const fn coord(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }
}
