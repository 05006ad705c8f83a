// Copyright 2026 the simcurve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of curve intersection.

#![cfg(nightly)]
#![feature(test)]
extern crate test;
use test::{black_box, Bencher};

use simcurve::*;

#[bench]
fn bench_lines_intersect(b: &mut Bencher) {
    let l1 = Linear::new(1.0, 0.0);
    let l2 = Linear::new(-1.0, 10.0);
    b.iter(|| lines_intersect(black_box(&l1), black_box(&l2)))
}

#[bench]
fn bench_quad_line_intersect(b: &mut Bencher) {
    let q = Quadratic::new(1.0, -2.0, 0.5);
    let l = Linear::new(0.5, 1.0);
    b.iter(|| quad_line_intersect(black_box(&q), black_box(&l)))
}

#[bench]
fn bench_quadbez_solve(b: &mut Bencher) {
    let bez = QuadBez::new((0.0, 0.0), (1.0, 2.0), (3.0, 1.0));
    let p = bez.eval(0.3);
    b.iter(|| black_box(&bez).solve(black_box(p)))
}

// Quadratic in the resolution, so this one is slow at the default.
#[bench]
fn bench_bez_intersect(b: &mut Bencher) {
    let b1 = QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0));
    let b2 = QuadBez::new((0.0, 1.0), (1.0, -1.0), (2.0, 1.0));
    b.iter(|| bez_intersect(black_box(&b1), black_box(&b2)))
}

#[bench]
fn bench_bez_intersect_coarse(b: &mut Bencher) {
    let b1 = QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0));
    let b2 = QuadBez::new((0.0, 1.0), (1.0, -1.0), (2.0, 1.0));
    let options = SampleOptions::default().with_resolution(20);
    b.iter(|| bez_intersect_with(black_box(&b1), black_box(&b2), &options))
}
