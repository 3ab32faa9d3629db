// Shape builders shared by the integration tests.

#![allow(dead_code)]

use std::f64::consts::TAU;

/// Axis-aligned rectangle with its min corner at the origin.
pub fn rectangle(width: f64, height: f64) -> Vec<[f64; 2]> {
    vec![[0.0, 0.0], [width, 0.0], [width, height], [0.0, height]]
}

pub fn translated(ring: Vec<[f64; 2]>, dx: f64, dy: f64) -> Vec<[f64; 2]> {
    ring.into_iter().map(|[x, y]| [x + dx, y + dy]).collect()
}

/// Regular `n`-gon inscribed in a circle of `radius` about the origin.
pub fn circle(radius: f64, n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            [radius * angle.cos(), radius * angle.sin()]
        })
        .collect()
}

pub fn hexagon(radius: f64) -> Vec<[f64; 2]> {
    circle(radius, 6)
}

/// Concentric shell and hole circles.
pub fn donut(inner: f64, outer: f64, n: usize) -> (Vec<[f64; 2]>, Vec<Vec<[f64; 2]>>) {
    (circle(outer, n), vec![circle(inner, n)])
}

/// Concave star alternating between `outer` and `inner` radii.
pub fn star(points: usize, outer: f64, inner: f64) -> Vec<[f64; 2]> {
    (0..2 * points)
        .map(|i| {
            let angle = TAU * i as f64 / (2 * points) as f64;
            let r = if i % 2 == 0 { outer } else { inner };
            [r * angle.cos(), r * angle.sin()]
        })
        .collect()
}

/// Wraps every vertex in its own row, as contour extractors emit them.
pub fn wrapped(ring: &[[f64; 2]]) -> Vec<Vec<[f64; 2]>> {
    ring.iter().map(|&p| vec![p]).collect()
}
