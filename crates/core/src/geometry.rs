//! Emblem geometry: anchor and decoration points for one half of the logo.
//!
//! ```text
//!   c        |- a -|- a -|
//!  - -  -------------
//!  | _  \___     ___/       slope: 2
//!  b        |   |           a = size / (1 + sqrt(5))
//!  |         \  |           b = a / 0.8
//!  -          + |           c = b / 2.5
//!              \|
//! ```
//!
//! The lower half is not a reflection of the upper one: it is re-derived from
//! the same formulas with `a`, `b` and `c` negated.

use std::f64::consts::FRAC_PI_2;

use logo_svg::Point;

/// Ratio of `a` to `b`.
const ASPECT: f64 = 0.8;
/// Number of `c` steps in `b`.
const SUBDIVISION: f64 = 2.5;

/// The scalar lengths every point formula is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub center: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Dimensions {
    /// Lengths of the upper half for a canvas of edge `size`.
    pub fn new(size: f64) -> Self {
        let a = size / (1.0 + 5f64.sqrt());
        let b = a / ASPECT;
        let c = b / SUBDIVISION;
        Self {
            center: size / 2.0,
            a,
            b,
            c,
        }
    }

    pub fn for_half(size: f64, mirror: bool) -> Self {
        let dims = Self::new(size);
        if mirror { dims.mirrored() } else { dims }
    }

    /// Negate the lengths, keeping the center.
    pub fn mirrored(self) -> Self {
        Self {
            center: self.center,
            a: -self.a,
            b: -self.b,
            c: -self.c,
        }
    }

    /// Distance of a decoration centre from its anchor point. Signed, so it
    /// flips with the mirrored lengths.
    pub fn decoration_offset(&self) -> f64 {
        self.c / 2.0
    }

    /// The eight anchor points outlining this half, in drawing order.
    pub fn anchors(&self) -> [Point; 8] {
        let Self { center, a, b, c } = *self;
        [
            Point::new(center - a, center - b),
            Point::new(center + a, center - b),
            Point::new(center + a - 0.5 * c, center - b + c),
            Point::new(center + a - 1.5 * c, center - b + c),
            Point::new(center + a - 1.5 * c, center + c),
            Point::new(center - a + 1.5 * c, center - c),
            Point::new(center - a + 1.5 * c, center - b + c),
            Point::new(center - a + 0.5 * c, center - b + c),
        ]
    }

    /// Centres of the decoration circles, each pushed off an anchor point
    /// into the interior of the outline.
    pub fn decorations(&self) -> [Point; 6] {
        let [p1, p2, p3, _, p5, p6, _, p8] = self.anchors();
        let d = self.decoration_offset();
        let half_slope = 0.5f64.atan();
        let slope = 2f64.atan();
        let diagonal = 1f64.atan();
        [
            offset(p1, d, half_slope),
            offset(p2, d, FRAC_PI_2 + slope),
            offset(p3, d, -FRAC_PI_2 - diagonal),
            offset(p5, d, -FRAC_PI_2 - half_slope),
            offset(p6, d, -diagonal),
            offset(p8, d, -FRAC_PI_2 + diagonal),
        ]
    }
}

fn offset(p: Point, d: f64, angle: f64) -> Point {
    Point::new(p.x + d * angle.cos(), p.y + d * angle.sin())
}

/// Anchor points of the upper half, or of the lower half when `mirror` is set.
pub fn compute_points(size: f64, mirror: bool) -> [Point; 8] {
    Dimensions::for_half(size, mirror).anchors()
}

/// Decoration centres of the upper half, or of the lower half when `mirror`
/// is set.
pub fn compute_decorations(size: f64, mirror: bool) -> [Point; 6] {
    Dimensions::for_half(size, mirror).decorations()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-2;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn assert_point(p: Point, x: f64, y: f64) {
        assert!(close(p.x, x) && close(p.y, y), "expected ({x}, {y}), got {p:?}");
    }

    #[test]
    fn lengths_for_500() {
        let dims = Dimensions::new(500.0);
        assert!(close(dims.center, 250.0));
        assert!(close(dims.a, 154.51));
        assert!(close(dims.b, 193.14));
        assert!(close(dims.c, 77.25));
    }

    #[test]
    fn anchors_for_500() {
        let pts = compute_points(500.0, false);
        assert_point(pts[0], 95.49, 56.86);
        assert_point(pts[1], 404.51, 56.86);
        assert_point(pts[2], 365.88, 134.12);
        assert_point(pts[3], 288.63, 134.12);
        assert_point(pts[4], 288.63, 327.25);
        assert_point(pts[5], 211.37, 172.75);
        assert_point(pts[6], 211.37, 134.12);
        assert_point(pts[7], 134.12, 134.12);
    }

    #[test]
    fn mirrored_anchors_are_point_reflections() {
        for size in [1.0, 37.0, 500.0, 1024.0] {
            let upper = compute_points(size, false);
            let lower = compute_points(size, true);
            for (u, l) in upper.iter().zip(lower.iter()) {
                let r = u.reflect_through(size / 2.0);
                assert!((r.x - l.x).abs() < 1e-9 && (r.y - l.y).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn mirrored_decorations_are_point_reflections() {
        let upper = compute_decorations(500.0, false);
        let lower = compute_decorations(500.0, true);
        for (u, l) in upper.iter().zip(lower.iter()) {
            let r = u.reflect_through(250.0);
            assert!((r.x - l.x).abs() < 1e-9 && (r.y - l.y).abs() < 1e-9);
        }
    }

    #[test]
    fn decorations_for_500() {
        let deco = compute_decorations(500.0, false);
        // P1 pushed along atan(1/2)
        assert_point(deco[0], 130.04, 74.14);
        // P2 pushed along pi/2 + atan(2), the horizontal mirror of the above
        assert_point(deco[1], 369.96, 74.14);
        let d = Dimensions::new(500.0).decoration_offset();
        let p5 = compute_points(500.0, false)[4];
        assert!(close((deco[3].x - p5.x).hypot(deco[3].y - p5.y), d));
    }

    #[test]
    fn pure_and_deterministic() {
        let first = compute_points(733.0, true);
        let second = compute_points(733.0, true);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
        assert_eq!(compute_decorations(733.0, false), compute_decorations(733.0, false));
    }

    #[test]
    fn zero_size_collapses_to_center() {
        for mirror in [false, true] {
            for p in compute_points(0.0, mirror) {
                assert_eq!(p.x, 0.0);
                assert_eq!(p.y, 0.0);
            }
            for p in compute_decorations(0.0, mirror) {
                assert_eq!(p.x, 0.0);
                assert_eq!(p.y, 0.0);
            }
        }
    }
}
