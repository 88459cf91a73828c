//! Two-dimensional geometry primitives: the point type, distance, the
//! parabola/parabola breakpoint under a vertical sweep line, and the
//! circumcircle of three sites.

use crate::error::{Result, VoronoiError};
use cgmath::EuclideanSpace;

/// A site, Voronoi vertex, or segment endpoint.
///
/// Immutable once created; all of the algorithm's mutable state lives in the
/// beachline, the event queues, and the segment arena, never in a `Point`.
pub type Point = cgmath::Point2<f64>;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    EuclideanSpace::distance(a, b)
}

/// The lower intersection of the two parabolas with foci `p0` and `p1` and a
/// shared directrix at `x = l`.
///
/// This is the breakpoint between two adjacent beachline arcs at the current
/// sweep position `l`. The three branches below mirror the degenerate cases
/// that the quadratic form can't handle directly: equal-x foci, and either
/// focus sitting exactly on the sweep line.
///
/// Fails with [`VoronoiError::NumericDegeneracy`] rather than silently
/// returning NaN when the quadratic's discriminant goes negative or a focus
/// coincides with the sweep line it is being intersected against — both
/// symptomatic of duplicated or exactly cocircular input sites.
pub fn intersection(p0: Point, p1: Point, l: f64) -> Result<Point> {
    let mut p = p0;
    let py = if p0.x == p1.x {
        (p0.y + p1.y) / 2.0
    } else if p1.x == l {
        p1.y
    } else if p0.x == l {
        p = p1;
        p0.y
    } else {
        let z0 = 2.0 * (p0.x - l);
        let z1 = 2.0 * (p1.x - l);

        let a = 1.0 / z0 - 1.0 / z1;
        let b = -2.0 * (p0.y / z0 - p1.y / z1);
        let c = (p0.y.powi(2) + p0.x.powi(2) - l.powi(2)) / z0
            - (p1.y.powi(2) + p1.x.powi(2) - l.powi(2)) / z1;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Err(VoronoiError::NumericDegeneracy(format!(
                "negative discriminant breaking ({}, {}) against ({}, {}) at x = {l}",
                p0.x, p0.y, p1.x, p1.y
            )));
        }
        (-b - discriminant.sqrt()) / (2.0 * a)
    };
    let denom = 2.0 * p.x - 2.0 * l;
    if denom == 0.0 {
        return Err(VoronoiError::NumericDegeneracy(format!(
            "focus ({}, {}) coincides with the sweep line at x = {l}",
            p.x, p.y
        )));
    }
    let px = (p.x.powi(2) + (p.y - py).powi(2) - l.powi(2)) / denom;
    Ok(Point::new(px, py))
}

/// The circumcircle of an ordered triple of sites, as `(x, center)` where `x`
/// is the rightmost x-coordinate on the circle (the event key a circle event
/// fires at).
///
/// Returns `None` when `(a, b, c)` is a left turn (the arcs can never
/// collide as the sweep progresses) or when the three points are collinear
/// (the O'Rourke construction's `G` degenerates to zero).
pub fn circumcircle(a: Point, b: Point, c: Point) -> Option<(f64, Point)> {
    if (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y) > 0.0 {
        return None;
    }

    // Joseph O'Rourke, Computational Geometry in C (2nd ed.), p.189.
    let da = b.x - a.x;
    let db = b.y - a.y;
    let dc = c.x - a.x;
    let dd = c.y - a.y;
    let e = da * (a.x + b.x) + db * (a.y + b.y);
    let f = dc * (a.x + c.x) + dd * (a.y + c.y);
    let g = 2.0 * (da * (c.y - b.y) - db * (c.x - b.x));

    if g == 0.0 {
        return None;
    }

    let ox = (dd * e - db * f) / g;
    let oy = (da * f - dc * e) / g;
    let center = Point::new(ox, oy);
    let x = ox + distance(a, center);
    Some((x, center))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_shared_x_is_midpoint() {
        let p = intersection(Point::new(10.0, 0.0), Point::new(10.0, 20.0), 5.0).unwrap();
        assert_eq!(p.y, 10.0);
    }

    #[test]
    fn intersection_on_directrix() {
        let p = intersection(Point::new(0.0, 0.0), Point::new(10.0, 5.0), 10.0).unwrap();
        assert_eq!(p.y, 5.0);
    }

    #[test]
    fn intersection_rejects_focus_on_the_sweep_line_of_a_degenerate_pair() {
        let result = intersection(Point::new(10.0, 0.0), Point::new(10.0, 0.0), 10.0);
        assert!(result.is_err());
    }

    #[test]
    fn circumcircle_rejects_left_turn() {
        let result = circumcircle(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        );
        assert!(result.is_none());
    }

    #[test]
    fn circumcircle_rejects_collinear() {
        let result = circumcircle(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
        );
        assert!(result.is_none());
    }

    #[test]
    fn circumcircle_of_right_triangle() {
        let (_x, center) = circumcircle(
            Point::new(100.0, 100.0),
            Point::new(250.0, 400.0),
            Point::new(400.0, 100.0),
        )
        .expect("right-turn, non-collinear triple must yield a circumcircle");
        assert!((center.x - 250.0).abs() < 1e-9);
        assert!((center.y - 193.75).abs() < 1e-9);
    }
}
