//! Closed point sequences: area, perimeter and convex hull.

use nalgebra::Point2;

/// Signed shoelace area of a closed polygon.
///
/// The sign follows the vertex order in image coordinates (y down): a
/// sequence that turns clockwise on screen yields a positive value. Fewer
/// than three points enclose nothing and return `0.0`.
pub fn polygon_signed_area(points: &[Point2<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// Enclosed area of a closed polygon, independent of orientation.
pub fn polygon_area(points: &[Point2<f64>]) -> f64 {
    polygon_signed_area(points).abs()
}

/// Length of a polyline; `closed` adds the segment from the last point back
/// to the first.
pub fn arc_length(points: &[Point2<f64>], closed: bool) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let mut len: f64 = points.windows(2).map(|w| (w[1] - w[0]).norm()).sum();
    if closed {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            len += (*first - *last).norm();
        }
    }
    len
}

#[inline]
fn cross(o: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Convex hull via Andrew's monotone chain.
///
/// Collinear points are dropped and duplicates collapse, so a hull of
/// identical points has one vertex and a hull of collinear points has two.
/// Vertices are returned in counter-clockwise order (standard axes).
pub fn convex_hull(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let mut pts: Vec<Point2<f64>> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<Point2<f64>> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point2<f64>> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // Each chain ends where the other begins.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
