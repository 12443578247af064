use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::polygon::convex_hull;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2<f32>,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug)]
struct Disk {
    c: Point2<f64>,
    r: f64,
}

impl Disk {
    fn point(p: Point2<f64>) -> Self {
        Self { c: p, r: 0.0 }
    }

    fn diameter(a: Point2<f64>, b: Point2<f64>) -> Self {
        let c = nalgebra::center(&a, &b);
        Self {
            c,
            r: (a - c).norm(),
        }
    }

    /// Circumcircle of three points; `None` when they are (nearly) collinear.
    fn circumscribed(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Option<Self> {
        let ab = b - a;
        let ac = c - a;
        let d = 2.0 * (ab.x * ac.y - ab.y * ac.x);
        if d.abs() < 1e-12 {
            return None;
        }
        let ab2 = ab.norm_squared();
        let ac2 = ac.norm_squared();
        let ux = (ac.y * ab2 - ab.y * ac2) / d;
        let uy = (ab.x * ac2 - ac.x * ab2) / d;
        let center = Point2::new(a.x + ux, a.y + uy);
        Some(Self {
            c: center,
            r: (a - center).norm(),
        })
    }

    fn contains(&self, p: Point2<f64>) -> bool {
        (p - self.c).norm() <= self.r + 1e-7 * self.r.max(1.0)
    }
}

/// Disk through `a` and `b` with `c` inside; falls back to the widest pair
/// when the three are collinear.
fn disk_on_three(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Disk {
    Disk::circumscribed(a, b, c).unwrap_or_else(|| {
        [Disk::diameter(a, b), Disk::diameter(a, c), Disk::diameter(b, c)]
            .into_iter()
            .fold(Disk::point(a), |best, d| if d.r > best.r { d } else { best })
    })
}

/// Smallest circle enclosing all points.
///
/// Incremental Welzl over the convex hull vertices. The hull is visited in a
/// fixed order, so the result is deterministic for identical input.
/// Returns `None` for an empty input.
pub fn min_enclosing_circle(points: &[Point2<f64>]) -> Option<Circle> {
    let hull = convex_hull(points);
    let first = *hull.first()?;

    let mut disk = Disk::point(first);
    for i in 1..hull.len() {
        if disk.contains(hull[i]) {
            continue;
        }
        disk = Disk::point(hull[i]);
        for j in 0..i {
            if disk.contains(hull[j]) {
                continue;
            }
            disk = Disk::diameter(hull[i], hull[j]);
            for k in 0..j {
                if !disk.contains(hull[k]) {
                    disk = disk_on_three(hull[i], hull[j], hull[k]);
                }
            }
        }
    }

    Some(Circle {
        center: Point2::new(disk.c.x as f32, disk.c.y as f32),
        radius: disk.r as f32,
    })
}
