//! Synthetic part images for unit tests: white part on a black background,
//! black openings inside it.

use image::{GrayImage, Luma};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

pub(crate) const PART: Luma<u8> = Luma([255]);
pub(crate) const BACKGROUND: Luma<u8> = Luma([0]);

/// `width` x `height` image with an axis-aligned part at `(x, y)`.
pub(crate) fn part_image(width: u32, height: u32, x: i32, y: i32, pw: u32, ph: u32) -> GrayImage {
    let mut img = GrayImage::from_pixel(width, height, BACKGROUND);
    draw_filled_rect_mut(&mut img, Rect::at(x, y).of_size(pw, ph), PART);
    img
}

pub(crate) fn hole_rect(img: &mut GrayImage, x: i32, y: i32, w: u32, h: u32) {
    draw_filled_rect_mut(img, Rect::at(x, y).of_size(w, h), BACKGROUND);
}

pub(crate) fn hole_circle(img: &mut GrayImage, cx: i32, cy: i32, r: i32) {
    draw_filled_circle_mut(img, (cx, cy), r, BACKGROUND);
}

/// Filled rectangle of size `w` x `h` whose `w` side points along
/// `angle_deg` (image coordinates, y down).
pub(crate) fn rotated_rect(
    img: &mut GrayImage,
    center: (f64, f64),
    w: f64,
    h: f64,
    angle_deg: f64,
    color: Luma<u8>,
) {
    let (s, c) = angle_deg.to_radians().sin_cos();
    let corners: Vec<Point<i32>> = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)]
        .iter()
        .map(|&(a, b)| {
            let x = center.0 + a * w * c - b * h * s;
            let y = center.1 + a * w * s + b * h * c;
            Point::new(x.round() as i32, y.round() as i32)
        })
        .collect();
    draw_polygon_mut(img, &corners, color);
}
