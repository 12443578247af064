#![allow(dead_code)]

use image::{GrayImage, Luma};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

pub const PART: Luma<u8> = Luma([255]);
pub const BACKGROUND: Luma<u8> = Luma([0]);

pub fn blank(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, BACKGROUND)
}

pub fn fill_rect(img: &mut GrayImage, x: i32, y: i32, w: u32, h: u32, color: Luma<u8>) {
    draw_filled_rect_mut(img, Rect::at(x, y).of_size(w, h), color);
}

pub fn fill_circle(img: &mut GrayImage, cx: i32, cy: i32, r: i32, color: Luma<u8>) {
    draw_filled_circle_mut(img, (cx, cy), r, color);
}

/// Filled `w` x `h` rectangle with its `w` side along `angle_deg`.
pub fn fill_rotated_rect(
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

/// 400 x 300 part with two round holes and a horizontal slot.
pub fn sample_part() -> GrayImage {
    let mut img = blank(400, 300);
    fill_rect(&mut img, 40, 40, 320, 220, PART);
    fill_circle(&mut img, 100, 100, 20, BACKGROUND);
    fill_circle(&mut img, 300, 100, 20, BACKGROUND);
    fill_rect(&mut img, 120, 180, 160, 36, BACKGROUND);
    img
}
