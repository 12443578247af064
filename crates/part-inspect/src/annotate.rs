//! Drawing detected features onto the RGB result canvas.

use image::buffer::ConvertBuffer;
use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_line_segment_mut};
use nalgebra::Point2;
use part_inspect_core::RotatedRect;

use crate::results::CircleResult;
use crate::topology::Contour;

pub const CONTOUR_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const OUTER_BOX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const CIRCLE_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
pub const SLOT_COLOR: Rgb<u8> = Rgb([255, 255, 0]);

// Offsets stamped for every segment; gives a two pixel wide stroke.
const BRUSH: [(f32, f32); 3] = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];

/// Fresh three-channel copy of the source image.
pub fn canvas_from_gray(gray: &GrayImage) -> RgbImage {
    gray.convert()
}

fn stroke(canvas: &mut RgbImage, a: Point2<f32>, b: Point2<f32>, color: Rgb<u8>) {
    for (dx, dy) in BRUSH {
        draw_line_segment_mut(canvas, (a.x + dx, a.y + dy), (b.x + dx, b.y + dy), color);
    }
}

fn closed_polyline(canvas: &mut RgbImage, points: &[Point2<f32>], color: Rgb<u8>) {
    match points {
        [] => {}
        [p] => stroke(canvas, *p, *p, color),
        _ => {
            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                stroke(canvas, a, b, color);
            }
        }
    }
}

pub fn draw_contour(canvas: &mut RgbImage, contour: &Contour, color: Rgb<u8>) {
    let pts: Vec<Point2<f32>> = contour
        .points
        .iter()
        .map(|p| Point2::new(p.x as f32, p.y as f32))
        .collect();
    closed_polyline(canvas, &pts, color);
}

pub fn draw_rotated_rect(canvas: &mut RgbImage, rect: &RotatedRect, color: Rgb<u8>) {
    closed_polyline(canvas, &rect.corners(), color);
}

pub fn draw_circle(canvas: &mut RgbImage, circle: &CircleResult, color: Rgb<u8>) {
    let center = (
        circle.center.x.round() as i32,
        circle.center.y.round() as i32,
    );
    let r = circle.radius as i32;
    draw_hollow_circle_mut(canvas, center, r, color);
    draw_hollow_circle_mut(canvas, center, r + 1, color);
}
