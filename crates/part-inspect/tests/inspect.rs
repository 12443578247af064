mod common;

use approx::assert_abs_diff_eq;
use common::*;
use image::{DynamicImage, GrayImage, RgbImage};
use nalgebra::Point2;
use part_inspect::{
    inspect, inspect_gray, inspect_into, inspect_topology, select_outer_contour, status_code,
    BorderKind, CircleResult, Contour, ContourTopology, InspectError, MeasurementResults,
    SLOT_COLOR,
};

#[test]
fn rotated_part_box_matches_rotation() {
    let mut img = blank(400, 400);
    fill_rotated_rect(&mut img, (200.0, 200.0), 240.0, 120.0, 30.0, PART);

    let out = inspect_gray(&img).expect("inspection");
    let b = out.results.bounding_box;
    assert_abs_diff_eq!(b.angle_deg, 30.0, epsilon = 1.0);
    assert_abs_diff_eq!(b.long_side(), 240.0, epsilon = 3.0);
    assert_abs_diff_eq!(b.short_side(), 120.0, epsilon = 3.0);
    assert_abs_diff_eq!(b.center.x, 200.0, epsilon = 1.5);
    assert_abs_diff_eq!(b.center.y, 200.0, epsilon = 1.5);
    assert!(out.results.circles.is_empty());
    assert!(out.results.slot.is_none());
}

#[test]
fn single_round_hole_is_one_circle() {
    let mut img = blank(300, 300);
    fill_rect(&mut img, 30, 30, 240, 240, PART);
    fill_circle(&mut img, 150, 140, 30, BACKGROUND);

    let out = inspect_gray(&img).expect("inspection");
    assert_eq!(out.results.circles.len(), 1);
    let c = out.results.circles[0];
    assert_abs_diff_eq!(c.radius, 30.0, epsilon = 2.0);
    assert_abs_diff_eq!(c.center.x, 150.0, epsilon = 1.0);
    assert_abs_diff_eq!(c.center.y, 140.0, epsilon = 1.0);
    assert!(out.results.slot.is_none());
}

#[test]
fn horizontal_slot_is_measured_along_its_length() {
    let mut img = blank(400, 200);
    fill_rect(&mut img, 20, 20, 360, 160, PART);
    fill_rect(&mut img, 100, 80, 200, 40, BACKGROUND);

    let slot = inspect_gray(&img)
        .expect("inspection")
        .results
        .slot
        .expect("slot");
    assert!(slot.length >= slot.width);
    assert_abs_diff_eq!(slot.length, 200.0, epsilon = 3.0);
    assert_abs_diff_eq!(slot.width, 40.0, epsilon = 3.0);
    assert!(slot.angle_deg < 1.0 || slot.angle_deg > 179.0, "{slot:?}");
    assert_abs_diff_eq!(slot.arc_radius(), slot.width / 2.0);
}

#[test]
fn vertical_slot_is_measured_along_its_length() {
    let mut img = blank(200, 400);
    fill_rect(&mut img, 20, 20, 160, 360, PART);
    fill_rect(&mut img, 80, 100, 40, 200, BACKGROUND);

    let slot = inspect_gray(&img)
        .expect("inspection")
        .results
        .slot
        .expect("slot");
    assert!(slot.length >= slot.width);
    assert_abs_diff_eq!(slot.length, 200.0, epsilon = 3.0);
    assert_abs_diff_eq!(slot.angle_deg, 90.0, epsilon = 1.0);
}

#[test]
fn complete_part_reports_every_feature() {
    let out = inspect_gray(&sample_part()).expect("inspection");
    let r = &out.results;
    assert_eq!(r.circles.len(), 2);
    assert_eq!(r.slot_candidates, 1);
    assert!(r.slot.is_some());
    assert_abs_diff_eq!(r.bounding_box.long_side(), 320.0, epsilon = 2.0);

    let summary = r.to_string();
    assert!(summary.contains("[Small Circles Found]: 2"));
    assert!(summary.contains("[Slot Found]:"));
    assert!(out.canvas.pixels().any(|p| *p == SLOT_COLOR));
}

#[test]
fn repeated_inspection_is_identical() {
    let img = sample_part();
    let a = inspect_gray(&img).expect("first");
    let b = inspect_gray(&img).expect("second");
    assert_eq!(a.results, b.results);
    assert_eq!(a.canvas, b.canvas);
}

#[test]
fn results_do_not_leak_between_calls() {
    let mut results = MeasurementResults::default();
    inspect_into(&DynamicImage::ImageLuma8(sample_part()), &mut results).expect("part");
    assert!(results.slot.is_some());

    let mut plain = blank(200, 200);
    fill_rect(&mut plain, 20, 20, 160, 160, PART);
    inspect_into(&DynamicImage::ImageLuma8(plain), &mut results).expect("plain part");
    assert!(results.slot.is_none());
    assert!(results.circles.is_empty());
    assert_eq!(results.slot_candidates, 0);
}

#[test]
fn colour_input_is_rejected_and_results_untouched() {
    let rgb = DynamicImage::ImageRgb8(RgbImage::new(64, 64));
    let mut results = MeasurementResults::default();
    results.circles.push(CircleResult {
        center: Point2::new(1.0, 2.0),
        radius: 3.0,
    });
    let before = results.clone();

    let outcome = inspect_into(&rgb, &mut results);
    assert_eq!(status_code(&outcome), 2);
    assert!(matches!(
        outcome,
        Err(InspectError::UnsupportedChannelCount { .. })
    ));
    assert_eq!(results, before);
}

#[test]
fn sixteen_bit_gray_is_rejected() {
    let img = DynamicImage::ImageLuma16(image::ImageBuffer::new(16, 16));
    assert_eq!(status_code(&inspect(&img)), 2);
}

#[test]
fn empty_image_is_code_one() {
    assert_eq!(status_code(&inspect_gray(&GrayImage::new(0, 0))), 1);
    // Emptiness is checked before the pixel type.
    let empty_rgb = DynamicImage::ImageRgb8(RgbImage::new(0, 10));
    assert_eq!(status_code(&inspect(&empty_rgb)), 1);
}

#[test]
fn blank_image_is_code_three() {
    let outcome = inspect(&DynamicImage::ImageLuma8(blank(120, 80)));
    assert_eq!(status_code(&outcome), 3);
    assert!(matches!(outcome, Err(InspectError::NoPartContourFound)));
}

#[test]
fn speck_outside_the_part_is_ignored() {
    let mut img = blank(300, 300);
    fill_rect(&mut img, 60, 60, 200, 200, PART);
    fill_circle(&mut img, 160, 160, 25, BACKGROUND);
    fill_rect(&mut img, 5, 5, 6, 6, PART);

    let out = inspect_gray(&img).expect("inspection");
    assert_eq!(out.results.circles.len(), 1);
    assert_abs_diff_eq!(out.results.bounding_box.long_side(), 200.0, epsilon = 2.0);
}

#[test]
fn island_inside_an_opening_is_not_a_feature() {
    let mut img = blank(300, 300);
    fill_rect(&mut img, 20, 20, 260, 260, PART);
    fill_rect(&mut img, 60, 60, 180, 180, BACKGROUND);
    // Bright disk inside the big opening: a grandchild of the outline.
    fill_circle(&mut img, 150, 150, 30, PART);
    fill_circle(&mut img, 150, 150, 10, BACKGROUND);

    let out = inspect_gray(&img).expect("inspection");
    assert!(out.results.circles.is_empty());
    assert_eq!(out.results.slot_candidates, 1);
}

#[test]
fn two_slots_report_the_last_one() {
    let mut img = blank(300, 300);
    fill_rect(&mut img, 10, 10, 280, 280, PART);
    fill_rect(&mut img, 50, 50, 150, 30, BACKGROUND);
    fill_rect(&mut img, 50, 200, 200, 30, BACKGROUND);

    let r = inspect_gray(&img).expect("inspection").results;
    assert_eq!(r.slot_candidates, 2);
    let slot = r.slot.expect("slot");
    assert!(slot.center.y > 200.0);
    assert!(r.to_string().contains("2 slot candidates"));
}

#[test]
fn prebuilt_topology_tie_break_and_zero_area_outline() {
    let square = |x: i32, side: i32| {
        Contour::new(
            vec![
                Point2::new(x, 0),
                Point2::new(x + side, 0),
                Point2::new(x + side, side),
                Point2::new(x, side),
            ],
            BorderKind::Outer,
            None,
        )
    };
    let topo = ContourTopology::from_contours(vec![square(0, 30), square(100, 30)]);
    assert_eq!(select_outer_contour(&topo), Some(0));

    let mut canvas = RgbImage::new(200, 50);
    let r = inspect_topology(&topo, &mut canvas).expect("inspection");
    assert_abs_diff_eq!(r.bounding_box.center.x, 15.0, epsilon = 1e-4);

    let line = ContourTopology::from_contours(vec![Contour::new(
        vec![Point2::new(2, 2), Point2::new(20, 2)],
        BorderKind::Outer,
        None,
    )]);
    let outcome = inspect_topology(&line, &mut canvas);
    assert_eq!(status_code(&outcome), 3);
}

#[test]
fn lone_pixel_or_line_is_not_a_part() {
    let mut pixel = blank(40, 40);
    pixel.put_pixel(20, 20, PART);
    assert_eq!(status_code(&inspect_gray(&pixel)), 3);

    let mut line = blank(60, 40);
    for x in 5..55 {
        line.put_pixel(x, 20, PART);
    }
    let mut results = MeasurementResults::default();
    let outcome = inspect_into(&DynamicImage::ImageLuma8(line), &mut results);
    assert!(matches!(outcome, Err(InspectError::NoPartContourFound)));
    assert_eq!(results, MeasurementResults::default());
}
