//! Binarization and contour extraction with parent/child hierarchy.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::contrast::{self, ThresholdType};
use nalgebra::Point2;
use part_inspect_core::{
    arc_length, min_area_rect, min_enclosing_circle, polygon_area, Circle, RotatedRect,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Whether a contour bounds a foreground region from outside or a hole in it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderKind {
    Outer,
    Hole,
}

/// Closed boundary of a region in the binarized image, together with its
/// hierarchy entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<Point2<i32>>,
    pub kind: BorderKind,
    /// Index of the directly enclosing contour, `None` at the top level.
    pub parent: Option<usize>,
}

impl Contour {
    pub fn new(points: Vec<Point2<i32>>, kind: BorderKind, parent: Option<usize>) -> Self {
        Self {
            points,
            kind,
            parent,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    fn points_f64(&self) -> Vec<Point2<f64>> {
        self.points
            .iter()
            .map(|p| Point2::new(p.x as f64, p.y as f64))
            .collect()
    }

    /// Enclosed area in px² (absolute shoelace area).
    pub fn area(&self) -> f64 {
        polygon_area(&self.points_f64())
    }

    /// Closed perimeter length in px.
    pub fn perimeter(&self) -> f64 {
        arc_length(&self.points_f64(), true)
    }

    pub fn min_area_rect(&self) -> Option<RotatedRect> {
        min_area_rect(&self.points_f64())
    }

    pub fn min_enclosing_circle(&self) -> Option<Circle> {
        min_enclosing_circle(&self.points_f64())
    }
}

/// All contours of one image in discovery (raster) order.
///
/// Indices are stable: `parent` fields refer to positions in this list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourTopology {
    contours: Vec<Contour>,
}

impl ContourTopology {
    /// Wrap an already extracted contour list. Parent indices are trusted.
    pub fn from_contours(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    /// Binarize `gray` at `threshold` and extract every contour.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(gray), fields(width = gray.width(), height = gray.height()))
    )]
    pub fn extract(gray: &GrayImage, threshold: u8) -> Self {
        let binary = binarize(gray, threshold);
        Self::from_binary(&binary)
    }

    /// Extract contours from an image whose nonzero pixels are foreground.
    pub fn from_binary(binary: &GrayImage) -> Self {
        let contours = find_contours::<i32>(binary)
            .into_iter()
            .map(|c| Contour {
                points: c.points.iter().map(|p| Point2::new(p.x, p.y)).collect(),
                kind: match c.border_type {
                    BorderType::Outer => BorderKind::Outer,
                    BorderType::Hole => BorderKind::Hole,
                },
                parent: c.parent,
            })
            .collect();
        Self { contours }
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn get(&self, index: usize) -> Option<&Contour> {
        self.contours.get(index)
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Contours without a parent, with their indices.
    pub fn top_level(&self) -> impl Iterator<Item = (usize, &Contour)> + '_ {
        self.contours
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_top_level())
    }

    /// Direct children of contour `parent`, in discovery order.
    pub fn children_of(&self, parent: usize) -> impl Iterator<Item = (usize, &Contour)> + '_ {
        self.contours
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.parent == Some(parent))
    }
}

/// Fixed-threshold binarization: pixels strictly above `threshold` become
/// 255, everything else 0.
pub fn binarize(gray: &GrayImage, threshold: u8) -> GrayImage {
    contrast::threshold(gray, threshold, ThresholdType::Binary)
}
