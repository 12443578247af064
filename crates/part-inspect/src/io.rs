//! JSON configuration and report helpers for the inspection CLI.

use crate::{status_code, InspectError, MeasurementResults, STATUS_OK};
use image::{DynamicImage, ImageReader, RgbImage};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum InspectIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Configuration of one inspection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectConfig {
    pub image_path: String,
    /// Where to save the annotated canvas; nothing is saved when unset.
    #[serde(default)]
    pub annotated_path: Option<String>,
    /// Where to write the JSON report; nothing is written when unset.
    #[serde(default)]
    pub report_path: Option<String>,
    /// Convert the decoded image to 8-bit gray before inspecting it.
    /// Without it, colour images are rejected.
    #[serde(default)]
    pub force_grayscale: bool,
}

impl InspectConfig {
    pub fn for_image(image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            ..Self::default()
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, InspectIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), InspectIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn annotated_path(&self) -> Option<PathBuf> {
        self.annotated_path.as_ref().map(PathBuf::from)
    }

    pub fn report_path(&self) -> Option<PathBuf> {
        self.report_path.as_ref().map(PathBuf::from)
    }

    /// Decode the configured image, honouring `force_grayscale`.
    pub fn load_image(&self) -> Result<DynamicImage, InspectIoError> {
        load_image(Path::new(&self.image_path), self.force_grayscale)
    }
}

/// Decode an image file. With `force_grayscale` the result is always `Luma8`.
pub fn load_image(path: &Path, force_grayscale: bool) -> Result<DynamicImage, InspectIoError> {
    let img = ImageReader::open(path)?.decode()?;
    if force_grayscale && !matches!(img, DynamicImage::ImageLuma8(_)) {
        return Ok(DynamicImage::ImageLuma8(img.to_luma8()));
    }
    Ok(img)
}

/// Save an annotated canvas; the format follows the file extension.
pub fn save_canvas(canvas: &RgbImage, path: &Path) -> Result<(), InspectIoError> {
    canvas.save(path)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingsMs {
    pub load_image: u64,
    pub inspect: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectReport {
    pub image_path: String,
    pub width: u32,
    pub height: u32,
    pub status_code: u32,
    #[serde(default)]
    pub results: Option<MeasurementResults>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub timings_ms: TimingsMs,
}

impl InspectReport {
    /// Build a base report for a decoded image.
    pub fn new(cfg: &InspectConfig, image: &DynamicImage, timings_ms: TimingsMs) -> Self {
        Self {
            image_path: cfg.image_path.clone(),
            width: image.width(),
            height: image.height(),
            status_code: STATUS_OK,
            results: None,
            error: None,
            timings_ms,
        }
    }

    /// Record an inspection outcome.
    pub fn set_outcome(&mut self, outcome: &Result<MeasurementResults, InspectError>) {
        self.status_code = status_code(outcome);
        match outcome {
            Ok(results) => self.set_results(results.clone()),
            Err(err) => self.set_error(*err),
        }
    }

    pub fn set_results(&mut self, results: MeasurementResults) {
        self.status_code = STATUS_OK;
        self.results = Some(results);
        self.error = None;
    }

    pub fn set_error(&mut self, err: InspectError) {
        self.status_code = err.code();
        self.results = None;
        self.error = Some(err.to_string());
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, InspectIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), InspectIoError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, InspectIoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
