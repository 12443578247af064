use image::ColorType;

/// Status code of a successful inspection.
pub const STATUS_OK: u32 = 0;

/// Reasons an inspection aborts. Each maps to a stable numeric code.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InspectError {
    #[error("input image is empty")]
    EmptyInput,
    #[error("expected a single-channel 8-bit image, got {color:?}")]
    UnsupportedChannelCount { color: ColorType },
    #[error("no part contour found")]
    NoPartContourFound,
}

impl InspectError {
    pub fn code(&self) -> u32 {
        match self {
            InspectError::EmptyInput => 1,
            InspectError::UnsupportedChannelCount { .. } => 2,
            InspectError::NoPartContourFound => 3,
        }
    }
}

/// Numeric status of an inspection outcome: 0 on success, else the error code.
pub fn status_code<T>(result: &Result<T, InspectError>) -> u32 {
    match result {
        Ok(_) => STATUS_OK,
        Err(err) => err.code(),
    }
}
