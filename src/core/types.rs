use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{SticksError, SticksResult};

/// Pixel size of the paint surface the domain projects into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub(crate) fn validated(self) -> SticksResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(SticksError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// A sample in data space (domain units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from a timestamp/value pair as produced by market feeds.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> SticksResult<Self> {
        let y = value.to_f64().ok_or_else(|| {
            SticksError::InvalidData("value cannot be represented as f64".to_owned())
        })?;
        Ok(Self {
            x: time.timestamp_millis() as f64 / 1000.0,
            y,
        })
    }
}

/// A position in screen space (pixels / device units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<ScreenPoint> for kurbo::Point {
    fn from(point: ScreenPoint) -> Self {
        Self::new(point.x, point.y)
    }
}
