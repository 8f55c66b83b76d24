use std::f64::consts::TAU;

use crate::core::scale::LinearScale;
use crate::core::types::{DataPoint, ScreenPoint, Viewport};
use crate::error::{SticksError, SticksResult};

/// Mapping mode applied to the vertical axis of a cartesian domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisMode {
    /// Uniform spacing in raw value units.
    #[default]
    Linear,
    /// Uniform spacing in natural-log units (all values must be > 0).
    Log,
}

/// Forward/inverse mapping between data space and screen space.
///
/// Supplied per rebuild and per paint because the mapping changes between
/// frames (zoom, pan, axis retargeting). Implementations are immutable
/// value mappings, which is why `Sync` is part of the contract: a rebuild
/// may fan the forward mapping out across threads.
pub trait CoordinateDomain: Sync {
    fn data_to_screen(&self, point: DataPoint) -> SticksResult<ScreenPoint>;

    fn screen_to_data(&self, point: ScreenPoint) -> SticksResult<DataPoint>;

    /// Visible plot-area size in screen units.
    fn visible_size(&self) -> (f64, f64);

    /// Screen position of the zero baseline for a given data-space x.
    ///
    /// The stick foot tracks this position, so axis retargeting (inverted
    /// or log axes) moves the feet along with the axis rather than pinning
    /// them to a fixed pixel row.
    fn baseline_screen(&self, x: f64) -> SticksResult<ScreenPoint> {
        self.data_to_screen(DataPoint::new(x, 0.0))
    }
}

/// Rectangular projection: x spans the viewport width, y the height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianDomain {
    x_scale: LinearScale,
    y_start: f64,
    y_end: f64,
    y_transformed: LinearScale,
    y_mode: AxisMode,
    y_inverted: bool,
    viewport: Viewport,
}

impl CartesianDomain {
    pub fn new(
        x_start: f64,
        x_end: f64,
        y_start: f64,
        y_end: f64,
        viewport: Viewport,
    ) -> SticksResult<Self> {
        Self::with_y_mode(x_start, x_end, y_start, y_end, viewport, AxisMode::Linear)
    }

    /// Creates a domain with an explicit vertical-axis mapping mode.
    pub fn with_y_mode(
        x_start: f64,
        x_end: f64,
        y_start: f64,
        y_end: f64,
        viewport: Viewport,
        y_mode: AxisMode,
    ) -> SticksResult<Self> {
        let viewport = viewport.validated()?;
        let x_scale = LinearScale::new(x_start, x_end)?;
        let transformed_start = to_axis_units(y_start, y_mode)?;
        let transformed_end = to_axis_units(y_end, y_mode)?;
        let y_transformed = LinearScale::new(transformed_start, transformed_end)?;

        Ok(Self {
            x_scale,
            y_start,
            y_end,
            y_transformed,
            y_mode,
            y_inverted: false,
            viewport,
        })
    }

    /// Returns a copy with the vertical pixel direction flipped.
    #[must_use]
    pub fn with_inverted_y(mut self, inverted: bool) -> Self {
        self.y_inverted = inverted;
        self
    }

    #[must_use]
    pub fn y_mode(&self) -> AxisMode {
        self.y_mode
    }

    #[must_use]
    pub fn is_y_inverted(&self) -> bool {
        self.y_inverted
    }

    fn height(&self) -> f64 {
        f64::from(self.viewport.height)
    }

    fn y_to_pixel(&self, y: f64) -> SticksResult<f64> {
        let transformed = to_axis_units(y, self.y_mode)?;
        let normalized = self.y_transformed.normalize(transformed)?;
        if self.y_inverted {
            Ok(self.height() * normalized)
        } else {
            Ok(self.height() * (1.0 - normalized))
        }
    }
}

impl CoordinateDomain for CartesianDomain {
    fn data_to_screen(&self, point: DataPoint) -> SticksResult<ScreenPoint> {
        let normalized_x = self.x_scale.normalize(point.x)?;
        let x = f64::from(self.viewport.width) * normalized_x;
        let y = self.y_to_pixel(point.y)?;
        Ok(ScreenPoint::new(x, y))
    }

    fn screen_to_data(&self, point: ScreenPoint) -> SticksResult<DataPoint> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(SticksError::InvalidData(
                "screen position must be finite".to_owned(),
            ));
        }

        let x = self.x_scale.denormalize(point.x / f64::from(self.viewport.width))?;

        let normalized_y = if self.y_inverted {
            point.y / self.height()
        } else {
            1.0 - point.y / self.height()
        };
        let transformed = self.y_transformed.denormalize(normalized_y)?;
        let y = from_axis_units(transformed, self.y_mode)?;

        Ok(DataPoint::new(x, y))
    }

    fn visible_size(&self) -> (f64, f64) {
        (f64::from(self.viewport.width), self.height())
    }

    fn baseline_screen(&self, x: f64) -> SticksResult<ScreenPoint> {
        // A log axis cannot represent the data-space origin; the baseline
        // then sits at the lower domain bound instead.
        let baseline_y = match self.y_mode {
            AxisMode::Linear => 0.0,
            AxisMode::Log => self.y_start.min(self.y_end),
        };
        self.data_to_screen(DataPoint::new(x, baseline_y))
    }
}

/// Radial projection: x maps to the angle from 12 o'clock (clockwise), y to
/// the radius from the plot center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarDomain {
    angle_scale: LinearScale,
    radius_scale: LinearScale,
    viewport: Viewport,
}

impl PolarDomain {
    pub fn new(
        angle_start: f64,
        angle_end: f64,
        radius_start: f64,
        radius_end: f64,
        viewport: Viewport,
    ) -> SticksResult<Self> {
        let viewport = viewport.validated()?;
        Ok(Self {
            angle_scale: LinearScale::new(angle_start, angle_end)?,
            radius_scale: LinearScale::new(radius_start, radius_end)?,
            viewport,
        })
    }

    #[must_use]
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(
            f64::from(self.viewport.width) / 2.0,
            f64::from(self.viewport.height) / 2.0,
        )
    }

    #[must_use]
    pub fn max_radius(&self) -> f64 {
        f64::from(self.viewport.width.min(self.viewport.height)) / 2.0
    }
}

impl CoordinateDomain for PolarDomain {
    fn data_to_screen(&self, point: DataPoint) -> SticksResult<ScreenPoint> {
        let angle = TAU * self.angle_scale.normalize(point.x)?;
        // Off-scale radii clamp to the center; a negative radius would
        // mirror the stick through it.
        let radius = (self.max_radius() * self.radius_scale.normalize(point.y)?).max(0.0);
        let center = self.center();
        Ok(ScreenPoint::new(
            center.x + radius * angle.sin(),
            center.y - radius * angle.cos(),
        ))
    }

    fn screen_to_data(&self, point: ScreenPoint) -> SticksResult<DataPoint> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(SticksError::InvalidData(
                "screen position must be finite".to_owned(),
            ));
        }

        let center = self.center();
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        let radius = dx.hypot(dy);
        let mut angle = dx.atan2(-dy);
        if angle < 0.0 {
            angle += TAU;
        }

        let x = self.angle_scale.denormalize(angle / TAU)?;
        let y = self.radius_scale.denormalize(radius / self.max_radius())?;
        Ok(DataPoint::new(x, y))
    }

    fn visible_size(&self) -> (f64, f64) {
        (
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
        )
    }
}

fn to_axis_units(value: f64, mode: AxisMode) -> SticksResult<f64> {
    if !value.is_finite() {
        return Err(SticksError::InvalidData("value must be finite".to_owned()));
    }

    match mode {
        AxisMode::Linear => Ok(value),
        AxisMode::Log => {
            if value <= 0.0 {
                return Err(SticksError::InvalidData(
                    "log axis requires values > 0".to_owned(),
                ));
            }
            Ok(value.ln())
        }
    }
}

fn from_axis_units(value: f64, mode: AxisMode) -> SticksResult<f64> {
    if !value.is_finite() {
        return Err(SticksError::InvalidData(
            "mapped axis value must be finite".to_owned(),
        ));
    }

    match mode {
        AxisMode::Linear => Ok(value),
        AxisMode::Log => Ok(value.exp()),
    }
}
