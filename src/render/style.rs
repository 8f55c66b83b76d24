use crate::error::{SticksError, SticksResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Returns this color with its alpha scaled by `opacity`, clamped to
    /// the unit interval. Hosts use it to apply series opacity at draw time.
    #[must_use]
    pub fn scaled_alpha(self, opacity: f64) -> Self {
        Self {
            alpha: (self.alpha * opacity).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn validate(self) -> SticksResult<()> {
        let channels = [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ];
        for (channel, value) in channels {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SticksError::InvalidData(format!(
                    "color channel `{channel}` must be finite and within [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke description for the stick path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
    pub miter_limit: f64,
}

impl Pen {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            miter_limit: 2.0,
        }
    }

    #[must_use]
    pub const fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }

    pub fn validate(self) -> SticksResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(SticksError::InvalidData(
                "pen width must be finite and > 0".to_owned(),
            ));
        }
        if !self.miter_limit.is_finite() || self.miter_limit < 1.0 {
            return Err(SticksError::InvalidData(
                "pen miter limit must be finite and >= 1".to_owned(),
            ));
        }
        self.color.validate()
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color::rgb(0.16, 0.38, 1.0), 2.0)
    }
}

/// Label overlay state resolved for one paint pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelState {
    pub visible: bool,
    pub format: String,
    pub font_size_px: f64,
    pub color: Color,
    pub clipping: bool,
}

impl LabelState {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            format: String::new(),
            font_size_px: 11.0,
            color: Color::rgb(0.10, 0.12, 0.16),
            clipping: true,
        }
    }
}
