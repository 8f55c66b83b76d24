use crate::error::{SticksError, SticksResult};
use crate::render::style::{Color, Pen};

const THEME_PEN_WIDTH: f64 = 2.0;

/// Host-supplied palette consulted for series whose style is not overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    series_colors: Vec<Color>,
    label_color: Color,
}

impl Theme {
    pub fn new(series_colors: Vec<Color>, label_color: Color) -> SticksResult<Self> {
        if series_colors.is_empty() {
            return Err(SticksError::InvalidData(
                "theme must supply at least one series color".to_owned(),
            ));
        }
        for color in &series_colors {
            color.validate()?;
        }
        label_color.validate()?;

        Ok(Self {
            series_colors,
            label_color,
        })
    }

    /// Pen for the series at the given palette slot, wrapping modulo the
    /// palette length.
    #[must_use]
    pub fn pen_for_index(&self, index: usize) -> Pen {
        let color = self.series_colors[index % self.series_colors.len()];
        Pen::new(color, THEME_PEN_WIDTH)
    }

    #[must_use]
    pub fn label_color(&self) -> Color {
        self.label_color
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            series_colors: vec![
                Color::rgb(0.16, 0.38, 1.0),
                Color::rgb(0.06, 0.62, 0.35),
                Color::rgb(0.86, 0.22, 0.19),
                Color::rgb(0.93, 0.60, 0.12),
                Color::rgb(0.48, 0.25, 0.80),
            ],
            label_color: Color::rgb(0.10, 0.12, 0.16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn palette_index_wraps_around() {
        let theme = Theme::default();
        let first = theme.pen_for_index(0);
        let wrapped = theme.pen_for_index(5);
        assert_eq!(first.color, wrapped.color);
    }

    #[test]
    fn empty_palette_is_rejected() {
        use crate::render::style::Color;
        assert!(Theme::new(Vec::new(), Color::rgb(0.0, 0.0, 0.0)).is_err());
    }
}
