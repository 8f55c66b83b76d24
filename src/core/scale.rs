use crate::error::{SticksError, SticksResult};

/// Linear mapping between a data range and the unit interval.
///
/// Domains compose two of these (one per axis) and scale the normalized
/// value by whatever span the projection needs: pixels for cartesian axes,
/// radians or radius for polar ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> SticksResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(SticksError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a domain value to its normalized position in `[0, 1]`.
    ///
    /// Values outside the domain map outside the unit interval; callers
    /// decide whether to clamp.
    pub fn normalize(self, value: f64) -> SticksResult<f64> {
        if !value.is_finite() {
            return Err(SticksError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        Ok((value - self.domain_start) / span)
    }

    /// Maps a normalized position back to a domain value.
    pub fn denormalize(self, normalized: f64) -> SticksResult<f64> {
        if !normalized.is_finite() {
            return Err(SticksError::InvalidData(
                "normalized position must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        Ok(self.domain_start + normalized * span)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn normalize_round_trips_through_denormalize() {
        let scale = LinearScale::new(-4.0, 12.0).expect("scale");
        let normalized = scale.normalize(3.0).expect("normalize");
        let value = scale.denormalize(normalized).expect("denormalize");
        assert!((value - 3.0).abs() <= 1e-12);
    }

    #[test]
    fn degenerate_domain_is_rejected() {
        assert!(LinearScale::new(5.0, 5.0).is_err());
        assert!(LinearScale::new(f64::NAN, 1.0).is_err());
        assert!(LinearScale::new(0.0, f64::INFINITY).is_err());
    }
}
