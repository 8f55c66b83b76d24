use kurbo::Shape;
use serde::{Deserialize, Serialize};

use crate::core::geometry::GeometrySnapshot;
use crate::error::{SticksError, SticksResult};

pub const GEOMETRY_SUMMARY_JSON_SCHEMA_V1: u32 = 1;

/// Plain-number bounds usable across process boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsSummary {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Compact description of a committed geometry snapshot.
///
/// Used for differential testing and host-side diagnostics; carries counts
/// and bounds rather than the paths themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometrySummary {
    pub point_count: usize,
    pub paint_element_count: usize,
    pub hit_element_count: usize,
    pub paint_bounds: BoundsSummary,
    pub bounds: BoundsSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometrySummaryJsonContractV1 {
    pub schema_version: u32,
    pub summary: GeometrySummary,
}

impl GeometrySummary {
    #[must_use]
    pub fn from_snapshot(snapshot: &GeometrySnapshot) -> Self {
        let paint_bounds = snapshot.paint_path.bounding_box();
        Self {
            point_count: snapshot.screen_points.len(),
            paint_element_count: snapshot.paint_path.elements().len(),
            hit_element_count: snapshot.hit_path.elements().len(),
            paint_bounds: BoundsSummary {
                x0: paint_bounds.x0,
                y0: paint_bounds.y0,
                x1: paint_bounds.x1,
                y1: paint_bounds.y1,
            },
            bounds: BoundsSummary {
                x0: snapshot.bounds.x0,
                y0: snapshot.bounds.y0,
                x1: snapshot.bounds.x1,
                y1: snapshot.bounds.y1,
            },
        }
    }

    pub fn to_json_contract_v1_pretty(&self) -> SticksResult<String> {
        let payload = GeometrySummaryJsonContractV1 {
            schema_version: GEOMETRY_SUMMARY_JSON_SCHEMA_V1,
            summary: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SticksError::InvalidData(format!("failed to serialize geometry contract v1: {e}"))
        })
    }

    /// Parses either a bare summary or the versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> SticksResult<Self> {
        if let Ok(summary) = serde_json::from_str::<Self>(input) {
            return Ok(summary);
        }
        let payload: GeometrySummaryJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SticksError::InvalidData(format!("failed to parse geometry contract payload: {e}"))
        })?;
        if payload.schema_version != GEOMETRY_SUMMARY_JSON_SCHEMA_V1 {
            return Err(SticksError::InvalidData(format!(
                "unsupported geometry contract schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.summary)
    }
}
