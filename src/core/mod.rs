pub mod domain;
pub mod geometry;
pub mod scale;
pub mod series;
pub mod types;

pub use domain::{AxisMode, CartesianDomain, CoordinateDomain, PolarDomain};
pub use geometry::{
    ChartKind, GeometryOutcome, GeometrySnapshot, STROKE_MARGIN_FACTOR, build_stick_geometry,
};
pub use scale::LinearScale;
pub use series::{DEFAULT_LABEL_FORMAT, DEFAULT_MARKER_SIZE, SticksSeries, format_point_label};
pub use types::{DataPoint, ScreenPoint, Viewport};
