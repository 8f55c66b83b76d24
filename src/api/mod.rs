mod geometry_contract;
mod invalidation;
mod sticks_item;

pub use geometry_contract::{
    BoundsSummary, GEOMETRY_SUMMARY_JSON_SCHEMA_V1, GeometrySummary, GeometrySummaryJsonContractV1,
};
pub use invalidation::{InvalidationTracker, UpdateAction, VisualStateSnapshot};
pub use sticks_item::SticksItem;
