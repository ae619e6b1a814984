use std::collections::BTreeMap;

use crate::foundation::core::BoundingBox;
use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::fit::{FitTransform, fit_contain};

/// Source of current bounding boxes for named targets.
///
/// Implementations may return stale data right after a layout change; callers re-measure once
/// layout settles.
pub trait MeasurementProvider {
    /// Current box of `target_id`, or [`RevealError::MissingMeasurement`] if it is unknown.
    fn measure(&self, target_id: &str) -> RevealResult<BoundingBox>;
}

/// Fixed measurements keyed by target id, for tests and offline tooling.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StaticMeasurements {
    boxes: BTreeMap<String, BoundingBox>,
}

impl StaticMeasurements {
    /// No targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the box for `target_id`.
    pub fn insert(&mut self, target_id: impl Into<String>, bbox: BoundingBox) -> &mut Self {
        self.boxes.insert(target_id.into(), bbox);
        self
    }

    /// Builder form of [`StaticMeasurements::insert`].
    pub fn with(mut self, target_id: impl Into<String>, bbox: BoundingBox) -> Self {
        self.insert(target_id, bbox);
        self
    }

    /// Number of known targets.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True when no target is known.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl MeasurementProvider for StaticMeasurements {
    fn measure(&self, target_id: &str) -> RevealResult<BoundingBox> {
        self.boxes.get(target_id).copied().ok_or_else(|| {
            RevealError::missing_measurement(format!("no bounding box for target '{target_id}'"))
        })
    }
}

/// Measure both targets and fit `shape_id` into `container_id`.
pub fn fit_measured<P>(
    provider: &P,
    container_id: &str,
    shape_id: &str,
) -> RevealResult<FitTransform>
where
    P: MeasurementProvider + ?Sized,
{
    let container = provider.measure(container_id)?;
    let shape = provider.measure(shape_id)?;
    fit_contain(container, shape)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/measure.rs"]
mod tests;
