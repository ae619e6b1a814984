use crate::foundation::core::{BoundingBox, ViewportSize, clamp_progress};
use crate::foundation::error::RevealResult;
use crate::geometry::fit::{FitTransform, Origin, center_origin, fit_contain};
use crate::geometry::measure::{MeasurementProvider, fit_measured};
use crate::timeline::evaluator::{evaluate_phase, evaluate_phases};
use crate::timeline::frame::{PropertyFrame, compose};
use crate::timeline::phase::{Activity, PhaseTable};
use crate::timeline::presets::Preset;
use crate::timeline::value::PropertyKey;

/// Evaluate `table` at `progress`.
///
/// Progress is clamped to `[0, 1]` first, so overshooting scroll positions produce the frame of
/// the nearest end. Pure: the same inputs always give the same frame.
#[tracing::instrument(level = "trace", skip(table))]
pub fn evaluate(progress: f64, table: &PhaseTable) -> PropertyFrame {
    let p = clamp_progress(progress);
    compose(p, &table.defaults, evaluate_phases(table, p))
}

/// Per-phase diagnostics for one progress sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PhaseReport {
    /// Phase name.
    pub name: String,
    /// Where the progress fell relative to the phase range.
    pub activity: Activity,
    /// Local progress while active.
    pub local: Option<f64>,
    /// Keys the phase wrote, in track order.
    pub writes: Vec<PropertyKey>,
}

/// A frame plus the result of a measured fit attempted alongside it.
#[derive(Debug)]
pub struct MeasuredFrame {
    /// Composed frame; always present.
    pub frame: PropertyFrame,
    /// Fit result, or why it could not be computed.
    pub fit: RevealResult<FitTransform>,
}

/// Validated phase table with the engine's entry points.
#[derive(Clone, Debug)]
pub struct Timeline {
    table: PhaseTable,
}

impl Timeline {
    /// Validate `table` and wrap it.
    pub fn new(table: PhaseTable) -> RevealResult<Self> {
        table.validate()?;
        Ok(Self { table })
    }

    /// Timeline for a built-in sequence.
    pub fn from_preset(preset: Preset) -> RevealResult<Self> {
        Self::new(preset.table()?)
    }

    /// Parse and validate a JSON phase table.
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        Ok(Self {
            table: PhaseTable::from_json_str(s)?,
        })
    }

    /// The validated table.
    pub fn table(&self) -> &PhaseTable {
        &self.table
    }

    /// Frame at `progress`; see [`evaluate`].
    pub fn evaluate(&self, progress: f64) -> PropertyFrame {
        evaluate(progress, &self.table)
    }

    /// Which phases are active at `progress`, with their local progress and the keys they write.
    pub fn explain(&self, progress: f64) -> Vec<PhaseReport> {
        let p = clamp_progress(progress);
        self.table
            .phases
            .iter()
            .map(|phase| {
                let out = evaluate_phase(phase, p);
                PhaseReport {
                    name: phase.name.clone(),
                    activity: out.activity,
                    local: out.local,
                    writes: out.updates.into_iter().map(|(k, _)| k.clone()).collect(),
                }
            })
            .collect()
    }

    /// See [`fit_contain`].
    pub fn fit(&self, container: BoundingBox, shape: BoundingBox) -> RevealResult<FitTransform> {
        fit_contain(container, shape)
    }

    /// See [`center_origin`].
    pub fn center_origin(&self, bbox: BoundingBox, viewport: ViewportSize) -> Origin {
        center_origin(bbox, viewport)
    }

    /// Evaluate the frame and, independently, fit `shape_id` into `container_id`.
    ///
    /// A failed measurement or degenerate box only affects `fit`; the frame is always produced.
    pub fn evaluate_with_fit<P>(
        &self,
        progress: f64,
        provider: &P,
        container_id: &str,
        shape_id: &str,
    ) -> MeasuredFrame
    where
        P: MeasurementProvider + ?Sized,
    {
        let frame = self.evaluate(progress);
        let fit = fit_measured(provider, container_id, shape_id);
        if let Err(err) = &fit {
            tracing::warn!(container_id, shape_id, error = %err, "skipping fit for this frame");
        }
        MeasuredFrame { frame, fit }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/engine.rs"]
mod tests;
