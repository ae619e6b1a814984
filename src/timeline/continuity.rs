//! Boundary checks for phase handoffs.
//!
//! Overlapping and abutting ranges are not guaranteed to meet continuously; these helpers make
//! the jumps visible so a table can be checked instead of trusted.

use crate::foundation::error::{RevealError, RevealResult};
use crate::timeline::engine::evaluate;
use crate::timeline::phase::PhaseTable;
use crate::timeline::value::{PropertyKey, Value};

/// Sampling parameters for [`scan_continuity`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuityOpts {
    /// Progress offset sampled on each side of a boundary.
    pub epsilon: f64,
    /// Largest value change across `epsilon` that still counts as continuous.
    pub tolerance: f64,
}

impl Default for ContinuityOpts {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            tolerance: 1e-2,
        }
    }
}

/// One property that jumps across a phase boundary.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Discontinuity {
    /// Property that jumps.
    pub key: PropertyKey,
    /// Phase boundary where the jump happens.
    pub at: f64,
    /// Size of the jump; infinite when the value kind changes.
    pub jump: f64,
}

/// Scan every phase boundary inside `[0, 1]` for value jumps.
pub fn scan_continuity(table: &PhaseTable, opts: ContinuityOpts) -> Vec<Discontinuity> {
    let mut out = Vec::new();
    for at in table.boundaries() {
        if !(0.0..=1.0).contains(&at) {
            continue;
        }
        let left = evaluate(at - opts.epsilon, table);
        let mid = evaluate(at, table);
        let right = evaluate(at + opts.epsilon, table);

        for (key, v) in mid.iter() {
            let jump = [left.get(key.as_str()), right.get(key.as_str())]
                .into_iter()
                .map(|other| match other {
                    Some(o) => v.distance(o).unwrap_or(f64::INFINITY),
                    None => f64::INFINITY,
                })
                .fold(0.0f64, f64::max);
            if jump > opts.tolerance {
                out.push(Discontinuity {
                    key: key.clone(),
                    at,
                    jump,
                });
            }
        }
    }
    tracing::debug!(found = out.len(), "continuity scan finished");
    out
}

/// Curve value at a phase's end next to what the composed frame shows there.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Handoff {
    /// Phase whose end is inspected.
    pub phase: String,
    /// Property the phase's track writes.
    pub key: PropertyKey,
    /// Global progress of the phase end.
    pub at: f64,
    /// Track value at local progress 1.
    pub curve_end: Value,
    /// Composed frame value at `at`.
    pub frame_value: Value,
}

impl Handoff {
    /// True when the two values are the same kind and at most `tolerance` apart.
    pub fn is_continuous(&self, tolerance: f64) -> bool {
        self.curve_end
            .distance(&self.frame_value)
            .is_some_and(|d| d <= tolerance)
    }
}

/// Compare `phase`'s curve for `key` at local progress 1 with the frame at the phase's end.
pub fn boundary_handoff(table: &PhaseTable, phase: &str, key: &str) -> RevealResult<Handoff> {
    let p = table
        .phase(phase)
        .ok_or_else(|| RevealError::validation(format!("unknown phase '{phase}'")))?;
    let track = p
        .tracks
        .iter()
        .find(|t| t.key.as_str() == key)
        .ok_or_else(|| {
            RevealError::validation(format!("phase '{phase}' does not target '{key}'"))
        })?;

    let at = p.range.end;
    let curve_end = track.sample(1.0, at);
    let frame = evaluate(at, table);
    let frame_value = *frame
        .get(key)
        .ok_or_else(|| RevealError::validation(format!("frame has no value for '{key}'")))?;

    Ok(Handoff {
        phase: p.name.clone(),
        key: track.key.clone(),
        at,
        curve_end,
        frame_value,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/continuity.rs"]
mod tests;
