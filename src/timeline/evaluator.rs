use crate::timeline::phase::{Activity, Extrapolation, Phase, PhaseTable, Track};
use crate::timeline::value::{PropertyKey, Value};

/// Contribution of one phase for one progress sample.
#[derive(Clone, Debug)]
pub struct PhaseOutput<'a> {
    /// Name of the phase.
    pub phase: &'a str,
    /// Where the progress fell relative to the phase range.
    pub activity: Activity,
    /// Local progress before any track easing; `None` while the phase is inactive.
    pub local: Option<f64>,
    /// Partial updates in track order.
    pub updates: Vec<(&'a PropertyKey, Value)>,
}

/// Evaluate one phase at an already-clamped global `progress`.
pub fn evaluate_phase(phase: &Phase, progress: f64) -> PhaseOutput<'_> {
    let activity = phase.range.classify(progress);
    let local = (activity == Activity::Active).then(|| phase.range.local(progress));

    let updates = phase
        .tracks
        .iter()
        .filter_map(|track| {
            track_value(phase, track, activity, local, progress).map(|v| (&track.key, v))
        })
        .collect();

    PhaseOutput {
        phase: &phase.name,
        activity,
        local,
        updates,
    }
}

/// Evaluate every phase in declaration order.
pub fn evaluate_phases(table: &PhaseTable, progress: f64) -> Vec<PhaseOutput<'_>> {
    table
        .phases
        .iter()
        .map(|phase| evaluate_phase(phase, progress))
        .collect()
}

fn track_value(
    phase: &Phase,
    track: &Track,
    activity: Activity,
    local: Option<f64>,
    progress: f64,
) -> Option<Value> {
    match activity {
        Activity::Active => Some(track.sample(local.unwrap_or(0.0), progress)),
        Activity::Before => extrapolate(&track.before, track, 0.0, phase.range.start),
        Activity::After => extrapolate(&track.after, track, 1.0, phase.range.end),
    }
}

fn extrapolate(ext: &Extrapolation, track: &Track, local: f64, boundary: f64) -> Option<Value> {
    match ext {
        Extrapolation::Inactive => None,
        Extrapolation::Hold => Some(track.sample(local, boundary)),
        Extrapolation::Fixed(v) => Some(*v),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/evaluator.rs"]
mod tests;
