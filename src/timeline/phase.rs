use std::collections::{BTreeMap, BTreeSet};

use crate::animation::ease::Ease;
use crate::animation::interp::{
    exponential_interpolate, interpolate_color, lerp, lerp_vec2, remap_clamped,
};
use crate::foundation::core::{Rgb, Vec2};
use crate::foundation::error::{RevealError, RevealResult};
use crate::timeline::value::{PropertyKey, RadialGradient, RadialMask, Value};

/// Value-producing rule of one track, sampled with the phase's local progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Curve {
    /// The same value for every progress.
    Constant(Value),
    /// `lerp(from, to, t)`.
    Linear {
        /// Value at local progress 0.
        from: f64,
        /// Value at local progress 1.
        to: f64,
    },
    /// `base * (1/base)^t - drift * t`.
    Exponential {
        /// Start value; the curve lands on 1 at local progress 1 before `drift` applies.
        base: f64,
        /// Linear offset subtracted over the phase.
        #[serde(default)]
        drift: f64,
    },
    /// Ignores local progress and clamp-remaps the *global* progress instead.
    GlobalRemap {
        /// Global progress mapped to `out_min`.
        in_min: f64,
        /// Global progress mapped to `out_max`.
        in_max: f64,
        /// Output at or before `in_min`.
        out_min: f64,
        /// Output at or after `in_max`.
        out_max: f64,
    },
    /// 2D offset moving from `from` to `to`.
    Translate {
        /// Offset at local progress 0.
        from: Vec2,
        /// Offset at local progress 1.
        to: Vec2,
    },
    /// Two-stop radial gradient whose colors and vertical center move with `t`.
    GradientShift {
        /// Inner stop color at `t = 0`.
        inner_from: Rgb,
        /// Inner stop color at `t = 1`.
        inner_to: Rgb,
        /// Outer stop color at `t = 0`.
        outer_from: Rgb,
        /// Outer stop color at `t = 1`.
        outer_to: Rgb,
        /// Fixed horizontal center, percent.
        center_x: f64,
        /// Vertical center at `t = 0`, percent.
        center_y_from: f64,
        /// Vertical center at `t = 1`, percent.
        center_y_to: f64,
        /// Inner stop position, percent.
        inner_stop: f64,
        /// Outer stop position, percent.
        outer_stop: f64,
    },
    /// Radial mask whose vertical center sweeps from `from` to `to` (percent).
    MaskSweep {
        /// Vertical center at `t = 0`.
        from: f64,
        /// Vertical center at `t = 1`.
        to: f64,
        /// Fixed horizontal center.
        center_x: f64,
        /// End of the opaque region.
        solid_stop: f64,
        /// End of the fade to transparent.
        fade_stop: f64,
    },
}

impl Curve {
    /// Value at `local` progress; `global` is only read by [`Curve::GlobalRemap`].
    pub fn sample(&self, local: f64, global: f64) -> Value {
        match self {
            Self::Constant(v) => *v,
            Self::Linear { from, to } => Value::Scalar(lerp(*from, *to, local)),
            Self::Exponential { base, drift } => {
                Value::Scalar(exponential_interpolate(*base, local) - drift * local)
            }
            Self::GlobalRemap {
                in_min,
                in_max,
                out_min,
                out_max,
            } => Value::Scalar(remap_clamped(global, *in_min, *in_max, *out_min, *out_max)),
            Self::Translate { from, to } => Value::Translate(lerp_vec2(*from, *to, local)),
            Self::GradientShift {
                inner_from,
                inner_to,
                outer_from,
                outer_to,
                center_x,
                center_y_from,
                center_y_to,
                inner_stop,
                outer_stop,
            } => Value::Gradient(RadialGradient {
                center_x: *center_x,
                center_y: lerp(*center_y_from, *center_y_to, local),
                inner: interpolate_color(*inner_from, *inner_to, local),
                inner_stop: *inner_stop,
                outer: interpolate_color(*outer_from, *outer_to, local),
                outer_stop: *outer_stop,
            }),
            Self::MaskSweep {
                from,
                to,
                center_x,
                solid_stop,
                fade_stop,
            } => Value::Mask(RadialMask {
                center_x: *center_x,
                center_y: lerp(*from, *to, local),
                solid_stop: *solid_stop,
                fade_stop: *fade_stop,
            }),
        }
    }

    /// Kind of [`Value`] this curve produces.
    pub fn output_kind(&self) -> &'static str {
        match self {
            Self::Constant(v) => v.kind_name(),
            Self::Linear { .. } | Self::Exponential { .. } | Self::GlobalRemap { .. } => "scalar",
            Self::Translate { .. } => "translate",
            Self::GradientShift { .. } => "gradient",
            Self::MaskSweep { .. } => "mask",
        }
    }

    fn validate(&self) -> Result<(), String> {
        if let Self::Exponential { base, .. } = self
            && (!base.is_finite() || *base <= 0.0 || *base == 1.0)
        {
            return Err(format!(
                "exponential base must be finite, > 0 and != 1 (got {base})"
            ));
        }
        // Sampling at both ends covers every parameter the curve reads; for exponentials it
        // also catches a base so small that `1 / base` overflows.
        if self.sample(0.0, 0.0).is_finite() && self.sample(1.0, 1.0).is_finite() {
            Ok(())
        } else {
            Err("curve must produce finite values over [0, 1]".to_owned())
        }
    }
}

/// What an inactive phase contributes for one track on one side of its range.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolation {
    /// Contribute nothing; an earlier phase or the default stays in place.
    #[default]
    Inactive,
    /// Keep the curve's value at the nearest range boundary.
    Hold,
    /// Contribute this value.
    Fixed(Value),
}

/// One property written by a phase.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    /// Property this track writes.
    pub key: PropertyKey,
    /// Value rule sampled while the phase is active.
    pub curve: Curve,
    /// Shape applied to local progress before sampling `curve`.
    #[serde(default)]
    pub ease: Ease,
    /// Contribution while progress is before the phase.
    #[serde(default)]
    pub before: Extrapolation,
    /// Contribution once progress has passed the phase.
    #[serde(default)]
    pub after: Extrapolation,
}

impl Track {
    /// Linear, inactive outside its phase.
    pub fn new(key: impl Into<PropertyKey>, curve: Curve) -> Self {
        Self {
            key: key.into(),
            curve,
            ease: Ease::Linear,
            before: Extrapolation::Inactive,
            after: Extrapolation::Inactive,
        }
    }

    /// Set the local progress shape.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Set the contribution before the phase.
    pub fn before(mut self, e: Extrapolation) -> Self {
        self.before = e;
        self
    }

    /// Set the contribution after the phase.
    pub fn after(mut self, e: Extrapolation) -> Self {
        self.after = e;
        self
    }

    /// Sample the curve at raw local progress, after easing.
    pub fn sample(&self, local: f64, global: f64) -> Value {
        self.curve.sample(self.ease.apply(local), global)
    }
}

/// Where a progress value falls relative to a phase range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Activity {
    /// Progress has not reached the range.
    Before,
    /// Progress is inside the range.
    Active,
    /// Progress has passed the range.
    After,
}

/// Progress sub-range. `open_start` makes the range `(start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseRange {
    /// First progress value of the range.
    pub start: f64,
    /// Last progress value of the range (inclusive).
    pub end: f64,
    /// Exclude `start` itself.
    #[serde(default)]
    pub open_start: bool,
}

impl PhaseRange {
    /// `[start, end]`.
    pub fn closed(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            open_start: false,
        }
    }

    /// `(start, end]`.
    pub fn open_start(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            open_start: true,
        }
    }

    /// Position of `progress` relative to the range.
    pub fn classify(&self, progress: f64) -> Activity {
        if progress < self.start || (self.open_start && progress == self.start) {
            Activity::Before
        } else if progress > self.end {
            Activity::After
        } else {
            Activity::Active
        }
    }

    /// `progress` remapped to `[0, 1]` over the range, clamped.
    pub fn local(&self, progress: f64) -> f64 {
        remap_clamped(progress, self.start, self.end, 0.0, 1.0)
    }
}

/// Named progress sub-range and the tracks it drives.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Phase {
    /// Unique within a table.
    pub name: String,
    /// Progress span in which the phase is active.
    pub range: PhaseRange,
    /// Properties written, at most one track per key.
    pub tracks: Vec<Track>,
}

impl Phase {
    /// Keys written by this phase, in track order.
    pub fn targets(&self) -> impl Iterator<Item = &PropertyKey> {
        self.tracks.iter().map(|t| &t.key)
    }
}

/// Immutable, ordered set of phases plus the value every key takes when no phase writes it.
///
/// Declaration order is evaluation order and the tie-break order for overlapping writes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseTable {
    /// Value of every key when no phase writes it.
    #[serde(default)]
    pub defaults: BTreeMap<PropertyKey, Value>,
    /// Phases in evaluation order.
    pub phases: Vec<Phase>,
}

impl PhaseTable {
    /// Check ranges, curves, eases and value kinds against the defaults.
    pub fn validate(&self) -> RevealResult<()> {
        for (key, value) in &self.defaults {
            if !value.is_finite() {
                return Err(RevealError::validation(format!(
                    "default for '{key}' must be finite"
                )));
            }
        }

        let mut names = BTreeSet::new();
        for phase in &self.phases {
            if phase.name.trim().is_empty() {
                return Err(RevealError::validation("phase name must be non-empty"));
            }
            if !names.insert(phase.name.as_str()) {
                return Err(RevealError::validation(format!(
                    "duplicate phase name '{}'",
                    phase.name
                )));
            }
            validate_phase(phase, &self.defaults)?;
        }

        tracing::debug!(
            phases = self.phases.len(),
            keys = self.defaults.len(),
            "phase table validated"
        );
        Ok(())
    }

    /// Phase by name.
    pub fn phase(&self, name: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.name == name)
    }

    /// Every key with a declared default, in key order.
    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.defaults.keys()
    }

    /// Sorted, de-duplicated range boundaries of all phases.
    pub fn boundaries(&self) -> Vec<f64> {
        let mut out: Vec<f64> = self
            .phases
            .iter()
            .flat_map(|p| [p.range.start, p.range.end])
            .collect();
        out.sort_by(f64::total_cmp);
        out.dedup();
        out
    }

    /// Parse and validate a JSON table.
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        let table: Self = serde_json::from_str(s)?;
        table.validate()?;
        Ok(table)
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> RevealResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn validate_phase(phase: &Phase, defaults: &BTreeMap<PropertyKey, Value>) -> RevealResult<()> {
    let r = phase.range;
    if !r.start.is_finite() || !r.end.is_finite() {
        return Err(RevealError::validation(format!(
            "phase '{}' range must be finite",
            phase.name
        )));
    }
    if r.start >= r.end {
        return Err(RevealError::validation(format!(
            "phase '{}' range start must be < end (got {}..{})",
            phase.name, r.start, r.end
        )));
    }

    let mut seen = BTreeSet::new();
    for track in &phase.tracks {
        if !seen.insert(&track.key) {
            return Err(RevealError::validation(format!(
                "phase '{}' targets '{}' more than once",
                phase.name, track.key
            )));
        }
        track
            .curve
            .validate()
            .and_then(|()| track.ease.validate())
            .map_err(|e| {
                RevealError::validation(format!(
                    "phase '{}' track '{}': {e}",
                    phase.name, track.key
                ))
            })?;

        let kind = track.curve.output_kind();
        let Some(default) = defaults.get(&track.key) else {
            return Err(RevealError::validation(format!(
                "phase '{}' targets '{}' which has no default value",
                phase.name, track.key
            )));
        };
        if default.kind_name() != kind {
            return Err(RevealError::validation(format!(
                "phase '{}' writes {kind} to '{}' whose default is {}",
                phase.name,
                track.key,
                default.kind_name()
            )));
        }
        for ext in [&track.before, &track.after] {
            if let Extrapolation::Fixed(v) = ext
                && (v.kind_name() != kind || !v.is_finite())
            {
                return Err(RevealError::validation(format!(
                    "phase '{}' track '{}' has an extrapolation value that is not a finite {kind}",
                    phase.name, track.key
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/phase.rs"]
mod tests;
