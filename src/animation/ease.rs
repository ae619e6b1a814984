//! Shaping of a track's local progress before its curve is sampled.
//!
//! Every shape keeps `0 -> 0` and `1 -> 1`, so a held boundary value is the same with or without
//! easing.

/// Monotonic remap of local progress in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Progress is used as-is.
    #[default]
    Linear,
    /// `t^power`: slow start.
    In(f64),
    /// `1 - (1 - t)^power`: slow finish.
    Out(f64),
    /// `In` over the first half mirrored into `Out` over the second.
    InOut(f64),
    /// Hermite smoothstep `3t^2 - 2t^3`.
    Smooth,
}

impl Ease {
    /// Shape `t`, clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::In(power) => t.powf(power),
            Self::Out(power) => 1.0 - (1.0 - t).powf(power),
            Self::InOut(power) => {
                if t < 0.5 {
                    0.5 * (2.0 * t).powf(power)
                } else {
                    1.0 - 0.5 * (2.0 - 2.0 * t).powf(power)
                }
            }
            Self::Smooth => t * t * (3.0 - 2.0 * t),
        }
    }

    pub(crate) fn validate(self) -> Result<(), String> {
        match self {
            Self::In(power) | Self::Out(power) | Self::InOut(power)
                if !(power.is_finite() && power > 0.0) =>
            {
                Err(format!("ease power must be finite and > 0 (got {power})"))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
