//! Interpolation primitives shared by every curve kind.
//!
//! None of these clamp `t` unless stated; callers clamp upstream (the evaluator does so when it
//! derives local progress).

use crate::foundation::core::{Rgb, Vec2};

/// Straight-line interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// `a` at `t = 0`, `b` at `t = 1`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgb {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: lerp(a.r, b.r, t),
            g: lerp(a.g, b.g, t),
            b: lerp(a.b, b.b, t),
        }
    }
}

/// Scalar [`Lerp`].
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    <f64 as Lerp>::lerp(&a, &b, t)
}

/// Clamp `value` into `[in_min, in_max]` (either order), then map its fractional position into
/// `[out_min, out_max]`. A zero-width input range yields `out_min`.
pub fn remap_clamped(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 || !span.is_finite() {
        return out_min;
    }
    let (lo, hi) = if in_min <= in_max {
        (in_min, in_max)
    } else {
        (in_max, in_min)
    };
    let v = if value.is_nan() { in_min } else { value.clamp(lo, hi) };
    lerp(out_min, out_max, (v - in_min) / span)
}

/// `base * (1/base)^t`: starts at `base` for `t = 0` and lands on `1` for `t = 1`.
///
/// Requires `base > 0` and `base != 1`; phase tables reject other bases at validation time.
pub fn exponential_interpolate(base: f64, t: f64) -> f64 {
    base * (1.0 / base).powf(t)
}

/// Per-channel linear interpolation. `t` is expected in `[0, 1]`.
pub fn interpolate_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb::lerp(&a, &b, t)
}

/// Component-wise [`Lerp`] for offsets.
#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    <Vec2 as Lerp>::lerp(&a, &b, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
