//! Typed property values and the keys that address them.

use std::borrow::Borrow;
use std::fmt;

use crate::foundation::core::{Rgb, Vec2};

/// Opaque identifier of one animatable channel (`"heroImageScale"`, `"copyGradient"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PropertyKey(String);

impl PropertyKey {
    /// Wrap a property name.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The property name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PropertyKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for PropertyKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two-stop radial gradient; positions and stops are percentages.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadialGradient {
    /// Horizontal center.
    pub center_x: f64,
    /// Vertical center.
    pub center_y: f64,
    /// Color at the inner stop.
    pub inner: Rgb,
    /// Radius of the inner stop.
    pub inner_stop: f64,
    /// Color at the outer stop.
    pub outer: Rgb,
    /// Radius of the outer stop.
    pub outer_stop: f64,
}

impl RadialGradient {
    /// CSS `radial-gradient(...)` value.
    pub fn to_css(&self) -> String {
        format!(
            "radial-gradient(circle at {}% {}%, {} {}%, {} {}%)",
            self.center_x,
            self.center_y,
            self.inner.to_css(),
            self.inner_stop,
            self.outer.to_css(),
            self.outer_stop
        )
    }
}

/// Radial alpha mask: opaque up to `solid_stop`, fading out by `fade_stop`. All percentages.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadialMask {
    /// Horizontal center.
    pub center_x: f64,
    /// Vertical center.
    pub center_y: f64,
    /// Radius up to which the mask is opaque.
    pub solid_stop: f64,
    /// Radius at which the mask is fully transparent.
    pub fade_stop: f64,
}

impl RadialMask {
    /// CSS `mask-image` value.
    pub fn to_css(&self) -> String {
        format!(
            "radial-gradient(circle at {}% {}%, #000 {}%, transparent {}%)",
            self.center_x, self.center_y, self.solid_stop, self.fade_stop
        )
    }
}

/// Value of one property in a frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// Opacity, scale or any other plain number.
    Scalar(f64),
    /// 2D offset.
    Translate(Vec2),
    /// Background gradient.
    Gradient(RadialGradient),
    /// Alpha mask.
    Mask(RadialMask),
}

impl Value {
    /// The number, if this is a [`Value::Scalar`].
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// The offset, if this is a [`Value::Translate`].
    pub fn as_translate(&self) -> Option<Vec2> {
        match self {
            Self::Translate(v) => Some(*v),
            _ => None,
        }
    }

    /// The gradient, if this is a [`Value::Gradient`].
    pub fn as_gradient(&self) -> Option<&RadialGradient> {
        match self {
            Self::Gradient(g) => Some(g),
            _ => None,
        }
    }

    /// The mask, if this is a [`Value::Mask`].
    pub fn as_mask(&self) -> Option<&RadialMask> {
        match self {
            Self::Mask(m) => Some(m),
            _ => None,
        }
    }

    /// Lowercase name of the variant, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Translate(_) => "translate",
            Self::Gradient(_) => "gradient",
            Self::Mask(_) => "mask",
        }
    }

    /// Visual distance between two values of the same kind; `None` when the kinds differ.
    ///
    /// Color channels are measured in `[0, 1]` units so a full channel swing counts as 1.
    pub fn distance(&self, other: &Value) -> Option<f64> {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => Some((a - b).abs()),
            (Self::Translate(a), Self::Translate(b)) => Some((*a - *b).hypot()),
            (Self::Gradient(a), Self::Gradient(b)) => {
                let channels = [
                    a.inner.r - b.inner.r,
                    a.inner.g - b.inner.g,
                    a.inner.b - b.inner.b,
                    a.outer.r - b.outer.r,
                    a.outer.g - b.outer.g,
                    a.outer.b - b.outer.b,
                ];
                let color = channels.iter().fold(0.0f64, |m, d| m.max(d.abs())) / 255.0;
                let geometry = [
                    a.center_x - b.center_x,
                    a.center_y - b.center_y,
                    a.inner_stop - b.inner_stop,
                    a.outer_stop - b.outer_stop,
                ]
                .iter()
                .fold(0.0f64, |m, d| m.max(d.abs()));
                Some(color.max(geometry))
            }
            (Self::Mask(a), Self::Mask(b)) => Some(
                [
                    a.center_x - b.center_x,
                    a.center_y - b.center_y,
                    a.solid_stop - b.solid_stop,
                    a.fade_stop - b.fade_stop,
                ]
                .iter()
                .fold(0.0f64, |m, d| m.max(d.abs())),
            ),
            _ => None,
        }
    }

    /// CSS-ready rendering of the value (numbers are emitted as-is).
    pub fn to_css(&self) -> String {
        match self {
            Self::Scalar(v) => v.to_string(),
            Self::Translate(v) => format!("translate({}px, {}px)", v.x, v.y),
            Self::Gradient(g) => g.to_css(),
            Self::Mask(m) => m.to_css(),
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        match self {
            Self::Scalar(v) => v.is_finite(),
            Self::Translate(v) => v.is_finite(),
            Self::Gradient(g) => [
                g.center_x,
                g.center_y,
                g.inner_stop,
                g.outer_stop,
                g.inner.r,
                g.inner.g,
                g.inner.b,
                g.outer.r,
                g.outer.g,
                g.outer.b,
            ]
            .iter()
            .all(|v| v.is_finite()),
            Self::Mask(m) => [m.center_x, m.center_y, m.solid_stop, m.fade_stop]
                .iter()
                .all(|v| v.is_finite()),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/value.rs"]
mod tests;
