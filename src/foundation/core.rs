pub use kurbo::{Affine, Rect, Vec2};

/// Axis-aligned box in a shared coordinate space (viewport-relative pixels in practice).
///
/// Boxes are supplied per call by a measurement provider; nothing in the crate caches them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent; must be positive to be usable.
    pub width: f64,
    /// Vertical extent; must be positive to be usable.
    pub height: f64,
}

impl BoundingBox {
    /// Box with top-left corner `(x, y)`.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the box cannot be used as a fit source or target.
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || !(self.x.is_finite() && self.y.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Same box as a kurbo [`Rect`].
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Midpoint of the box.
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

impl From<Rect> for BoundingBox {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

/// Size of the visible area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSize {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

/// Straight RGB color with `f64` channels in `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl Rgb {
    /// Color from raw channels; nothing is clamped until rendering.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(r, g, b)` with channels rounded and clamped to bytes.
    pub fn to_css(self) -> String {
        fn byte(c: f64) -> u8 {
            c.round().clamp(0.0, 255.0) as u8
        }
        format!("rgb({}, {}, {})", byte(self.r), byte(self.g), byte(self.b))
    }
}

/// Clamp an untrusted progress sample into `[0, 1]`. NaN maps to 0.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
