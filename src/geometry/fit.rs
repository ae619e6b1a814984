//! Aspect-preserving "contain" fit between two boxes, and pivot placement.
//!
//! Pure functions of their inputs; callers re-run them whenever layout changes.

use crate::foundation::core::{Affine, BoundingBox, Vec2, ViewportSize};
use crate::foundation::error::{RevealError, RevealResult};

/// Translate-then-scale transform, expressed in the shape's local coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitTransform {
    /// Horizontal offset applied before scaling.
    pub translate_x: f64,
    /// Vertical offset applied before scaling.
    pub translate_y: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl FitTransform {
    /// Leaves the shape where it is.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Same transform as a kurbo [`Affine`].
    pub fn to_affine(self) -> Affine {
        Affine::translate(Vec2::new(self.translate_x, self.translate_y)) * Affine::scale(self.scale)
    }

    /// SVG `transform` attribute value.
    pub fn to_svg(self) -> String {
        format!(
            "translate({}, {}) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }

    /// Where `shape` lands once this transform is applied to it.
    pub fn apply_to(self, shape: BoundingBox) -> BoundingBox {
        BoundingBox::from(self.to_affine().transform_rect_bbox(shape.to_rect()))
    }
}

/// Pivot expressed relative to a box's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Origin {
    /// Horizontal distance from the box's left edge.
    pub origin_x: f64,
    /// Vertical distance from the box's top edge.
    pub origin_y: f64,
}

impl Origin {
    /// CSS `transform-origin` value in pixels.
    pub fn to_css(self) -> String {
        format!("{}px {}px", self.origin_x, self.origin_y)
    }
}

/// Largest uniform scale that fits `shape` inside `container`, centered.
///
/// Fails with [`RevealError::DegenerateGeometry`] instead of producing non-finite output.
pub fn fit_contain(container: BoundingBox, shape: BoundingBox) -> RevealResult<FitTransform> {
    if shape.is_degenerate() {
        return Err(RevealError::degenerate(format!(
            "shape box must have finite, non-zero size (got {}x{})",
            shape.width, shape.height
        )));
    }
    if container.is_degenerate() {
        return Err(RevealError::degenerate(format!(
            "container box must have finite, non-zero size (got {}x{})",
            container.width, container.height
        )));
    }

    let scale = (container.width / shape.width).min(container.height / shape.height);
    let translate_x = container.x + (container.width - shape.width * scale) / 2.0 - shape.x * scale;
    let translate_y =
        container.y + (container.height - shape.height * scale) / 2.0 - shape.y * scale;

    let out = FitTransform {
        translate_x,
        translate_y,
        scale,
    };
    if !(out.translate_x.is_finite() && out.translate_y.is_finite() && out.scale.is_finite()) {
        return Err(RevealError::degenerate("fit produced a non-finite transform"));
    }
    Ok(out)
}

/// Viewport center in coordinates relative to `bbox`'s top-left corner.
///
/// Used as a scale pivot so that scaling `bbox` appears anchored on the viewport center.
pub fn center_origin(bbox: BoundingBox, viewport: ViewportSize) -> Origin {
    Origin {
        origin_x: viewport.width / 2.0 - bbox.x,
        origin_y: viewport.height / 2.0 - bbox.y,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fit.rs"]
mod tests;
