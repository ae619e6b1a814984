//! Progress-driven timeline engine for scroll-linked reveal sequences.
//!
//! A single scalar progress in `[0, 1]` (fraction of scroll travel) is mapped, through an
//! immutable [`PhaseTable`], to a complete [`PropertyFrame`] of opacities, scales, offsets, a
//! moving radial mask and a two-color gradient.
//!
//! # Pipeline overview
//!
//! 1. **Evaluate phases**: each phase classifies the progress (before / active / after), derives
//!    its local progress and emits partial updates for the keys it targets.
//! 2. **Compose**: partial updates are applied over the table defaults in declaration order;
//!    later phases win.
//! 3. **Apply**: the caller hands the frame to a [`PropertySink`].
//!
//! Geometry is separate: [`fit_contain`] computes the translate+scale that fits one box inside
//! another, preserving aspect ratio, and [`center_origin`] places a scale pivot on the viewport
//! center.
//!
//! Everything here is pure and synchronous. Scroll sources, measurement, debouncing and painting
//! belong to the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod geometry;
mod sink;
mod timeline;

pub use animation::ease::Ease;
pub use animation::interp::{
    Lerp, exponential_interpolate, interpolate_color, lerp, lerp_vec2, remap_clamped,
};
pub use foundation::core::{
    Affine, BoundingBox, Rect, Rgb, Vec2, ViewportSize, clamp_progress,
};
pub use foundation::error::{RevealError, RevealResult};
pub use geometry::fit::{FitTransform, Origin, center_origin, fit_contain};
pub use geometry::measure::{MeasurementProvider, StaticMeasurements, fit_measured};
pub use sink::{PropertySink, RecordingSink, drive, uniform_samples};
pub use timeline::continuity::{
    ContinuityOpts, Discontinuity, Handoff, boundary_handoff, scan_continuity,
};
pub use timeline::dsl::{PhaseBuilder, PhaseTableBuilder};
pub use timeline::engine::{MeasuredFrame, PhaseReport, Timeline, evaluate};
pub use timeline::evaluator::{PhaseOutput, evaluate_phase, evaluate_phases};
pub use timeline::frame::{PropertyFrame, compose};
pub use timeline::phase::{Activity, Curve, Extrapolation, Phase, PhaseRange, PhaseTable, Track};
pub use timeline::presets::{
    NAVY, PINK, Preset, YELLOW, copy_gradient_end, copy_gradient_shift, copy_gradient_start,
    hero_reveal, hero_reveal_initial, keys,
};
pub use timeline::value::{PropertyKey, RadialGradient, RadialMask, Value};
