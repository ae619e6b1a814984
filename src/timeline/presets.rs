//! Built-in phase tables for the hero reveal sequence.
//!
//! [`hero_reveal`] is the canonical table. [`hero_reveal_initial`] keeps the constants of the
//! first iteration of the sequence (longer intro fade, a single long scale phase, no logo
//! container handoff) and is mostly useful for comparing the two.

use crate::foundation::core::Rgb;
use crate::foundation::error::RevealResult;
use crate::timeline::dsl::{PhaseBuilder, PhaseTableBuilder};
use crate::timeline::phase::{Curve, Extrapolation, PhaseTable, Track};
use crate::timeline::value::{RadialGradient, RadialMask, Value};

/// Property keys used by the built-in tables.
pub mod keys {
    /// Opacity of the hero logo.
    pub const HERO_LOGO_OPACITY: &str = "heroLogoOpacity";
    /// Opacity of the hero description.
    pub const HERO_DESC_OPACITY: &str = "heroDescOpacity";
    /// Scale of the hero image.
    pub const HERO_IMAGE_SCALE: &str = "heroImageScale";
    /// Scale of the logo overlay.
    pub const OVERLAY_SCALE: &str = "overlayScale";
    /// Horizontal offset of the logo overlay.
    pub const OVERLAY_TRANSLATE_X: &str = "overlayTranslateX";
    /// Opacity of the white fade overlay.
    pub const FADE_OVERLAY_OPACITY: &str = "fadeOverlayOpacity";
    /// Opacity of the logo container.
    pub const LOGO_CONTAINER_OPACITY: &str = "logoContainerOpacity";
    /// Opacity of the masked logo.
    pub const LOGO_MASK_OPACITY: &str = "logoMaskOpacity";
    /// Scale of the logo container.
    pub const LOGO_CONTAINER_SCALE: &str = "logoContainerScale";
    /// Radial mask that opens over the hero.
    pub const MASK_BOUNDARY_PERCENT: &str = "maskBoundaryPercent";
    /// Opacity of the radial gradient overlay.
    pub const RADIAL_OVERLAY_OPACITY: &str = "radialOverlayOpacity";
    /// Scale of the copy block.
    pub const COPY_SCALE: &str = "copyScale";
    /// Opacity of the copy block.
    pub const COPY_OPACITY: &str = "copyOpacity";
    /// Background gradient behind the copy block.
    pub const COPY_GRADIENT: &str = "copyGradient";
}

/// Brand pink.
pub const PINK: Rgb = Rgb::new(233.0, 66.0, 119.0);
/// Brand yellow.
pub const YELLOW: Rgb = Rgb::new(255.0, 211.0, 125.0);
/// Brand navy.
pub const NAVY: Rgb = Rgb::new(32.0, 31.0, 66.0);

const OVERLAY_SCALE_BASE: f64 = 300.0;
// Percent of the overlay width.
const OVERLAY_OFFSET_BASE: f64 = 70.0;

const MASK_CENTER_X: f64 = 50.0;
const MASK_SOLID_STOP: f64 = 70.0;
const MASK_FADE_STOP: f64 = 80.0;
const MASK_START: f64 = 400.0;

const GRADIENT_INNER_STOP: f64 = 0.0;
const GRADIENT_OUTER_STOP: f64 = 70.0;

/// Built-in sequences, selectable by name from the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Preset {
    /// [`hero_reveal`].
    Refined,
    /// [`hero_reveal_initial`].
    Initial,
}

impl Preset {
    /// Every preset, canonical first.
    pub const ALL: [Preset; 2] = [Preset::Refined, Preset::Initial];

    /// Lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Refined => "refined",
            Self::Initial => "initial",
        }
    }

    /// Build the preset's phase table.
    pub fn table(self) -> RevealResult<PhaseTable> {
        match self {
            Self::Refined => hero_reveal(),
            Self::Initial => hero_reveal_initial(),
        }
    }
}

/// Pink -> yellow inner stop, navy -> pink outer stop, center rising from 100% to 0%.
pub fn copy_gradient_shift() -> Curve {
    Curve::GradientShift {
        inner_from: PINK,
        inner_to: YELLOW,
        outer_from: NAVY,
        outer_to: PINK,
        center_x: 50.0,
        center_y_from: 100.0,
        center_y_to: 0.0,
        inner_stop: GRADIENT_INNER_STOP,
        outer_stop: GRADIENT_OUTER_STOP,
    }
}

/// Gradient the copy shows before the color shift starts.
pub fn copy_gradient_start() -> RadialGradient {
    RadialGradient {
        center_x: 50.0,
        center_y: 100.0,
        inner: PINK,
        inner_stop: GRADIENT_INNER_STOP,
        outer: NAVY,
        outer_stop: GRADIENT_OUTER_STOP,
    }
}

/// Fully shifted end state of the copy gradient.
pub fn copy_gradient_end() -> RadialGradient {
    RadialGradient {
        center_x: 50.0,
        center_y: 0.0,
        inner: YELLOW,
        inner_stop: GRADIENT_INNER_STOP,
        outer: PINK,
        outer_stop: GRADIENT_OUTER_STOP,
    }
}

fn mask_sweep(from: f64, to: f64) -> Curve {
    Curve::MaskSweep {
        from,
        to,
        center_x: MASK_CENTER_X,
        solid_stop: MASK_SOLID_STOP,
        fade_stop: MASK_FADE_STOP,
    }
}

fn mask_at(center_y: f64) -> Value {
    Value::Mask(RadialMask {
        center_x: MASK_CENTER_X,
        center_y,
        solid_stop: MASK_SOLID_STOP,
        fade_stop: MASK_FADE_STOP,
    })
}

fn linear(from: f64, to: f64) -> Curve {
    Curve::Linear { from, to }
}

fn global_remap(in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> Curve {
    Curve::GlobalRemap {
        in_min,
        in_max,
        out_min,
        out_max,
    }
}

fn overlay_scale() -> Curve {
    Curve::Exponential {
        base: OVERLAY_SCALE_BASE,
        drift: 0.0,
    }
}

fn overlay_offset() -> Curve {
    Curve::Exponential {
        base: OVERLAY_OFFSET_BASE,
        drift: 1.0,
    }
}

/// Defaults shared by both tables: every key at the value it has before scrolling starts.
fn hero_defaults(builder: PhaseTableBuilder, copy_scale: f64) -> RevealResult<PhaseTableBuilder> {
    builder
        .default_value(keys::HERO_LOGO_OPACITY, 1.0)?
        .default_value(keys::HERO_DESC_OPACITY, 1.0)?
        .default_value(keys::HERO_IMAGE_SCALE, 1.5)?
        .default_value(keys::OVERLAY_SCALE, OVERLAY_SCALE_BASE)?
        .default_value(keys::OVERLAY_TRANSLATE_X, OVERLAY_OFFSET_BASE)?
        .default_value(keys::FADE_OVERLAY_OPACITY, 0.0)?
        .default_value(keys::MASK_BOUNDARY_PERCENT, mask_at(MASK_START))?
        .default_value(keys::RADIAL_OVERLAY_OPACITY, 0.0)?
        .default_value(keys::COPY_SCALE, copy_scale)?
        .default_value(keys::COPY_OPACITY, 0.0)?
        .default_value(keys::COPY_GRADIENT, Value::Gradient(copy_gradient_start()))
}

/// The canonical hero reveal table.
pub fn hero_reveal() -> RevealResult<PhaseTable> {
    hero_defaults(PhaseTableBuilder::new(), 1.3)?
        .default_value(keys::LOGO_CONTAINER_OPACITY, 0.0)?
        .default_value(keys::LOGO_MASK_OPACITY, 1.0)?
        .default_value(keys::LOGO_CONTAINER_SCALE, 1.0)?
        .phase(
            PhaseBuilder::new("introFade", 0.0, 0.10)
                .held(keys::HERO_LOGO_OPACITY, linear(1.0, 0.0))
                .held(keys::HERO_DESC_OPACITY, linear(1.0, 0.0))
                .build(),
        )
        .phase(
            PhaseBuilder::new("scaleMain", 0.0, 0.55)
                .held(keys::HERO_IMAGE_SCALE, linear(1.5, 1.0))
                .held(keys::OVERLAY_SCALE, overlay_scale())
                .held(keys::OVERLAY_TRANSLATE_X, overlay_offset())
                .held(keys::FADE_OVERLAY_OPACITY, global_remap(0.2, 0.5, 0.0, 1.0))
                .track(
                    Track::new(keys::LOGO_CONTAINER_OPACITY, Curve::Constant(Value::Scalar(0.0)))
                        .after(Extrapolation::Fixed(Value::Scalar(1.0))),
                )
                .track(
                    Track::new(keys::LOGO_MASK_OPACITY, Curve::Constant(Value::Scalar(1.0)))
                        .after(Extrapolation::Fixed(Value::Scalar(0.0))),
                )
                .build(),
        )
        .phase(
            PhaseBuilder::new("radialIn", 0.55, 0.75)
                .held(keys::MASK_BOUNDARY_PERCENT, mask_sweep(MASK_START, 0.0))
                // Opacity overshoots 1 on purpose; sinks clamp.
                .held(keys::RADIAL_OVERLAY_OPACITY, linear(0.0, 2.0))
                .build(),
        )
        .phase(
            PhaseBuilder::new("radialOut", 0.80, 1.0)
                .held(keys::MASK_BOUNDARY_PERCENT, mask_sweep(0.0, -500.0))
                .held(keys::LOGO_CONTAINER_OPACITY, global_remap(0.80, 0.90, 1.0, 0.0))
                .build(),
        )
        .phase(
            PhaseBuilder::new("logoScaleDown", 0.60, 0.80)
                .open_start()
                .held(keys::LOGO_CONTAINER_SCALE, linear(1.0, 0.9))
                .build(),
        )
        .phase(
            PhaseBuilder::new("copyReveal", 0.50, 0.70)
                .held(keys::COPY_SCALE, linear(1.3, 1.0))
                .track(
                    Track::new(keys::COPY_OPACITY, linear(0.0, 1.0))
                        .before(Extrapolation::Fixed(Value::Scalar(0.0)))
                        .after(Extrapolation::Hold),
                )
                .build(),
        )
        .phase(
            PhaseBuilder::new("copyColorShift", 0.70, 0.80)
                .open_start()
                .held(keys::COPY_GRADIENT, copy_gradient_shift())
                .held(keys::COPY_SCALE, linear(1.0, 0.9))
                .build(),
        )
        .build()
}

/// The first iteration's constants: one long scale phase over `[0, 0.85]`, a radial reveal
/// over `[0.6, 1]` that stops at 230%, and the copy color shift over the last 15%.
pub fn hero_reveal_initial() -> RevealResult<PhaseTable> {
    hero_defaults(PhaseTableBuilder::new(), 1.25)?
        .phase(
            PhaseBuilder::new("introFade", 0.0, 0.15)
                .held(keys::HERO_LOGO_OPACITY, linear(1.0, 0.0))
                .held(keys::HERO_DESC_OPACITY, linear(1.0, 0.0))
                .build(),
        )
        .phase(
            PhaseBuilder::new("scaleMain", 0.0, 0.85)
                .held(keys::HERO_IMAGE_SCALE, linear(1.5, 1.0))
                .held(keys::OVERLAY_SCALE, overlay_scale())
                .held(keys::OVERLAY_TRANSLATE_X, overlay_offset())
                .held(keys::FADE_OVERLAY_OPACITY, global_remap(0.25, 0.65, 0.0, 1.0))
                .build(),
        )
        .phase(
            PhaseBuilder::new("radialReveal", 0.60, 1.0)
                .held(keys::MASK_BOUNDARY_PERCENT, mask_sweep(MASK_START, 230.0))
                .held(keys::RADIAL_OVERLAY_OPACITY, linear(0.0, 2.0))
                .build(),
        )
        .phase(
            PhaseBuilder::new("copyColorShift", 0.85, 1.0)
                .held(keys::COPY_GRADIENT, copy_gradient_shift())
                .build(),
        )
        .phase(
            PhaseBuilder::new("copyReveal", 0.60, 0.85)
                .held(keys::COPY_SCALE, linear(1.25, 1.0))
                .track(
                    Track::new(keys::COPY_OPACITY, linear(0.0, 1.0))
                        .before(Extrapolation::Fixed(Value::Scalar(0.0)))
                        .after(Extrapolation::Hold),
                )
                .build(),
        )
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/presets.rs"]
mod tests;
