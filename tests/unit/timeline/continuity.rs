use super::*;
use crate::timeline::presets::{Preset, keys};

#[test]
fn refined_table_only_jumps_on_the_logo_handoff() {
    let table = Preset::Refined.table().unwrap();
    let found = scan_continuity(&table, ContinuityOpts::default());

    let mut keys_found: Vec<&str> = found.iter().map(|d| d.key.as_str()).collect();
    keys_found.sort_unstable();
    assert_eq!(
        keys_found,
        [keys::LOGO_CONTAINER_OPACITY, keys::LOGO_MASK_OPACITY]
    );
    for d in &found {
        assert_eq!(d.at, 0.55);
        assert!((d.jump - 1.0).abs() < 1e-9);
    }
}

#[test]
fn initial_table_is_continuous() {
    let table = Preset::Initial.table().unwrap();
    assert!(scan_continuity(&table, ContinuityOpts::default()).is_empty());
}

#[test]
fn hero_image_scale_hands_off_without_a_jump() {
    let table = Preset::Refined.table().unwrap();
    let h = boundary_handoff(&table, "scaleMain", keys::HERO_IMAGE_SCALE).unwrap();
    assert_eq!(h.at, 0.55);
    assert_eq!(h.curve_end, Value::Scalar(1.0));
    assert!(h.is_continuous(1e-12));

    let after = evaluate(0.55 + 1e-9, &table);
    assert!((after.scalar(keys::HERO_IMAGE_SCALE).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn handoff_flags_overridden_curves() {
    // copyColorShift starts open at 0.7, so copyReveal still owns copyScale there.
    let table = Preset::Refined.table().unwrap();
    let copy = boundary_handoff(&table, "copyReveal", keys::COPY_SCALE).unwrap();
    assert!(copy.is_continuous(1e-9));

    let logo = boundary_handoff(&table, "scaleMain", keys::LOGO_CONTAINER_OPACITY).unwrap();
    // At 0.55 scaleMain is still active and writes 0.
    assert!(logo.is_continuous(1e-9));
}

#[test]
fn unknown_phase_or_key_is_an_error() {
    let table = Preset::Refined.table().unwrap();
    assert!(boundary_handoff(&table, "nope", keys::COPY_SCALE).is_err());
    assert!(boundary_handoff(&table, "introFade", keys::COPY_SCALE).is_err());
}

#[test]
fn tight_tolerance_reports_steep_curves() {
    let table = Preset::Refined.table().unwrap();
    let opts = ContinuityOpts {
        epsilon: 1e-3,
        tolerance: 1e-6,
    };
    // With a coarse epsilon, steep but continuous curves register as jumps too.
    assert!(scan_continuity(&table, opts).len() > 2);
}
