use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn lerp_is_unclamped() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    assert_eq!(lerp(400.0, 0.0, 0.25), 300.0);
}

#[test]
fn remap_clamps_input_before_mapping() {
    assert!(approx(remap_clamped(0.35, 0.2, 0.5, 0.0, 1.0), 0.5));
    assert_eq!(remap_clamped(0.1, 0.2, 0.5, 0.0, 1.0), 0.0);
    assert_eq!(remap_clamped(0.9, 0.2, 0.5, 0.0, 1.0), 1.0);
    assert!(approx(remap_clamped(0.85, 0.8, 0.9, 1.0, 0.0), 0.5));
    assert_eq!(remap_clamped(0.95, 0.8, 0.9, 1.0, 0.0), 0.0);
}

#[test]
fn remap_with_reversed_input_range() {
    assert!(approx(remap_clamped(0.25, 1.0, 0.0, 0.0, 10.0), 7.5));
    assert_eq!(remap_clamped(2.0, 1.0, 0.0, 0.0, 10.0), 0.0);
}

#[test]
fn remap_zero_width_range_fails_safe() {
    assert_eq!(remap_clamped(0.3, 0.5, 0.5, 7.0, 9.0), 7.0);
    assert_eq!(remap_clamped(f64::NAN, 0.5, 0.5, 7.0, 9.0), 7.0);
}

#[test]
fn remap_nan_value_maps_to_out_min() {
    assert_eq!(remap_clamped(f64::NAN, 0.0, 1.0, 3.0, 4.0), 3.0);
}

#[test]
fn exponential_hits_both_endpoints() {
    assert!(approx(exponential_interpolate(300.0, 0.0), 300.0));
    assert!(approx(exponential_interpolate(300.0, 1.0), 1.0));
    assert!(approx(exponential_interpolate(70.0, 1.0), 1.0));
    // Geometric midpoint.
    assert!(approx(exponential_interpolate(100.0, 0.5), 10.0));
}

#[test]
fn exponential_decays_monotonically() {
    let mut prev = f64::INFINITY;
    for i in 0..=20 {
        let v = exponential_interpolate(300.0, f64::from(i) / 20.0);
        assert!(v < prev);
        prev = v;
    }
}

#[test]
fn color_identity_for_equal_endpoints() {
    let c = Rgb::new(233.0, 66.0, 119.0);
    for t in [0.0, 0.3, 0.5, 1.0] {
        assert_eq!(interpolate_color(c, c, t), c);
    }
}

#[test]
fn color_channels_interpolate_independently() {
    let a = Rgb::new(233.0, 66.0, 119.0);
    let b = Rgb::new(255.0, 211.0, 125.0);
    let mid = interpolate_color(a, b, 0.5);
    assert!(approx(mid.r, 244.0));
    assert!(approx(mid.g, 138.5));
    assert!(approx(mid.b, 122.0));
}

#[test]
fn vec2_lerp_matches_scalar_lerp() {
    let v = lerp_vec2(Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0), 0.25);
    assert_eq!(v, Vec2::new(2.5, 7.5));
}
