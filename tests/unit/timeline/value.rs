use super::*;

fn gradient(center_y: f64, inner: Rgb) -> RadialGradient {
    RadialGradient {
        center_x: 50.0,
        center_y,
        inner,
        inner_stop: 0.0,
        outer: Rgb::new(32.0, 31.0, 66.0),
        outer_stop: 70.0,
    }
}

#[test]
fn keys_compare_by_string_and_borrow_as_str() {
    let mut map = std::collections::BTreeMap::new();
    map.insert(PropertyKey::from("copyScale"), Value::Scalar(1.3));
    assert_eq!(map.get("copyScale"), Some(&Value::Scalar(1.3)));
    assert_eq!(PropertyKey::new("a").to_string(), "a");
}

#[test]
fn gradient_css_matches_radial_gradient_syntax() {
    let g = gradient(100.0, Rgb::new(233.0, 66.0, 119.0));
    assert_eq!(
        g.to_css(),
        "radial-gradient(circle at 50% 100%, rgb(233, 66, 119) 0%, rgb(32, 31, 66) 70%)"
    );
}

#[test]
fn mask_css_matches_radial_mask_syntax() {
    let m = RadialMask {
        center_x: 50.0,
        center_y: 400.0,
        solid_stop: 70.0,
        fade_stop: 80.0,
    };
    assert_eq!(
        m.to_css(),
        "radial-gradient(circle at 50% 400%, #000 70%, transparent 80%)"
    );
    assert_eq!(Value::Mask(m).to_css(), m.to_css());
}

#[test]
fn accessors_match_variant() {
    let v = Value::Scalar(0.5);
    assert_eq!(v.as_scalar(), Some(0.5));
    assert!(v.as_mask().is_none());
    assert!(v.as_gradient().is_none());
    let t = Value::Translate(Vec2::new(1.0, 2.0));
    assert_eq!(t.as_translate(), Some(Vec2::new(1.0, 2.0)));
    assert_eq!(t.kind_name(), "translate");
    assert_eq!(t.to_css(), "translate(1px, 2px)");
}

#[test]
fn distance_is_kind_aware() {
    assert_eq!(Value::Scalar(1.0).distance(&Value::Scalar(0.25)), Some(0.75));
    assert_eq!(
        Value::Translate(Vec2::new(0.0, 0.0)).distance(&Value::Translate(Vec2::new(3.0, 4.0))),
        Some(5.0)
    );
    assert_eq!(Value::Scalar(1.0).distance(&Value::Translate(Vec2::ZERO)), None);
}

#[test]
fn gradient_distance_normalizes_channels() {
    let a = Value::Gradient(gradient(50.0, Rgb::new(0.0, 0.0, 0.0)));
    let b = Value::Gradient(gradient(50.0, Rgb::new(255.0, 0.0, 0.0)));
    assert_eq!(a.distance(&b), Some(1.0));

    let c = Value::Gradient(gradient(52.0, Rgb::new(0.0, 0.0, 0.0)));
    assert_eq!(a.distance(&c), Some(2.0));
}

#[test]
fn values_roundtrip_through_json() {
    let v = Value::Gradient(gradient(10.0, Rgb::new(1.0, 2.0, 3.0)));
    let s = serde_json::to_string(&v).unwrap();
    let back: Value = serde_json::from_str(&s).unwrap();
    assert_eq!(back, v);
}

#[test]
fn finiteness_covers_every_field() {
    assert!(Value::Scalar(1.0).is_finite());
    assert!(!Value::Scalar(f64::NAN).is_finite());
    assert!(!Value::Gradient(gradient(f64::INFINITY, Rgb::new(0.0, 0.0, 0.0))).is_finite());
    assert!(!Value::Gradient(gradient(0.0, Rgb::new(f64::NAN, 0.0, 0.0))).is_finite());
}
