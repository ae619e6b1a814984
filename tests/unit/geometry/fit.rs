use super::*;
use kurbo::Point;

#[test]
fn wide_container_centers_square_shape() {
    let container = BoundingBox::new(0.0, 0.0, 200.0, 100.0);
    let shape = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
    let t = fit_contain(container, shape).unwrap();
    assert_eq!(t.scale, 1.0);
    assert_eq!(t.translate_x, 50.0);
    assert_eq!(t.translate_y, 0.0);
}

#[test]
fn identical_boxes_fit_with_unit_scale_and_no_translation() {
    let b = BoundingBox::new(10.0, 20.0, 50.0, 40.0);
    let t = fit_contain(b, b).unwrap();
    assert_eq!(t.scale, 1.0);
    assert_eq!(t.translate_x, 0.0);
    assert_eq!(t.translate_y, 0.0);
}

#[test]
fn fit_is_pure() {
    let container = BoundingBox::new(12.0, 7.0, 320.0, 90.0);
    let shape = BoundingBox::new(3.0, 4.0, 41.0, 17.0);
    let a = fit_contain(container, shape).unwrap();
    let b = fit_contain(container, shape).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shape_offset_is_compensated() {
    // A path whose bbox starts at (10, 10) in its own space.
    let container = BoundingBox::new(100.0, 50.0, 40.0, 40.0);
    let shape = BoundingBox::new(10.0, 10.0, 20.0, 10.0);
    let t = fit_contain(container, shape).unwrap();
    assert_eq!(t.scale, 2.0);

    let top_left = t.to_affine() * Point::new(shape.x, shape.y);
    assert!((top_left.x - 100.0).abs() < 1e-9);
    assert!((top_left.y - 60.0).abs() < 1e-9);

    let placed = t.apply_to(shape);
    assert!((placed.width - 40.0).abs() < 1e-9);
    assert!((placed.height - 20.0).abs() < 1e-9);
    let c = placed.center();
    let cc = container.center();
    assert!((c.x - cc.x).abs() < 1e-9);
    assert!((c.y - cc.y).abs() < 1e-9);
}

#[test]
fn fitted_shape_stays_inside_container() {
    let container = BoundingBox::new(-30.0, 15.0, 123.0, 77.0);
    for shape in [
        BoundingBox::new(0.0, 0.0, 10.0, 300.0),
        BoundingBox::new(5.0, -2.0, 300.0, 10.0),
        BoundingBox::new(1.0, 1.0, 3.0, 2.0),
    ] {
        let placed = fit_contain(container, shape).unwrap().apply_to(shape);
        assert!(placed.x >= container.x - 1e-9);
        assert!(placed.y >= container.y - 1e-9);
        assert!(placed.x + placed.width <= container.x + container.width + 1e-9);
        assert!(placed.y + placed.height <= container.y + container.height + 1e-9);
    }
}

#[test]
fn zero_sized_shape_is_degenerate() {
    let container = BoundingBox::new(0.0, 0.0, 200.0, 100.0);
    for shape in [
        BoundingBox::new(0.0, 0.0, 0.0, 100.0),
        BoundingBox::new(0.0, 0.0, 100.0, 0.0),
    ] {
        let err = fit_contain(container, shape).unwrap_err();
        assert!(matches!(err, RevealError::DegenerateGeometry(_)));
    }
}

#[test]
fn zero_sized_container_is_degenerate() {
    let shape = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let err = fit_contain(BoundingBox::new(0.0, 0.0, 0.0, 0.0), shape).unwrap_err();
    assert!(matches!(err, RevealError::DegenerateGeometry(_)));
}

#[test]
fn svg_transform_string() {
    let t = FitTransform {
        translate_x: 50.0,
        translate_y: 0.0,
        scale: 1.5,
    };
    assert_eq!(t.to_svg(), "translate(50, 0) scale(1.5)");
    assert_eq!(FitTransform::IDENTITY.to_affine(), Affine::IDENTITY);
}

#[test]
fn center_origin_is_relative_to_box() {
    let o = center_origin(
        BoundingBox::new(100.0, 40.0, 300.0, 200.0),
        ViewportSize {
            width: 1000.0,
            height: 800.0,
        },
    );
    assert_eq!(o.origin_x, 400.0);
    assert_eq!(o.origin_y, 360.0);
    assert_eq!(o.to_css(), "400px 360px");
}
