use super::*;
use crate::timeline::phase::Activity;

fn output<'a>(phase: &'a str, updates: Vec<(&'a PropertyKey, Value)>) -> PhaseOutput<'a> {
    PhaseOutput {
        phase,
        activity: Activity::Active,
        local: Some(0.0),
        updates,
    }
}

#[test]
fn untouched_keys_keep_defaults() {
    let mut defaults = BTreeMap::new();
    defaults.insert(PropertyKey::from("a"), Value::Scalar(1.0));
    defaults.insert(PropertyKey::from("b"), Value::Scalar(2.0));
    let a = PropertyKey::from("a");

    let frame = compose(0.5, &defaults, vec![output("p", vec![(&a, Value::Scalar(9.0))])]);
    assert_eq!(frame.progress, 0.5);
    assert_eq!(frame.scalar("a"), Some(9.0));
    assert_eq!(frame.scalar("b"), Some(2.0));
    assert_eq!(frame.len(), 2);
}

#[test]
fn later_phase_wins_on_shared_key() {
    let mut defaults = BTreeMap::new();
    defaults.insert(PropertyKey::from("scale"), Value::Scalar(1.0));
    let key = PropertyKey::from("scale");

    let frame = compose(
        0.75,
        &defaults,
        vec![
            output("first", vec![(&key, Value::Scalar(3.0))]),
            output("second", vec![(&key, Value::Scalar(4.0))]),
        ],
    );
    assert_eq!(frame.scalar("scale"), Some(4.0));
}

#[test]
fn overwriting_a_default_does_not_duplicate_the_key() {
    let mut defaults = BTreeMap::new();
    defaults.insert(PropertyKey::from("x"), Value::Scalar(0.0));
    let key = PropertyKey::from("x");
    let frame = compose(
        0.5,
        &defaults,
        vec![
            output("a", vec![(&key, Value::Scalar(1.0))]),
            output("b", vec![(&key, Value::Scalar(2.0))]),
        ],
    );
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(), ["x"]);
    assert_eq!(frame.scalar("x"), Some(2.0));
}

#[test]
fn keys_without_default_are_still_written() {
    let defaults = BTreeMap::new();
    let key = PropertyKey::from("extra");
    let frame = compose(0.0, &defaults, vec![output("p", vec![(&key, Value::Scalar(1.0))])]);
    assert_eq!(frame.scalar("extra"), Some(1.0));
}

#[test]
fn empty_outputs_yield_defaults() {
    let mut defaults = BTreeMap::new();
    defaults.insert(PropertyKey::from("a"), Value::Scalar(1.0));
    let frame = compose(0.0, &defaults, Vec::new());
    assert_eq!(frame.values, defaults);
    assert!(!frame.is_empty());
}

#[test]
fn css_map_renders_every_value() {
    let mut defaults = BTreeMap::new();
    defaults.insert(PropertyKey::from("opacity"), Value::Scalar(0.5));
    let frame = compose(0.0, &defaults, Vec::new());
    let css = frame.to_css_map();
    assert_eq!(css.get("opacity").map(String::as_str), Some("0.5"));
    assert_eq!(frame.iter().count(), 1);
}
