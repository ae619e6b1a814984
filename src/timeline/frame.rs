use std::collections::BTreeMap;

use crate::timeline::evaluator::PhaseOutput;
use crate::timeline::value::{PropertyKey, Value};

/// Complete set of property values for one progress sample.
///
/// A pure value: produced fresh by every evaluation and owned by the caller.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyFrame {
    /// Progress the frame was computed for, after clamping to `[0, 1]`.
    pub progress: f64,
    /// Value of every known property, sorted by key.
    pub values: BTreeMap<PropertyKey, Value>,
}

impl PropertyFrame {
    /// Value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Value under `key` when it is a scalar.
    pub fn scalar(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_scalar)
    }

    /// Number of properties in the frame.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the frame carries no properties.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &Value)> {
        self.values.iter()
    }

    /// Every value rendered as a CSS string, keyed by property name.
    pub fn to_css_map(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str().to_owned(), v.to_css()))
            .collect()
    }
}

/// Merge phase outputs over `defaults`. Later outputs overwrite earlier ones key by key.
pub fn compose<'a, I>(
    progress: f64,
    defaults: &BTreeMap<PropertyKey, Value>,
    outputs: I,
) -> PropertyFrame
where
    I: IntoIterator<Item = PhaseOutput<'a>>,
{
    let mut values = defaults.clone();
    for out in outputs {
        for (key, value) in out.updates {
            values.insert(key.clone(), value);
            tracing::trace!(phase = out.phase, key = key.as_str(), "property written");
        }
    }
    PropertyFrame { progress, values }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/frame.rs"]
mod tests;
