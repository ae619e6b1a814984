use std::collections::BTreeMap;

use crate::foundation::error::{RevealError, RevealResult};
use crate::timeline::phase::{Curve, Extrapolation, Phase, PhaseRange, PhaseTable, Track};
use crate::timeline::value::{PropertyKey, Value};

/// Fluent construction of a [`PhaseTable`]; `build` validates.
#[derive(Default)]
pub struct PhaseTableBuilder {
    defaults: BTreeMap<PropertyKey, Value>,
    phases: Vec<Phase>,
}

impl PhaseTableBuilder {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the default for `key`. Declaring a key twice is an error.
    pub fn default_value(
        mut self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
    ) -> RevealResult<Self> {
        let key = key.into();
        if self.defaults.contains_key(&key) {
            return Err(RevealError::validation(format!("duplicate default for '{key}'")));
        }
        self.defaults.insert(key, value.into());
        Ok(self)
    }

    /// Append a phase; later phases win on shared keys.
    pub fn phase(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }

    /// Assemble and validate the table.
    pub fn build(self) -> RevealResult<PhaseTable> {
        let table = PhaseTable {
            defaults: self.defaults,
            phases: self.phases,
        };
        table.validate()?;
        Ok(table)
    }
}

/// Fluent construction of a single [`Phase`].
pub struct PhaseBuilder {
    name: String,
    range: PhaseRange,
    tracks: Vec<Track>,
}

impl PhaseBuilder {
    /// Phase over the closed range `[start, end]`.
    pub fn new(name: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            range: PhaseRange::closed(start, end),
            tracks: Vec::new(),
        }
    }

    /// Make the range `(start, end]`.
    pub fn open_start(mut self) -> Self {
        self.range.open_start = true;
        self
    }

    /// Add a fully configured track.
    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Track that holds its boundary value once the phase has passed.
    pub fn held(self, key: impl Into<PropertyKey>, curve: Curve) -> Self {
        self.track(Track::new(key, curve).after(Extrapolation::Hold))
    }

    /// Finish the phase. Validation happens when the table is built.
    pub fn build(self) -> Phase {
        Phase {
            name: self.name,
            range: self.range,
            tracks: self.tracks,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
