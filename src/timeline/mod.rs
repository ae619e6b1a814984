pub mod continuity;
pub mod dsl;
pub mod engine;
pub mod evaluator;
pub mod frame;
pub mod phase;
pub mod presets;
pub mod value;
