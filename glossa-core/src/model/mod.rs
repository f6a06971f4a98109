//! Language model types
//!
//! `training` produces the per-language frequency tables and the JSON
//! artifacts consumed by the detection runtime; `test_data` chops an input
//! text into the n-gram sets the runtime scores against those artifacts.

mod json;
mod test_data;
mod training;

pub use json::JsonLanguageModel;
pub use test_data::TestDataLanguageModel;
pub use training::TrainingDataLanguageModel;
