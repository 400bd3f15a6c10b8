//! Data models

pub mod engine;
pub mod sensor;
pub mod prediction;

pub use engine::*;
pub use sensor::*;
pub use prediction::*;
