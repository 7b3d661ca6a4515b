/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Nested value shapes embedded in requests and responses
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod classifier;
pub mod common;
pub mod dataset;
pub mod detection;
pub mod endpoint;
pub mod flywheel;
pub mod jobs;
pub mod recognizer;

pub use classifier::*;
pub use common::*;
pub use dataset::*;
pub use detection::*;
pub use endpoint::*;
pub use flywheel::*;
pub use jobs::*;
pub use recognizer::*;
