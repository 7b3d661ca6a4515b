/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod blob;
pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;
mod serde_helpers;

pub(crate) use serde_helpers::epoch_seconds;

/// Floating point member. Totally ordered so shapes keep `Eq` and `Hash`;
/// on the wire it is a plain JSON number.
pub type Double = ordered_float::OrderedFloat<f64>;

pub use blob::Blob;
pub use enums::*;
pub use models::*;
pub use requests::*;
pub use responses::*;
