/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Comprehend model crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Typed request/response model for Amazon Comprehend.
//!
//! Build a request shape, hand it to [`codec::encode`] for an unsigned
//! [`WireRequest`], send it with any HTTP stack, then turn the reply into the
//! typed output with [`codec::decode_result`].

pub mod codec;
pub mod config;
pub mod contract;
pub mod error;
pub mod operation;
pub mod types;

pub use codec::{WireRequest, decode, decode_error, decode_result, encode};
pub use config::ServiceConfig;
pub use error::{ComprehendError, Result, ServiceError, ServiceErrorKind};
pub use operation::{OPERATIONS, Operation, OperationEntry, find_operation};

// Re-export all types
pub use types::*;
