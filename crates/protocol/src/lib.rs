//! Wire-level types for the element command protocol.
//!
//! Shared by the runtime (native binding, script invocation) and the command
//! handlers so that neither depends on the other for request, response, or
//! status code definitions.
//!
//! # Main Types
//!
//! - [`CommandRequest`] - routed command with locator and body parameters
//! - [`Response`] / [`ResponseSink`] - exactly-once command outcome
//! - [`StatusCode`] - numeric wire status
//! - [`Atom`] - canonical scripts and their invocation wrapper

pub mod atoms;
pub mod request;
pub mod response;
pub mod status;

pub use atoms::{Atom, wrap_anonymous};
pub use request::{CommandRequest, LocatorMap, ParametersMap};
pub use response::{Response, ResponseError, ResponseSink, ResponseSlot, WireResponse};
pub use status::StatusCode;
