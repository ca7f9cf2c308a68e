//! Command responses and the write-once sink handlers report into.
//!
//! # Main Types
//!
//! - [`Response`] - success value or `(status, message)` error
//! - [`ResponseSink`] - write side used by command handlers
//! - [`ResponseSlot`] - write-once [`ResponseSink`] holding a single [`Response`]
//! - [`WireResponse`] - JSON envelope `{"status": .., "value": ..}`

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::status::StatusCode;

/// Errors raised by misuse of a [`ResponseSink`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
	/// A second outcome was written to a slot that already holds one.
	#[error("response already set (existing status {existing})")]
	AlreadySet { existing: StatusCode },

	/// The slot was read before any outcome was written.
	#[error("response was never set")]
	NotSet,
}

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
	Success(Value),
	Error { status: StatusCode, message: String },
}

impl Response {
	pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
		Response::Error {
			status,
			message: message.into(),
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, Response::Success(_))
	}

	/// Status code as sent on the wire; [`StatusCode::SUCCESS`] for successes.
	pub fn status(&self) -> StatusCode {
		match self {
			Response::Success(_) => StatusCode::SUCCESS,
			Response::Error { status, .. } => *status,
		}
	}

	/// Error message, if this is an error response.
	pub fn message(&self) -> Option<&str> {
		match self {
			Response::Success(_) => None,
			Response::Error { message, .. } => Some(message),
		}
	}

	/// Success payload, if this is a success response.
	pub fn value(&self) -> Option<&Value> {
		match self {
			Response::Success(value) => Some(value),
			Response::Error { .. } => None,
		}
	}

	pub fn to_wire(&self) -> WireResponse {
		match self {
			Response::Success(value) => WireResponse {
				status: StatusCode::SUCCESS,
				value: value.clone(),
			},
			Response::Error { status, message } => WireResponse {
				status: *status,
				value: serde_json::json!({ "message": message }),
			},
		}
	}
}

/// JSON wire envelope for a [`Response`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireResponse {
	pub status: StatusCode,
	pub value: Value,
}

impl From<WireResponse> for Response {
	fn from(wire: WireResponse) -> Self {
		if wire.status.is_success() {
			return Response::Success(wire.value);
		}
		let message = wire
			.value
			.get("message")
			.and_then(Value::as_str)
			.unwrap_or_default()
			.to_string();
		Response::Error {
			status: wire.status,
			message,
		}
	}
}

/// Write side of a command response.
///
/// Implementations accept exactly one call to either method; the second call
/// is a contract violation and must be rejected.
pub trait ResponseSink {
	fn set_success_response(&mut self, value: Value) -> Result<(), ResponseError>;

	fn set_error_response(&mut self, status: StatusCode, message: &str) -> Result<(), ResponseError>;
}

/// Write-once holder for a single [`Response`].
#[derive(Debug, Default)]
pub struct ResponseSlot {
	response: Option<Response>,
}

impl ResponseSlot {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_set(&self) -> bool {
		self.response.is_some()
	}

	pub fn get(&self) -> Option<&Response> {
		self.response.as_ref()
	}

	pub fn into_response(self) -> Result<Response, ResponseError> {
		self.response.ok_or(ResponseError::NotSet)
	}

	fn put(&mut self, response: Response) -> Result<(), ResponseError> {
		if let Some(existing) = &self.response {
			return Err(ResponseError::AlreadySet {
				existing: existing.status(),
			});
		}
		self.response = Some(response);
		Ok(())
	}
}

impl ResponseSink for ResponseSlot {
	fn set_success_response(&mut self, value: Value) -> Result<(), ResponseError> {
		self.put(Response::Success(value))
	}

	fn set_error_response(&mut self, status: StatusCode, message: &str) -> Result<(), ResponseError> {
		self.put(Response::error(status, message))
	}
}
