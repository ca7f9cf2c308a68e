//! Error types for the driver runtime.

use std::time::Duration;

use thiserror::Error;
use wd_protocol::StatusCode;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the session, element registry, or native binding.
#[derive(Debug, Error)]
pub enum Error {
	/// No browser window has focus, or the focused one was closed.
	#[error("No such window: {0}")]
	NoSuchWindow(String),

	/// The element id was never issued by this session.
	#[error("No such element: {id}")]
	NoSuchElement { id: String },

	/// The element id was issued but its node is gone from the current document.
	#[error("Stale element reference: {id}")]
	StaleElement { id: String },

	/// Script raised an exception inside the page.
	#[error("JavaScript error: {message}")]
	JavaScript { message: String },

	/// Asynchronous script did not signal completion before the deadline.
	#[error("Timeout after {}ms waiting for script '{atom}'", timeout.as_millis())]
	ScriptTimeout { atom: String, timeout: Duration },

	/// The detached script task went away without reporting a result.
	#[error("Script task for '{0}' ended without a result")]
	ScriptAbandoned(String),

	/// Native binding failure with a status code of its own.
	#[error("Binding error ({status}): {message}")]
	Binding { status: StatusCode, message: String },
}

impl Error {
	/// Wire status code reported to the client for this error.
	pub fn status_code(&self) -> StatusCode {
		match self {
			Error::NoSuchWindow(_) => StatusCode::NO_SUCH_WINDOW,
			Error::NoSuchElement { .. } => StatusCode::NO_SUCH_ELEMENT,
			Error::StaleElement { .. } => StatusCode::STALE_ELEMENT_REFERENCE,
			Error::JavaScript { .. } => StatusCode::JAVASCRIPT_ERROR,
			Error::ScriptTimeout { .. } => StatusCode::SCRIPT_TIMEOUT,
			Error::Binding { status, .. } => *status,
			Error::ScriptAbandoned(_) => StatusCode::UNKNOWN_ERROR,
		}
	}

	/// Returns true if this is a script timeout.
	pub fn is_timeout(&self) -> bool {
		matches!(self, Error::ScriptTimeout { .. })
	}
}
