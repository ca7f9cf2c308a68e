//! Numeric status codes carried in every command response.
//!
//! The driver speaks the legacy JSON wire protocol, where each response holds
//! an integer `status` next to its `value`. Codes below 100 are the wire
//! protocol's own; `400` is used for requests the router could not satisfy
//! (missing URL parameters).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Protocol status code.
///
/// A transparent wrapper so codes supplied by lower layers (resolvers, the
/// native binding) pass through unchanged while the well-known values stay
/// nameable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(u16);

impl StatusCode {
	/// The command completed.
	pub const SUCCESS: Self = Self(0);
	/// No element matches the given id.
	pub const NO_SUCH_ELEMENT: Self = Self(7);
	/// The command name is not registered.
	pub const UNKNOWN_COMMAND: Self = Self(9);
	/// The element id refers to a node that is gone from the document.
	pub const STALE_ELEMENT_REFERENCE: Self = Self(10);
	/// The element is hidden, disabled, or read-only.
	pub const ELEMENT_NOT_ENABLED: Self = Self(12);
	/// Unclassified failure in the native layer.
	pub const UNKNOWN_ERROR: Self = Self(13);
	/// Script raised an exception.
	pub const JAVASCRIPT_ERROR: Self = Self(17);
	/// No focused browser window.
	pub const NO_SUCH_WINDOW: Self = Self(23);
	/// Asynchronous script did not signal completion in time.
	pub const SCRIPT_TIMEOUT: Self = Self(28);
	/// Malformed request.
	pub const BAD_REQUEST: Self = Self(400);

	pub const fn new(code: u16) -> Self {
		Self(code)
	}

	pub const fn as_u16(self) -> u16 {
		self.0
	}

	pub const fn is_success(self) -> bool {
		self.0 == Self::SUCCESS.0
	}

	/// Symbolic name for known codes.
	pub fn name(self) -> Option<&'static str> {
		let name = match self {
			Self::SUCCESS => "success",
			Self::NO_SUCH_ELEMENT => "no such element",
			Self::UNKNOWN_COMMAND => "unknown command",
			Self::STALE_ELEMENT_REFERENCE => "stale element reference",
			Self::ELEMENT_NOT_ENABLED => "element not enabled",
			Self::UNKNOWN_ERROR => "unknown error",
			Self::JAVASCRIPT_ERROR => "javascript error",
			Self::NO_SUCH_WINDOW => "no such window",
			Self::SCRIPT_TIMEOUT => "script timeout",
			Self::BAD_REQUEST => "bad request",
			_ => return None,
		};
		Some(name)
	}
}

impl From<u16> for StatusCode {
	fn from(code: u16) -> Self {
		Self(code)
	}
}

impl fmt::Display for StatusCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => write!(f, "{} ({name})", self.0),
			None => write!(f, "{}", self.0),
		}
	}
}
