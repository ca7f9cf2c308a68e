//! Handler-level error taxonomy.
//!
//! Every variant renders to the exact message sent to the client and maps to
//! one wire status via [`CommandError::status_code`]. Resolution errors keep
//! the runtime's status code; everything else has a fixed one.

use thiserror::Error;
use wd_protocol::StatusCode;

pub type Result<T> = std::result::Result<T, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
	/// A required locator parameter is absent from the request URL.
	#[error("Missing parameter in URL: {0}")]
	MissingParameter(&'static str),

	#[error("Unable to get browser")]
	BrowserUnavailable {
		#[source]
		source: wd_runtime::Error,
	},

	/// Unknown id and stale reference both land here; `source` tells them apart.
	#[error("Element is no longer valid")]
	ElementUnresolvable {
		#[source]
		source: wd_runtime::Error,
	},

	/// Pre-flight interactable/editable check failed.
	#[error("Element must not be hidden, disabled or read-only")]
	ElementNotEnabled,

	/// The atom failed for any reason, timeouts included.
	///
	/// Reported with the element-not-enabled status: the binding gives no
	/// structured account of what the script threw.
	#[error("{message}")]
	ScriptFailed {
		message: &'static str,
		#[source]
		source: wd_runtime::Error,
	},

	#[error("Unknown command: {0}")]
	UnknownCommand(String),
}

impl CommandError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			CommandError::MissingParameter(_) => StatusCode::BAD_REQUEST,
			CommandError::BrowserUnavailable { source }
			| CommandError::ElementUnresolvable { source } => source.status_code(),
			CommandError::ElementNotEnabled | CommandError::ScriptFailed { .. } => {
				StatusCode::ELEMENT_NOT_ENABLED
			}
			CommandError::UnknownCommand(_) => StatusCode::UNKNOWN_COMMAND,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_parameter_is_bad_request() {
		let err = CommandError::MissingParameter("id");
		assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(err.to_string(), "Missing parameter in URL: id");
	}

	#[test]
	fn unresolvable_element_keeps_runtime_status() {
		let stale = CommandError::ElementUnresolvable {
			source: wd_runtime::Error::StaleElement { id: "e1".into() },
		};
		assert_eq!(stale.status_code(), StatusCode::STALE_ELEMENT_REFERENCE);
		assert_eq!(stale.to_string(), "Element is no longer valid");

		let missing = CommandError::ElementUnresolvable {
			source: wd_runtime::Error::NoSuchElement { id: "e9".into() },
		};
		assert_eq!(missing.status_code(), StatusCode::NO_SUCH_ELEMENT);
		assert_eq!(missing.to_string(), stale.to_string());
	}

	#[test]
	fn script_failure_collapses_to_not_enabled() {
		let err = CommandError::ScriptFailed {
			message: "script error",
			source: wd_runtime::Error::JavaScript {
				message: "TypeError".into(),
			},
		};
		assert_eq!(err.status_code(), StatusCode::ELEMENT_NOT_ENABLED);
		assert_eq!(err.to_string(), "script error");
	}
}
