//! Incoming command shape as delivered by the command router.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters derived from the command URL (e.g. `{"id": "element-3"}`).
pub type LocatorMap = HashMap<String, String>;

/// Parameters derived from the request body; command-specific.
pub type ParametersMap = HashMap<String, Value>;

/// A routed command awaiting execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
	/// Command name as registered with the dispatcher (e.g. `"clearElement"`).
	pub name: String,

	#[serde(default)]
	pub locator: LocatorMap,

	#[serde(default)]
	pub parameters: ParametersMap,
}

impl CommandRequest {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Default::default()
		}
	}

	/// Adds a locator parameter.
	pub fn with_locator(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.locator.insert(key.into(), value.into());
		self
	}

	/// Adds a body parameter.
	pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
		self.parameters.insert(key.into(), value);
		self
	}

	pub fn locator_param(&self, key: &str) -> Option<&str> {
		self.locator.get(key).map(String::as_str)
	}
}
