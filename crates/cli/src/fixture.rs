//! Fixture file format.
//!
//! ```json
//! {
//!   "config": { "allow_asynchronous_javascript": true, "async_script_timeout_ms": 500 },
//!   "window": "open",
//!   "script": { "stall_ms": 50 },
//!   "elements": [
//!     { "id": "name", "kind": "input", "value": "Ada" },
//!     { "id": "notes", "kind": "text_area", "value": "...", "read_only": true }
//!   ],
//!   "commands": [
//!     { "name": "clearElement", "locator": { "id": "name" } }
//!   ]
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use wd::ExecutorConfig;
use wd_protocol::CommandRequest;
use wd_runtime::memory::{ElementKind, MemoryElement, ScriptBehavior};

use crate::error::{ReplayError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
	#[serde(default)]
	pub config: ExecutorConfig,

	#[serde(default)]
	pub window: WindowState,

	#[serde(default)]
	pub script: ScriptFixture,

	#[serde(default)]
	pub elements: Vec<ElementFixture>,

	#[serde(default)]
	pub commands: Vec<CommandRequest>,
}

impl Fixture {
	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|source| ReplayError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		serde_json::from_str(&text).map_err(|source| ReplayError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}
}

/// State of the focused window when the commands start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
	#[default]
	Open,
	Closed,
	/// No window has focus at all.
	None,
}

/// How the page reacts to injected scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptFixture {
	#[default]
	Succeed,
	Throw(String),
	StallMs(u64),
}

impl From<&ScriptFixture> for ScriptBehavior {
	fn from(script: &ScriptFixture) -> Self {
		match script {
			ScriptFixture::Succeed => ScriptBehavior::Succeed,
			ScriptFixture::Throw(message) => ScriptBehavior::Throw(message.clone()),
			ScriptFixture::StallMs(ms) => ScriptBehavior::Stall(Duration::from_millis(*ms)),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementFixture {
	pub id: String,
	#[serde(default)]
	pub kind: ElementKind,
	#[serde(default)]
	pub value: String,
	#[serde(default = "yes")]
	pub displayed: bool,
	#[serde(default = "yes")]
	pub enabled: bool,
	#[serde(default)]
	pub read_only: bool,
	#[serde(default = "yes")]
	pub attached: bool,
}

fn yes() -> bool {
	true
}

impl ElementFixture {
	/// Builds the node; attachment is applied after it joins a document.
	pub fn to_element(&self) -> MemoryElement {
		let mut element = MemoryElement::new(self.kind, self.value.clone());
		if !self.displayed {
			element = element.hidden();
		}
		if !self.enabled {
			element = element.disabled();
		}
		if self.read_only {
			element = element.read_only();
		}
		element
	}
}
