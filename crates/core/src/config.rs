//! Executor configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long an asynchronous atom may run before the driver stops waiting.
pub const DEFAULT_ASYNC_SCRIPT_TIMEOUT: Duration = Duration::from_millis(2000);

/// Settings for a [`CommandExecutor`](crate::CommandExecutor).
///
/// Deserializes from e.g. `{"allow_asynchronous_javascript": true,
/// "async_script_timeout_ms": 500}`; absent fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
	/// Run atoms on a detached task and wait with a deadline.
	pub allow_asynchronous_javascript: bool,

	#[serde(rename = "async_script_timeout_ms", with = "duration_ms")]
	pub async_script_timeout: Duration,
}

impl Default for ExecutorConfig {
	fn default() -> Self {
		Self {
			allow_asynchronous_javascript: false,
			async_script_timeout: DEFAULT_ASYNC_SCRIPT_TIMEOUT,
		}
	}
}

impl ExecutorConfig {
	pub fn asynchronous(mut self, allow: bool) -> Self {
		self.allow_asynchronous_javascript = allow;
		self
	}

	pub fn with_async_script_timeout(mut self, timeout: Duration) -> Self {
		self.async_script_timeout = timeout;
		self
	}
}

mod duration_ms {
	use std::time::Duration;

	use serde::{Deserialize, Deserializer, Serializer, ser};

	pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
		let ms = u64::try_from(value.as_millis()).map_err(|_| {
			<S::Error as ser::Error>::custom(format!(
				"duration of {}s does not fit in u64 milliseconds",
				value.as_secs()
			))
		})?;
		serializer.serialize_u64(ms)
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
		u64::deserialize(deserializer).map(Duration::from_millis)
	}
}
