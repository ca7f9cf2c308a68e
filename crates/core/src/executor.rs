//! [`CommandExecutor`]: the execution context every handler receives.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use wd_protocol::{CommandRequest, Response};
use wd_runtime::{Browser, ExecutionMode, Session};

use crate::commands::registry::dispatch;
use crate::config::ExecutorConfig;

/// Borrowed view of a session plus executor settings.
///
/// Handlers see only this; they never own the session or its browser.
pub struct CommandExecutor {
	session: Arc<Session>,
	config: ExecutorConfig,
}

impl CommandExecutor {
	pub fn new(session: Arc<Session>, config: ExecutorConfig) -> Self {
		Self { session, config }
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	pub fn config(&self) -> &ExecutorConfig {
		&self.config
	}

	pub fn current_browser(&self) -> wd_runtime::Result<Arc<dyn Browser>> {
		self.session.current_browser()
	}

	pub fn allow_asynchronous_javascript(&self) -> bool {
		self.config.allow_asynchronous_javascript
	}

	pub fn async_script_timeout(&self) -> Duration {
		self.config.async_script_timeout
	}

	/// Script mode chosen by the current settings.
	pub fn script_mode(&self) -> ExecutionMode {
		ExecutionMode::select(self.allow_asynchronous_javascript(), self.async_script_timeout())
	}

	/// Runs one command to completion.
	///
	/// Waits for any earlier command on the same session first, so commands
	/// never interleave.
	pub async fn execute(&self, request: &CommandRequest) -> Response {
		let _guard = self.session.begin_command().await;
		let response = dispatch(self, request).await;
		info!(
			target = "wd",
			session = self.session.id(),
			command = %request.name,
			status = response.status().as_u16(),
			"command finished"
		);
		response
	}
}
