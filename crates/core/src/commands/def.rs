//! Handler contract and the wrapper that turns its result into one response.

use serde_json::Value;
use tracing::{debug, error};
use wd_protocol::{CommandRequest, LocatorMap, ParametersMap, ResponseError, ResponseSink};
use wd_runtime::BoxFut;

use crate::error::Result;
use crate::executor::CommandExecutor;

/// Canonical command trait. Each command module becomes
/// `pub struct XxxCommand; impl CommandHandler for XxxCommand { ... }`
///
/// Handlers return early with `?` at each gate; [`execute`] is the only place
/// that writes to a [`ResponseSink`], so every exit path produces exactly one
/// outcome.
pub trait CommandHandler: 'static {
	const NAME: &'static str;

	/// Execute the command. **Must not write a response**. Wrapper writes.
	fn execute_internal<'a>(
		exec: &'a CommandExecutor,
		locator: &'a LocatorMap,
		parameters: &'a ParametersMap,
	) -> BoxFut<'a, Result<Value>>;
}

/// Runs `H` against `request` and writes its outcome to `sink`.
///
/// # Errors
///
/// Returns [`ResponseError::AlreadySet`] if `sink` already held a response;
/// the sink keeps its earlier outcome.
pub async fn execute<H: CommandHandler>(
	exec: &CommandExecutor,
	request: &CommandRequest,
	sink: &mut (dyn ResponseSink + Send),
) -> std::result::Result<(), ResponseError> {
	let outcome = H::execute_internal(exec, &request.locator, &request.parameters).await;

	let written = match outcome {
		Ok(value) => sink.set_success_response(value),
		Err(err) => {
			debug!(target = "wd", command = H::NAME, status = %err.status_code(), error = ?err, "command failed");
			sink.set_error_response(err.status_code(), &err.to_string())
		}
	};

	if let Err(err) = &written {
		error!(target = "wd", command = H::NAME, %err, "response written twice");
	}
	written
}
