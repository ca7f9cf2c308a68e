//! Clear element command.
//!
//! Empties an input, textarea, or contenteditable element identified by the
//! `id` locator parameter. Replies with `null` on success.

use serde_json::Value;
use tracing::{debug, info, warn};
use wd_protocol::{Atom, LocatorMap, ParametersMap};
use wd_runtime::{AtomScriptInvoker, BoxFut, ScriptInvocation};

use crate::commands::def::CommandHandler;
use crate::error::{CommandError, Result};
use crate::executor::CommandExecutor;
use crate::preconditions::{self, MUTATION_PRECONDITIONS};
use crate::resolver::ElementResolver;

/// Message for any failure of the clear atom itself.
pub const SCRIPT_ERROR_MESSAGE: &str = "A JavaScript error was encountered clearing the element. \
	The driver assumes this is because the element is hidden, disabled or read-only, \
	and it must not be to clear the element.";

pub struct ClearElementCommand;

impl CommandHandler for ClearElementCommand {
	const NAME: &'static str = "clearElement";

	fn execute_internal<'a>(
		exec: &'a CommandExecutor,
		locator: &'a LocatorMap,
		_parameters: &'a ParametersMap,
	) -> BoxFut<'a, Result<Value>> {
		Box::pin(async move {
			let element_id = locator
				.get("id")
				.ok_or(CommandError::MissingParameter("id"))?;
			info!(target = "wd", element = %element_id, "clear");

			let browser = exec
				.current_browser()
				.map_err(|source| CommandError::BrowserUnavailable { source })?;

			let element = ElementResolver::new(exec.session().elements())
				.resolve(&browser, element_id)
				.map_err(|source| CommandError::ElementUnresolvable { source })?;

			// Run asynchronously, the atom does not report a usable status for
			// hidden, disabled, or read-only elements, so check them here.
			if let Err(failed) = preconditions::check(&element, MUTATION_PRECONDITIONS) {
				debug!(target = "wd", element = %element_id, precondition = %failed, "precondition failed");
				return Err(CommandError::ElementNotEnabled);
			}

			let script_failed = |source| CommandError::ScriptFailed {
				message: SCRIPT_ERROR_MESSAGE,
				source,
			};

			let document = browser.document().map_err(script_failed)?;
			let invocation = ScriptInvocation::for_atom(Atom::Clear).with_argument(element);

			// The binding cannot tell us why the atom failed; every failure,
			// timeouts included, is reported as element-not-enabled.
			AtomScriptInvoker::new(document)
				.invoke(invocation, exec.script_mode())
				.await
				.map_err(|source| {
					if source.is_timeout() {
						warn!(target = "wd", element = %element_id, error = %source, "clear atom timed out");
					} else {
						warn!(target = "wd", element = %element_id, error = %source, "clear atom failed");
					}
					script_failed(source)
				})?;

			Ok(Value::Null)
		})
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use wd_protocol::{CommandRequest, ResponseSlot, StatusCode};
	use wd_runtime::Session;
	use wd_runtime::memory::{MemoryBrowser, MemoryElement};

	use super::*;
	use crate::commands::def::execute;
	use crate::config::ExecutorConfig;

	#[tokio::test]
	async fn writes_exactly_one_response() {
		let browser = Arc::new(MemoryBrowser::new());
		let session = Arc::new(Session::new("s1").with_browser(browser.clone()));
		let node = browser.memory_document().append(MemoryElement::text_input("abc"));
		session.insert_element("e1", node.clone()).unwrap();
		let exec = CommandExecutor::new(session, ExecutorConfig::default());

		let request = CommandRequest::new("clearElement").with_locator("id", "e1");
		let mut slot = ResponseSlot::new();
		execute::<ClearElementCommand>(&exec, &request, &mut slot).await.unwrap();

		let response = slot.into_response().unwrap();
		assert_eq!(response.status(), StatusCode::SUCCESS);
		assert_eq!(response.value(), Some(&Value::Null));
		assert_eq!(node.value(), "");
	}

	#[tokio::test]
	async fn prefilled_sink_is_not_overwritten() {
		let exec = CommandExecutor::new(Arc::new(Session::new("s1")), ExecutorConfig::default());
		let mut slot = ResponseSlot::new();
		wd_protocol::ResponseSink::set_success_response(&mut slot, Value::Bool(true)).unwrap();

		let request = CommandRequest::new("clearElement");
		let err = execute::<ClearElementCommand>(&exec, &request, &mut slot)
			.await
			.unwrap_err();

		assert!(matches!(err, wd_protocol::ResponseError::AlreadySet { .. }));
		assert_eq!(slot.get().unwrap().value(), Some(&Value::Bool(true)));
	}

	#[test]
	fn script_error_message_reads_as_one_sentence_pair() {
		assert!(SCRIPT_ERROR_MESSAGE.starts_with("A JavaScript error was encountered clearing the element. The driver"));
		assert!(SCRIPT_ERROR_MESSAGE.ends_with("and it must not be to clear the element."));
		assert!(!SCRIPT_ERROR_MESSAGE.contains('\t'));
	}
}
