//! Command registry and generated dispatch glue.

use wd_protocol::{CommandRequest, Response, ResponseSlot, StatusCode};

use crate::error::CommandError;
use crate::executor::CommandExecutor;

/// The registry macro: generates a `CommandId` enum, `lookup_command`, `command_name`,
/// and `run_command`.
///
/// Usage example:
/// ```rust
/// command_registry! {
///   ClearElement => crate::commands::clear::ClearElementCommand { names: ["clearElement", "clear"] },
/// }
/// ```
#[macro_export]
macro_rules! command_registry {
	(
		$(
			$id:ident => $ty:path {
				names: [ $($name:literal),+ $(,)? ]
			}
		),+ $(,)?
	) => {
		#[derive(Debug, Clone, Copy, PartialEq, Eq)]
		pub enum CommandId { $($id),+ }

		pub fn lookup_command(name: &str) -> Option<CommandId> {
			match name {
				$(
					$($name)|+ => Some(CommandId::$id),
				)+
				_ => None,
			}
		}

		pub fn command_name(id: CommandId) -> &'static str {
			match id {
				$(
					CommandId::$id => <$ty as $crate::commands::def::CommandHandler>::NAME,
				)+
			}
		}

		/// Run a command by `CommandId`, writing its outcome to `sink`.
		pub async fn run_command(
			id: CommandId,
			exec: &$crate::executor::CommandExecutor,
			request: &$crate::protocol::CommandRequest,
			sink: &mut (dyn $crate::protocol::ResponseSink + Send),
		) -> ::std::result::Result<(), $crate::protocol::ResponseError> {
			match id {
				$(
					CommandId::$id => $crate::commands::def::execute::<$ty>(exec, request, sink).await,
				)+
			}
		}
	};
}

command_registry! {
	ClearElement => crate::commands::clear::ClearElementCommand { names: ["clearElement", "clear"] },
}

/// Looks up `request.name` and runs it, always producing a response.
pub async fn dispatch(exec: &CommandExecutor, request: &CommandRequest) -> Response {
	let Some(id) = lookup_command(&request.name) else {
		let err = CommandError::UnknownCommand(request.name.clone());
		return Response::error(err.status_code(), err.to_string());
	};

	let mut slot = ResponseSlot::new();
	// A double write keeps the first outcome; `execute` has already logged it.
	let _ = run_command(id, exec, request, &mut slot).await;
	slot.into_response()
		.unwrap_or_else(|err| Response::error(StatusCode::UNKNOWN_ERROR, err.to_string()))
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use wd_runtime::Session;

	use super::*;
	use crate::config::ExecutorConfig;

	#[test]
	fn lookup_command_by_primary_name() {
		assert_eq!(lookup_command("clearElement"), Some(CommandId::ClearElement));
	}

	#[test]
	fn lookup_command_by_alias() {
		assert_eq!(lookup_command("clear"), Some(CommandId::ClearElement));
	}

	#[test]
	fn lookup_command_unknown_returns_none() {
		assert_eq!(lookup_command("unknown"), None);
		assert_eq!(lookup_command(""), None);
		assert_eq!(lookup_command("clearelement"), None);
	}

	#[test]
	fn command_name_returns_primary() {
		assert_eq!(command_name(CommandId::ClearElement), "clearElement");
	}

	#[tokio::test]
	async fn dispatch_unknown_command_is_error_response() {
		let exec = CommandExecutor::new(Arc::new(Session::new("s1")), ExecutorConfig::default());
		let response = dispatch(&exec, &CommandRequest::new("sendKeys")).await;
		assert_eq!(response.status(), StatusCode::UNKNOWN_COMMAND);
		assert_eq!(response.message(), Some("Unknown command: sendKeys"));
	}
}
