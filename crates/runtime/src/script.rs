//! Atom invocation: argument binding and synchronous or bounded-async execution.
//!
//! Asynchronous mode runs the script on a detached task and waits on a
//! completion channel. When the deadline passes the wait is abandoned and a
//! [`Error::ScriptTimeout`] is returned; the task itself is not aborted, so the
//! script may still finish in the page afterwards.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, warn};
use wd_protocol::{Atom, StatusCode};

use crate::binding::Document;
use crate::element::ElementHandle;
use crate::error::{Error, Result};

/// A bound argument passed to an atom.
#[derive(Debug, Clone)]
pub enum ScriptArg {
	Element(ElementHandle),
	Value(Value),
}

impl From<ElementHandle> for ScriptArg {
	fn from(element: ElementHandle) -> Self {
		ScriptArg::Element(element)
	}
}

impl From<Value> for ScriptArg {
	fn from(value: Value) -> Self {
		ScriptArg::Value(value)
	}
}

/// Wrapped atom source plus its ordered arguments.
#[derive(Debug, Clone)]
pub struct ScriptInvocation {
	atom: Atom,
	source: String,
	args: Vec<ScriptArg>,
}

impl ScriptInvocation {
	/// Prepares `atom` for invocation, wrapped per [`Atom::invocation_source`].
	pub fn for_atom(atom: Atom) -> Self {
		Self {
			atom,
			source: atom.invocation_source(),
			args: Vec::new(),
		}
	}

	pub fn with_argument(mut self, arg: impl Into<ScriptArg>) -> Self {
		self.args.push(arg.into());
		self
	}

	pub fn atom(&self) -> Atom {
		self.atom
	}

	pub fn source(&self) -> &str {
		&self.source
	}

	pub fn args(&self) -> &[ScriptArg] {
		&self.args
	}

	/// Element arguments in binding order.
	pub fn elements(&self) -> impl Iterator<Item = &ElementHandle> {
		self.args.iter().filter_map(|arg| match arg {
			ScriptArg::Element(element) => Some(element),
			ScriptArg::Value(_) => None,
		})
	}
}

/// How an invocation waits for its script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
	/// Wait until the binding returns, however long that takes.
	Synchronous,
	/// Wait at most `timeout` for the completion signal.
	Asynchronous { timeout: Duration },
}

impl ExecutionMode {
	pub fn select(allow_asynchronous: bool, timeout: Duration) -> Self {
		if allow_asynchronous {
			ExecutionMode::Asynchronous { timeout }
		} else {
			ExecutionMode::Synchronous
		}
	}
}

/// Executes atoms against one document. One attempt per call, no retries.
pub struct AtomScriptInvoker {
	document: Arc<dyn Document>,
}

impl AtomScriptInvoker {
	pub fn new(document: Arc<dyn Document>) -> Self {
		Self { document }
	}

	pub async fn invoke(&self, invocation: ScriptInvocation, mode: ExecutionMode) -> Result<Value> {
		debug!(target = "wd", atom = %invocation.atom(), ?mode, args = invocation.args().len(), "invoking atom");
		match mode {
			ExecutionMode::Synchronous => self.document.execute_script(&invocation).await,
			ExecutionMode::Asynchronous { timeout } => self.invoke_async(invocation, timeout).await,
		}
	}

	/// Runs [`invoke`](Self::invoke) and reduces the outcome to a status code.
	pub async fn invoke_status(&self, invocation: ScriptInvocation, mode: ExecutionMode) -> StatusCode {
		match self.invoke(invocation, mode).await {
			Ok(_) => StatusCode::SUCCESS,
			Err(err) => err.status_code(),
		}
	}

	async fn invoke_async(&self, invocation: ScriptInvocation, timeout: Duration) -> Result<Value> {
		let atom = invocation.atom();
		let document = Arc::clone(&self.document);
		let (done_tx, done_rx) = oneshot::channel();

		tokio::spawn(async move {
			let result = document.execute_script(&invocation).await;
			if done_tx.send(result).is_err() {
				debug!(target = "wd", atom = %invocation.atom(), "script completed after the caller stopped waiting");
			}
		});

		match tokio::time::timeout(timeout, done_rx).await {
			Ok(Ok(result)) => result,
			Ok(Err(_)) => Err(Error::ScriptAbandoned(atom.name().to_string())),
			Err(_) => {
				warn!(target = "wd", %atom, timeout_ms = timeout.as_millis() as u64, "gave up waiting for asynchronous script");
				Err(Error::ScriptTimeout {
					atom: atom.name().to_string(),
					timeout,
				})
			}
		}
	}
}
