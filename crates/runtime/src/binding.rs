//! Native binding capabilities: browser windows, documents, DOM nodes.
//!
//! The runtime never touches a real browser directly. A platform binding
//! implements these traits; [`crate::memory`] provides an in-process one.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};
use serde_json::Value;

use crate::error::Result;
use crate::script::ScriptInvocation;

/// Boxed, sendable future returned by binding calls.
pub type BoxFut<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A top-level browser window.
pub trait Browser: Send + Sync {
	/// Returns the document currently loaded in the window.
	fn document(&self) -> Result<Arc<dyn Document>>;

	/// Counter advanced by every navigation.
	///
	/// Elements registered against an older generation are stale.
	fn document_generation(&self) -> u64;

	/// Returns true once the window has been closed.
	fn is_closed(&self) -> bool {
		false
	}
}

/// Script execution surface of a loaded document.
pub trait Document: Send + Sync {
	/// Evaluates `invocation.source()` and applies the resulting function to the
	/// bound arguments.
	///
	/// Resolves once the script returns or throws. A thrown exception must be
	/// reported as [`Error::JavaScript`](crate::Error::JavaScript).
	fn execute_script<'a>(&'a self, invocation: &'a ScriptInvocation) -> BoxFut<'a, Result<Value>>;
}

/// A DOM node as seen by the driver.
pub trait ElementNode: DowncastSync {
	/// Returns true while the node is attached to its owner document.
	fn is_attached(&self) -> bool;

	/// Returns true if the node can currently receive user input.
	fn is_interactable(&self) -> bool;

	/// Returns true if the node's content can be changed.
	fn is_editable(&self) -> bool;
}

impl_downcast!(sync ElementNode);
