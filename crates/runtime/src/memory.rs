//! In-process binding: a single-window browser with a flat list of elements.
//!
//! Scripts are not interpreted. The document records each invocation and, when
//! told to succeed, applies the atom's effect natively to the bound
//! [`MemoryElement`]s. Behaviour can be switched to throw or to stall, which
//! is how the driver's failure paths are exercised without a real browser.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wd_protocol::{Atom, StatusCode};

use crate::binding::{BoxFut, Browser, Document, ElementNode};
use crate::error::{Error, Result};
use crate::script::ScriptInvocation;

/// What the document does when a script is executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptBehavior {
	/// Apply the atom and return.
	#[default]
	Succeed,
	/// Throw an exception with the given message.
	Throw(String),
	/// Wait this long, then apply the atom and return.
	Stall(Duration),
}

/// Element flavour; decides whether content can be edited at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
	#[default]
	Input,
	TextArea,
	ContentEditable,
	/// Any non-editable node (div, button, ...).
	Other,
}

impl ElementKind {
	fn accepts_text(self) -> bool {
		!matches!(self, ElementKind::Other)
	}
}

#[derive(Debug)]
struct ElementState {
	value: String,
	displayed: bool,
	enabled: bool,
	read_only: bool,
	attached: bool,
}

/// A DOM node in a [`MemoryDocument`].
#[derive(Debug)]
pub struct MemoryElement {
	kind: ElementKind,
	state: Mutex<ElementState>,
}

impl MemoryElement {
	pub fn new(kind: ElementKind, value: impl Into<String>) -> Self {
		Self {
			kind,
			state: Mutex::new(ElementState {
				value: value.into(),
				displayed: true,
				enabled: true,
				read_only: false,
				attached: true,
			}),
		}
	}

	/// A visible, enabled, writable `<input>`.
	pub fn text_input(value: impl Into<String>) -> Self {
		Self::new(ElementKind::Input, value)
	}

	pub fn hidden(self) -> Self {
		self.state.lock().displayed = false;
		self
	}

	pub fn disabled(self) -> Self {
		self.state.lock().enabled = false;
		self
	}

	pub fn read_only(self) -> Self {
		self.state.lock().read_only = true;
		self
	}

	pub fn kind(&self) -> ElementKind {
		self.kind
	}

	pub fn value(&self) -> String {
		self.state.lock().value.clone()
	}

	pub fn set_value(&self, value: impl Into<String>) {
		self.state.lock().value = value.into();
	}

	/// Removes the node from its document.
	pub fn detach(&self) {
		self.state.lock().attached = false;
	}

	/// Native equivalent of the clear atom, including its own checks.
	fn clear(&self) -> Result<()> {
		let mut state = self.state.lock();
		if !state.attached {
			return Err(js_error("stale element reference"));
		}
		if !state.enabled || state.read_only {
			return Err(js_error("element is disabled or read-only"));
		}
		if !self.kind.accepts_text() {
			return Err(js_error("element is not editable"));
		}
		state.value.clear();
		Ok(())
	}
}

impl ElementNode for MemoryElement {
	fn is_attached(&self) -> bool {
		self.state.lock().attached
	}

	fn is_interactable(&self) -> bool {
		let state = self.state.lock();
		state.attached && state.displayed && state.enabled
	}

	fn is_editable(&self) -> bool {
		let state = self.state.lock();
		self.kind.accepts_text() && state.enabled && !state.read_only
	}
}

fn js_error(message: &str) -> Error {
	Error::JavaScript {
		message: message.to_string(),
	}
}

/// Document that records script invocations instead of evaluating them.
#[derive(Debug, Default)]
pub struct MemoryDocument {
	elements: Mutex<Vec<Arc<MemoryElement>>>,
	behavior: Mutex<ScriptBehavior>,
	calls: AtomicUsize,
	last_source: Mutex<Option<String>>,
}

impl MemoryDocument {
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches `element` to this document.
	pub fn append(&self, element: MemoryElement) -> Arc<MemoryElement> {
		let element = Arc::new(element);
		self.elements.lock().push(Arc::clone(&element));
		element
	}

	pub fn set_script_behavior(&self, behavior: ScriptBehavior) {
		*self.behavior.lock() = behavior;
	}

	/// Number of scripts executed so far.
	pub fn script_calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	/// Source of the most recent script, as received.
	pub fn last_source(&self) -> Option<String> {
		self.last_source.lock().clone()
	}

	/// Detaches every element, as a navigation would.
	fn unload(&self) {
		for element in self.elements.lock().drain(..) {
			element.detach();
		}
	}

	fn contains(&self, element: &MemoryElement) -> bool {
		self.elements
			.lock()
			.iter()
			.any(|candidate| std::ptr::eq(Arc::as_ptr(candidate), element))
	}

	fn apply(&self, invocation: &ScriptInvocation) -> Result<Value> {
		match invocation.atom() {
			Atom::Clear => {
				for handle in invocation.elements() {
					let element = handle.downcast_node::<MemoryElement>().ok_or_else(|| Error::Binding {
						status: StatusCode::UNKNOWN_ERROR,
						message: format!("element {} does not belong to this document", handle.id()),
					})?;
					if !self.contains(element) {
						return Err(Error::StaleElement {
							id: handle.id().to_string(),
						});
					}
					element.clear()?;
				}
				Ok(Value::Null)
			}
		}
	}
}

impl Document for MemoryDocument {
	fn execute_script<'a>(&'a self, invocation: &'a ScriptInvocation) -> BoxFut<'a, Result<Value>> {
		Box::pin(async move {
			self.calls.fetch_add(1, Ordering::SeqCst);
			*self.last_source.lock() = Some(invocation.source().to_string());

			let behavior = self.behavior.lock().clone();
			match behavior {
				ScriptBehavior::Succeed => {}
				ScriptBehavior::Throw(message) => return Err(Error::JavaScript { message }),
				ScriptBehavior::Stall(delay) => tokio::time::sleep(delay).await,
			}
			self.apply(invocation)
		})
	}
}

/// Single-window browser over a [`MemoryDocument`].
#[derive(Debug)]
pub struct MemoryBrowser {
	document: Mutex<Arc<MemoryDocument>>,
	generation: AtomicU64,
	closed: AtomicBool,
}

impl Default for MemoryBrowser {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryBrowser {
	pub fn new() -> Self {
		Self {
			document: Mutex::new(Arc::new(MemoryDocument::new())),
			generation: AtomicU64::new(0),
			closed: AtomicBool::new(false),
		}
	}

	/// The concrete current document.
	pub fn memory_document(&self) -> Arc<MemoryDocument> {
		self.document.lock().clone()
	}

	/// Replaces the document, detaching every element of the old one.
	pub fn navigate(&self) -> Arc<MemoryDocument> {
		let fresh = Arc::new(MemoryDocument::new());
		let old = std::mem::replace(&mut *self.document.lock(), Arc::clone(&fresh));
		old.unload();
		self.generation.fetch_add(1, Ordering::SeqCst);
		fresh
	}

	pub fn close(&self) {
		self.closed.store(true, Ordering::SeqCst);
	}
}

impl Browser for MemoryBrowser {
	fn document(&self) -> Result<Arc<dyn Document>> {
		if self.is_closed() {
			return Err(Error::NoSuchWindow("window has been closed".into()));
		}
		let document: Arc<dyn Document> = self.memory_document();
		Ok(document)
	}

	fn document_generation(&self) -> u64 {
		self.generation.load(Ordering::SeqCst)
	}

	fn is_closed(&self) -> bool {
		self.closed.load(Ordering::SeqCst)
	}
}
