//! Per-session browser state.
//!
//! A [`Session`] owns the focused browser window and the element registry.
//! Command handlers borrow it through the executor and never keep references
//! past a single command.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::binding::{Browser, ElementNode};
use crate::element_store::ElementStore;
use crate::error::{Error, Result};

/// Held while a command runs; commands for one session never overlap.
pub type CommandGuard<'a> = MutexGuard<'a, ()>;

pub struct Session {
	id: Arc<str>,
	browser: RwLock<Option<Arc<dyn Browser>>>,
	elements: ElementStore,
	gate: Mutex<()>,
}

impl Session {
	pub fn new(id: impl Into<Arc<str>>) -> Self {
		Self {
			id: id.into(),
			browser: RwLock::new(None),
			elements: ElementStore::new(),
			gate: Mutex::new(()),
		}
	}

	pub fn with_browser(self, browser: Arc<dyn Browser>) -> Self {
		self.set_current_browser(browser);
		self
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	/// Makes `browser` the focused window.
	pub fn set_current_browser(&self, browser: Arc<dyn Browser>) {
		*self.browser.write() = Some(browser);
	}

	pub fn clear_current_browser(&self) {
		*self.browser.write() = None;
	}

	/// Returns the focused window.
	///
	/// # Errors
	///
	/// Returns [`Error::NoSuchWindow`] if no window has focus or it was closed.
	pub fn current_browser(&self) -> Result<Arc<dyn Browser>> {
		let browser = self
			.browser
			.read()
			.clone()
			.ok_or_else(|| Error::NoSuchWindow("no browser window has focus".into()))?;
		if browser.is_closed() {
			return Err(Error::NoSuchWindow("focused window has been closed".into()));
		}
		Ok(browser)
	}

	pub fn elements(&self) -> &ElementStore {
		&self.elements
	}

	/// Registers a node found in the focused window's current document.
	pub fn register_element(&self, node: Arc<dyn ElementNode>) -> Result<Arc<str>> {
		let browser = self.current_browser()?;
		let id = self.elements.register(node, &browser);
		debug!(
			target = "wd",
			session = %self.id,
			element = %id,
			generation = browser.document_generation(),
			"registered element"
		);
		Ok(id)
	}

	/// Registers a node of the focused window under a caller-chosen id.
	pub fn insert_element(&self, id: &str, node: Arc<dyn ElementNode>) -> Result<()> {
		let browser = self.current_browser()?;
		self.elements.insert(Arc::from(id), node, &browser);
		Ok(())
	}

	/// Waits for any in-flight command on this session to finish.
	pub async fn begin_command(&self) -> CommandGuard<'_> {
		self.gate.lock().await
	}
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("id", &self.id)
			.field("has_browser", &self.browser.read().is_some())
			.field("elements", &self.elements.len())
			.finish()
	}
}
