//! Element id resolution with staleness detection.

use std::sync::Arc;

use tracing::debug;
use wd_runtime::{Browser, ElementHandle, ElementStore, Error, Result};

/// Turns opaque element ids into live [`ElementHandle`]s.
///
/// An element is stale when its id was retired, when it was registered in a
/// window other than `browser`, when that window has navigated since
/// registration, or when the node reports itself detached.
///
/// Navigation and detachment retire the id for good. An element of another
/// window is only refused; it resolves again once its window has focus.
pub struct ElementResolver<'a> {
	store: &'a ElementStore,
}

impl<'a> ElementResolver<'a> {
	pub fn new(store: &'a ElementStore) -> Self {
		Self { store }
	}

	/// # Errors
	///
	/// - [`Error::NoSuchElement`] if the id was never registered
	/// - [`Error::StaleElement`] if the node is not in `browser`'s current document
	pub fn resolve(&self, browser: &Arc<dyn Browser>, element_id: &str) -> Result<ElementHandle> {
		let stale = || Error::StaleElement {
			id: element_id.to_string(),
		};

		let Some(entry) = self.store.get(element_id) else {
			if self.store.is_retired(element_id) {
				return Err(stale());
			}
			return Err(Error::NoSuchElement {
				id: element_id.to_string(),
			});
		};

		if !entry.is_owned_by(browser) {
			debug!(target = "wd", element = element_id, "element belongs to another window");
			return Err(stale());
		}

		let current = browser.document_generation();
		if entry.generation() != current {
			let swept = self.store.retire_superseded(browser, current);
			debug!(
				target = "wd",
				element = element_id,
				registered = entry.generation(),
				current,
				swept,
				"document changed since registration"
			);
			return Err(stale());
		}

		if !entry.node().is_attached() {
			debug!(target = "wd", element = element_id, "element detached");
			self.store.retire(element_id);
			return Err(stale());
		}

		Ok(ElementHandle::new(Arc::from(element_id), Arc::clone(entry.node())))
	}
}

#[cfg(test)]
mod tests {
	use wd_runtime::memory::{MemoryBrowser, MemoryElement};

	use super::*;

	struct Window {
		memory: Arc<MemoryBrowser>,
		browser: Arc<dyn Browser>,
	}

	fn window() -> Window {
		let memory = Arc::new(MemoryBrowser::new());
		let browser: Arc<dyn Browser> = memory.clone();
		Window { memory, browser }
	}

	fn add(store: &ElementStore, window: &Window, id: &str) -> Arc<MemoryElement> {
		let node = window.memory.memory_document().append(MemoryElement::text_input("x"));
		store.insert(Arc::from(id), node.clone(), &window.browser);
		node
	}

	#[test]
	fn resolves_live_element() {
		let w = window();
		let store = ElementStore::new();
		add(&store, &w, "e1");

		let handle = ElementResolver::new(&store).resolve(&w.browser, "e1").unwrap();
		assert_eq!(handle.id(), "e1");
		assert!(handle.is_editable());
	}

	#[test]
	fn unknown_id_is_no_such_element() {
		let w = window();
		let store = ElementStore::new();
		let err = ElementResolver::new(&store).resolve(&w.browser, "nope").unwrap_err();
		assert!(matches!(err, Error::NoSuchElement { .. }));
	}

	#[test]
	fn navigation_retires_every_element_of_the_window() {
		let w = window();
		let other = window();
		let store = ElementStore::new();
		add(&store, &w, "e1");
		add(&store, &w, "e2");
		add(&store, &other, "e3");

		w.memory.navigate();

		let resolver = ElementResolver::new(&store);
		let err = resolver.resolve(&w.browser, "e1").unwrap_err();
		assert!(matches!(err, Error::StaleElement { .. }));
		assert!(store.is_retired("e1"));
		assert!(store.is_retired("e2"));
		assert!(store.get("e3").is_some());
		assert!(matches!(resolver.resolve(&w.browser, "e2"), Err(Error::StaleElement { .. })));
	}

	#[test]
	fn detached_node_stays_stale() {
		let w = window();
		let store = ElementStore::new();
		let node = add(&store, &w, "e1");

		node.detach();
		let resolver = ElementResolver::new(&store);
		assert!(matches!(resolver.resolve(&w.browser, "e1"), Err(Error::StaleElement { .. })));
		assert!(store.get("e1").is_none());
		assert!(matches!(resolver.resolve(&w.browser, "e1"), Err(Error::StaleElement { .. })));
	}

	#[test]
	fn element_of_another_window_is_stale_until_refocused() {
		let a = window();
		let b = window();
		let store = ElementStore::new();
		add(&store, &a, "e1");

		let resolver = ElementResolver::new(&store);
		assert!(matches!(resolver.resolve(&b.browser, "e1"), Err(Error::StaleElement { .. })));
		assert!(!store.is_retired("e1"));
		assert!(resolver.resolve(&a.browser, "e1").is_ok());
	}
}
