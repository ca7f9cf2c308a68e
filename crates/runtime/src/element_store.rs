//! Session-scoped element registry.
//!
//! Maps opaque element ids to binding nodes, the window they were found in,
//! and that window's document generation. Uses [`DashMap`] so lookups never
//! block registration from the binding's event side.
//!
//! An id that went stale is retired: its entry (and the node it pinned) is
//! dropped, but the id is remembered so later lookups still report a stale
//! reference rather than an unknown one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use dashmap::{DashMap, DashSet};

use crate::binding::{Browser, ElementNode};

/// A registered element.
pub struct ElementEntry {
	node: Arc<dyn ElementNode>,
	owner: Weak<dyn Browser>,
	generation: u64,
}

impl ElementEntry {
	pub fn node(&self) -> &Arc<dyn ElementNode> {
		&self.node
	}

	/// Document generation the element was registered against.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Returns true if the element was registered in `browser`.
	///
	/// The weak handle keeps the owner's allocation alive, so the address
	/// cannot be reused by another window.
	pub fn is_owned_by(&self, browser: &Arc<dyn Browser>) -> bool {
		std::ptr::addr_eq(self.owner.as_ptr(), Arc::as_ptr(browser))
	}
}

/// Thread-safe registry of elements by id.
pub struct ElementStore {
	entries: DashMap<Arc<str>, Arc<ElementEntry>>,
	retired: DashSet<Arc<str>>,
	next_id: AtomicU64,
}

impl Default for ElementStore {
	fn default() -> Self {
		Self::new()
	}
}

impl ElementStore {
	pub fn new() -> Self {
		Self {
			entries: DashMap::new(),
			retired: DashSet::new(),
			next_id: AtomicU64::new(1),
		}
	}

	/// Registers a node found in `owner`'s current document under a freshly
	/// minted id (`element-<n>`).
	pub fn register(&self, node: Arc<dyn ElementNode>, owner: &Arc<dyn Browser>) -> Arc<str> {
		let n = self.next_id.fetch_add(1, Ordering::SeqCst);
		let id: Arc<str> = Arc::from(format!("element-{n}"));
		self.insert(id.clone(), node, owner);
		id
	}

	/// Registers a node under a caller-chosen id, replacing any previous entry.
	pub fn insert(&self, id: Arc<str>, node: Arc<dyn ElementNode>, owner: &Arc<dyn Browser>) {
		let entry = ElementEntry {
			node,
			owner: Arc::downgrade(owner),
			generation: owner.document_generation(),
		};
		self.retired.remove(&id);
		self.entries.insert(id, Arc::new(entry));
	}

	/// Synchronous lookup of a live entry. Performs no staleness checks.
	pub fn get(&self, id: &str) -> Option<Arc<ElementEntry>> {
		self.entries.get(id).map(|r| r.value().clone())
	}

	/// Returns true if `id` was issued and has since gone stale.
	pub fn is_retired(&self, id: &str) -> bool {
		self.retired.contains(id)
	}

	/// Drops the entry for `id` and remembers the id as stale.
	pub fn retire(&self, id: &str) {
		if let Some((id, _)) = self.entries.remove(id) {
			self.retired.insert(id);
		}
	}

	/// Retires every entry of `owner` registered against a document other
	/// than `current_generation`. Returns how many were retired.
	pub fn retire_superseded(&self, owner: &Arc<dyn Browser>, current_generation: u64) -> usize {
		let mut swept = 0;
		self.entries.retain(|id, entry| {
			let keep = !entry.is_owned_by(owner) || entry.generation == current_generation;
			if !keep {
				self.retired.insert(id.clone());
				swept += 1;
			}
			keep
		});
		swept
	}

	/// Number of live entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::memory::{MemoryBrowser, MemoryElement};

	fn window() -> (Arc<MemoryBrowser>, Arc<dyn Browser>) {
		let browser = Arc::new(MemoryBrowser::new());
		let owner: Arc<dyn Browser> = browser.clone();
		(browser, owner)
	}

	fn node(value: &str) -> Arc<dyn ElementNode> {
		Arc::new(MemoryElement::text_input(value))
	}

	#[test]
	fn register_mints_unique_ids() {
		let (_, owner) = window();
		let store = ElementStore::new();
		let a = store.register(node(""), &owner);
		let b = store.register(node(""), &owner);
		assert_ne!(a, b);
		assert!(a.starts_with("element-"));
		assert_eq!(store.len(), 2);
	}

	#[test]
	fn insert_records_owner_and_generation() {
		let (browser, owner) = window();
		let (_, other) = window();
		browser.navigate();

		let store = ElementStore::new();
		store.insert(Arc::from("e1"), node("a"), &owner);

		let entry = store.get("e1").unwrap();
		assert_eq!(entry.generation(), 1);
		assert!(entry.is_owned_by(&owner));
		assert!(!entry.is_owned_by(&other));
	}

	#[test]
	fn insert_replaces_retired_entry() {
		let (_, owner) = window();
		let store = ElementStore::new();
		store.insert(Arc::from("e1"), node("a"), &owner);
		store.retire("e1");
		assert!(store.get("e1").is_none());
		assert!(store.is_retired("e1"));

		store.insert(Arc::from("e1"), node("b"), &owner);
		assert!(store.get("e1").is_some());
		assert!(!store.is_retired("e1"));
		assert_eq!(store.len(), 1);
	}

	#[test]
	fn retire_unknown_id_is_not_remembered() {
		let store = ElementStore::new();
		store.retire("nope");
		assert!(!store.is_retired("nope"));
	}

	#[test]
	fn retire_superseded_only_touches_owner_and_old_documents() {
		let (browser, owner) = window();
		let (_, other) = window();
		let store = ElementStore::new();
		store.insert(Arc::from("old"), node(""), &owner);
		store.insert(Arc::from("elsewhere"), node(""), &other);
		browser.navigate();
		store.insert(Arc::from("fresh"), node(""), &owner);

		assert_eq!(store.retire_superseded(&owner, 1), 1);
		assert!(store.is_retired("old"));
		assert!(store.get("elsewhere").is_some());
		assert!(store.get("fresh").is_some());
		assert_eq!(store.len(), 2);
	}
}
