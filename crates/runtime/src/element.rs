//! [`ElementHandle`]: resolved, session-scoped reference to a DOM node.

use std::fmt;
use std::sync::Arc;

use crate::binding::ElementNode;

/// A live element reference produced by a successful resolution.
///
/// Handles are cheap to clone and are only handed out after the registry has
/// verified the node against the current document.
#[derive(Clone)]
pub struct ElementHandle {
	id: Arc<str>,
	node: Arc<dyn ElementNode>,
}

impl ElementHandle {
	pub fn new(id: Arc<str>, node: Arc<dyn ElementNode>) -> Self {
		Self { id, node }
	}

	/// Opaque id the client used to refer to this element.
	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn node(&self) -> &Arc<dyn ElementNode> {
		&self.node
	}

	pub fn is_interactable(&self) -> bool {
		self.node.is_interactable()
	}

	pub fn is_editable(&self) -> bool {
		self.node.is_editable()
	}

	/// Returns the concrete binding node, if it is a `T`.
	pub fn downcast_node<T: ElementNode>(&self) -> Option<&T> {
		self.node.as_ref().downcast_ref::<T>()
	}
}

impl fmt::Debug for ElementHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ElementHandle").field("id", &self.id).finish()
	}
}
