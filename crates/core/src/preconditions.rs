//! Capability predicates checked before an element-mutating atom runs.

use std::fmt;

use wd_runtime::ElementHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
	/// Element can receive user input (shown, enabled, attached).
	Interactable,
	/// Element content may be changed (not read-only).
	Editable,
}

/// What every element-mutating command requires, in evaluation order.
pub const MUTATION_PRECONDITIONS: &[Precondition] = &[Precondition::Interactable, Precondition::Editable];

impl Precondition {
	pub fn holds(self, element: &ElementHandle) -> bool {
		match self {
			Precondition::Interactable => element.is_interactable(),
			Precondition::Editable => element.is_editable(),
		}
	}
}

impl fmt::Display for Precondition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Precondition::Interactable => f.write_str("interactable"),
			Precondition::Editable => f.write_str("editable"),
		}
	}
}

/// Evaluates `required` in order and returns the first one that fails.
///
/// Later predicates are not evaluated once one fails.
pub fn check(element: &ElementHandle, required: &[Precondition]) -> Result<(), Precondition> {
	match required.iter().copied().find(|p| !p.holds(element)) {
		Some(failed) => Err(failed),
		None => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use wd_runtime::memory::MemoryElement;

	use super::*;

	fn handle(node: MemoryElement) -> ElementHandle {
		ElementHandle::new(Arc::from("e1"), Arc::new(node))
	}

	#[test]
	fn enabled_input_passes() {
		assert_eq!(check(&handle(MemoryElement::text_input("")), MUTATION_PRECONDITIONS), Ok(()));
	}

	#[test]
	fn reports_first_failure() {
		let hidden = handle(MemoryElement::text_input("").hidden());
		assert_eq!(check(&hidden, MUTATION_PRECONDITIONS), Err(Precondition::Interactable));

		let read_only = handle(MemoryElement::text_input("").read_only());
		assert_eq!(check(&read_only, MUTATION_PRECONDITIONS), Err(Precondition::Editable));

		// Disabled fails both; interactable is checked first.
		let disabled = handle(MemoryElement::text_input("").disabled());
		assert_eq!(check(&disabled, MUTATION_PRECONDITIONS), Err(Precondition::Interactable));
	}

	#[test]
	fn empty_requirement_list_always_passes() {
		assert_eq!(check(&handle(MemoryElement::text_input("").disabled()), &[]), Ok(()));
	}
}
