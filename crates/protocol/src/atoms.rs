//! Canonical automation scripts ("atoms") shared by command handlers.
//!
//! Each atom body is the source of an anonymous function expression,
//! `function(element) { ... }`. Handlers never evaluate a body directly:
//! [`Atom::invocation_source`] wraps it in an immediately-invoked function so
//! the atom's identifiers stay out of the page's global namespace. Evaluating
//! the wrapper yields the atom function, which the native binding then applies
//! to the bound arguments.

use std::fmt;

use serde::{Deserialize, Serialize};

const CLEAR: &str = r#"function(element) {
  if (!element || !element.ownerDocument || !element.ownerDocument.contains(element)) {
    throw new Error('stale element reference');
  }
  var tag = (element.tagName || '').toUpperCase();
  if (element.disabled || element.readOnly) {
    throw new Error('element is disabled or read-only');
  }
  if (tag === 'INPUT' || tag === 'TEXTAREA') {
    if (element.value === '') {
      return;
    }
    element.focus();
    element.value = '';
    element.dispatchEvent(new Event('input', { bubbles: true }));
    element.dispatchEvent(new Event('change', { bubbles: true }));
    element.blur();
  } else if (element.isContentEditable) {
    element.focus();
    while (element.firstChild) {
      element.removeChild(element.firstChild);
    }
    element.blur();
  } else {
    throw new Error('element is not editable');
  }
}"#;

/// Identifier of a canonical script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Atom {
	/// Empties an input, textarea, or contenteditable element.
	Clear,
}

impl Atom {
	pub fn name(self) -> &'static str {
		match self {
			Atom::Clear => "clear",
		}
	}

	/// Raw function-expression source.
	pub fn body(self) -> &'static str {
		match self {
			Atom::Clear => CLEAR,
		}
	}

	/// Source handed to the script engine: `(function() { return (<body>)})();`.
	pub fn invocation_source(self) -> String {
		wrap_anonymous(self.body())
	}
}

impl fmt::Display for Atom {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Wraps a function expression so evaluating it returns the function without
/// binding any name in the caller's scope.
pub fn wrap_anonymous(body: &str) -> String {
	let mut source = String::with_capacity(body.len() + 32);
	source.push_str("(function() { return (");
	source.push_str(body);
	source.push_str(")})();");
	source
}
