//! Runs a [`Fixture`] through a fresh session.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};
use wd::{CommandExecutor, ExecutorConfig};
use wd_protocol::Response;
use wd_runtime::memory::MemoryBrowser;
use wd_runtime::{ElementNode, Session};

use crate::error::{ReplayError, Result};
use crate::fixture::{Fixture, WindowState};

/// Builds the page described by `fixture`, then executes its commands in order.
///
/// Command failures are responses, not errors; only a malformed page setup
/// returns `Err`.
pub async fn run(fixture: &Fixture, config: ExecutorConfig) -> Result<Vec<Response>> {
	let browser = Arc::new(MemoryBrowser::new());
	let session = Arc::new(Session::new("replay").with_browser(browser.clone()));
	let document = browser.memory_document();
	document.set_script_behavior((&fixture.script).into());

	let mut seen = HashSet::new();
	for spec in &fixture.elements {
		if !seen.insert(spec.id.as_str()) {
			return Err(ReplayError::DuplicateElement(spec.id.clone()));
		}
		let node = document.append(spec.to_element());
		session.insert_element(&spec.id, node.clone())?;
		if !spec.attached {
			node.detach();
		}
		debug!(target = "wd", element = %spec.id, kind = ?node.kind(), attached = node.is_attached(), "fixture element");
	}

	match fixture.window {
		WindowState::Open => {}
		WindowState::Closed => browser.close(),
		WindowState::None => session.clear_current_browser(),
	}

	let exec = CommandExecutor::new(session, config);
	let mut responses = Vec::with_capacity(fixture.commands.len());
	for request in &fixture.commands {
		responses.push(exec.execute(request).await);
	}
	info!(target = "wd", commands = responses.len(), scripts = document.script_calls(), "replay finished");
	Ok(responses)
}
