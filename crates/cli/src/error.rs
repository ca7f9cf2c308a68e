use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReplayError>;

#[derive(Debug, Error)]
pub enum ReplayError {
	#[error("failed to read fixture {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid fixture {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("duplicate element id in fixture: {0}")]
	DuplicateElement(String),

	#[error(transparent)]
	Runtime(#[from] wd::runtime::Error),
}
