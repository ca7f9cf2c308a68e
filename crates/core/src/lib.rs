//! Element command handlers for a wire-protocol browser driver.
//!
//! A [`CommandExecutor`] wraps one [`runtime::Session`] and runs
//! [`protocol::CommandRequest`]s against it, producing exactly one
//! [`protocol::Response`] per request.
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use wd::protocol::CommandRequest;
//! use wd::runtime::{Session, memory::MemoryBrowser};
//! use wd::{CommandExecutor, ExecutorConfig};
//!
//! let browser = Arc::new(MemoryBrowser::new());
//! let session = Arc::new(Session::new("s1").with_browser(browser));
//! let exec = CommandExecutor::new(session, ExecutorConfig::default());
//!
//! let response = exec
//! 	.execute(&CommandRequest::new("clearElement").with_locator("id", "element-1"))
//! 	.await;
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod preconditions;
pub mod resolver;

pub use commands::clear::ClearElementCommand;
pub use commands::def::CommandHandler;
pub use commands::registry::{CommandId, command_name, dispatch, lookup_command};
pub use config::ExecutorConfig;
pub use error::{CommandError, Result};
pub use executor::CommandExecutor;
pub use preconditions::{MUTATION_PRECONDITIONS, Precondition};
pub use resolver::ElementResolver;
pub use wd_protocol as protocol;
pub use wd_runtime as runtime;
