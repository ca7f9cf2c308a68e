//! Driver runtime - session state, element registry, and script invocation
//!
//! This crate sits between the command handlers and a native browser binding:
//!
//! - **Binding**: traits a platform implements to expose windows, documents,
//!   and DOM nodes
//! - **Session**: the focused window plus the element registry
//! - **Element registry**: opaque ids mapped to nodes and the document
//!   generation they came from
//! - **Script invocation**: atom wrapping, argument binding, synchronous or
//!   bounded-asynchronous execution
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   wd-rs     │  Command handlers
//! └──────┬──────┘
//!        │ borrows Session, invokes atoms
//! ┌──────▼──────┐
//! │ wd-runtime  │  This crate
//! │  ┌────────┐ │
//! │  │Session │ │  Focused window + ElementStore
//! │  └────────┘ │
//! │  ┌────────┐ │
//! │  │ Script │ │  AtomScriptInvoker
//! │  └────────┘ │
//! └──────┬──────┘
//!        │ Browser / Document / ElementNode
//! ┌──────▼──────┐
//! │   binding   │  Platform (or memory) implementation
//! └─────────────┘
//! ```

pub mod binding;
pub mod element;
pub mod element_store;
pub mod error;
pub mod memory;
pub mod script;
pub mod session;

pub use binding::{BoxFut, Browser, Document, ElementNode};
pub use element::ElementHandle;
pub use element_store::{ElementEntry, ElementStore};
pub use error::{Error, Result};
pub use script::{AtomScriptInvoker, ExecutionMode, ScriptArg, ScriptInvocation};
pub use session::{CommandGuard, Session};
