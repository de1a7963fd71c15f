//! Centralized command system.
//!
//! This module is the single source of truth for the transformation
//! commands: the same descriptor list drives execution, preview ordering,
//! hint text and the chain tokenizer pattern.
//!
//! # Architecture
//!
//! - `types`: Descriptors, arity and invocation errors
//! - `builtin`: The built-in transformation commands
//! - `registry`: Ordered registry keyed by command character
//! - `render`: Invocation, path and reference rendering

mod builtin;
mod registry;
mod render;
mod types;

pub use builtin::Command;
pub use registry::{CommandRegistry, RegistryError};
pub use render::{PATH_SEPARATOR, command_table, format_path, preview_subtitle, render_invocation};
pub use types::{Arity, CommandDescriptor, CommandError};
