//! Command system types.

use thiserror::Error;

use super::builtin::Command;
use crate::transform::TransformError;

/// Pattern for one quoted argument literal. The opening quote decides the
/// closing one, and no escapes are recognised.
const QUOTED_ARGUMENT: &str = r#"(?:'[^']*'|"[^"]*")"#;

/// Number of quoted arguments a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Arity {
    pub required: usize,
    pub optional: usize,
}

impl Arity {
    pub const NONE: Self = Self {
        required: 0,
        optional: 0,
    };

    pub const fn new(required: usize, optional: usize) -> Self {
        Self { required, optional }
    }

    /// Maximum number of arguments.
    pub fn total(&self) -> usize {
        self.required + self.optional
    }

    pub fn takes_arguments(&self) -> bool {
        self.total() > 0
    }

    /// Regex fragment matching the arguments that follow the key, each
    /// preceded by a single space.
    pub fn pattern(&self) -> String {
        let mut pattern = String::new();
        for _ in 0..self.required {
            pattern.push_str(&format!(" {QUOTED_ARGUMENT}"));
        }
        for _ in 0..self.optional {
            pattern.push_str(&format!("(?: {QUOTED_ARGUMENT})?"));
        }
        pattern
    }
}

/// Failure of a single command invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{command} requires {required} argument(s), got {given}")]
    MissingRequiredArgument {
        command: &'static str,
        required: usize,
        given: usize,
    },

    #[error("{command} failed: {source}")]
    Transform {
        command: &'static str,
        #[source]
        source: TransformError,
    },
}

/// Everything the registry knows about one command.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    pub key: char,
    pub command: Command,
    pub name: &'static str,
    pub hint: Option<String>,
    pub arity: Arity,
    /// Left out of preview mode; still usable in chains.
    pub hidden: bool,
    /// Tokenizer alternative for argument commands, empty otherwise.
    pub arg_pattern: String,
}

impl CommandDescriptor {
    pub fn new(command: Command, separator: &str) -> Self {
        let key = command.key();
        let arity = command.arity();
        let arg_pattern = if arity.takes_arguments() {
            format!("{}{}", regex::escape(&key.to_string()), arity.pattern())
        } else {
            String::new()
        };

        Self {
            key,
            command,
            name: command.name(),
            hint: command.hint(separator),
            arity,
            hidden: false,
            arg_pattern,
        }
    }

    pub fn arg_count(&self) -> usize {
        self.arity.total()
    }

    pub fn invoke(&self, input: &str, args: &[&str]) -> Result<String, CommandError> {
        self.command.apply(input, args)
    }
}
