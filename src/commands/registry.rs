//! Command registry for centralized access.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

use super::builtin::Command;
use super::types::CommandDescriptor;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("command key '{key}' is declared by both {first} and {second}")]
    Collision {
        key: char,
        first: &'static str,
        second: &'static str,
    },

    #[error("command key {key:?} of {command} cannot be typed in a chain")]
    InvalidKey { key: char, command: &'static str },

    #[error("unknown command key '{0}'")]
    UnknownCommand(char),

    #[error("invalid tokenizer pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Ordered, immutable table of commands keyed by their chain character.
///
/// Declaration order only affects preview mode.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
    by_key: HashMap<char, usize>,
}

impl CommandRegistry {
    /// Build from descriptors, rejecting shared or untypeable keys.
    pub fn new(commands: Vec<CommandDescriptor>) -> Result<Self, RegistryError> {
        let mut by_key = HashMap::with_capacity(commands.len());

        for (index, descriptor) in commands.iter().enumerate() {
            let key = descriptor.key;
            if key.is_whitespace() || key == '\'' || key == '"' {
                return Err(RegistryError::InvalidKey {
                    key,
                    command: descriptor.name,
                });
            }
            if let Some(&existing) = by_key.get(&key) {
                let first: &CommandDescriptor = &commands[existing];
                return Err(RegistryError::Collision {
                    key,
                    first: first.name,
                    second: descriptor.name,
                });
            }
            by_key.insert(key, index);
        }

        Ok(Self { commands, by_key })
    }

    /// Registry of all built-in commands, with hints spelled for `separator`.
    pub fn builtin(separator: &str) -> Result<Self, RegistryError> {
        let commands = Command::builtins()
            .into_iter()
            .map(|command| CommandDescriptor::new(command, separator))
            .collect();
        Self::new(commands)
    }

    /// Mark `keys` as hidden from preview mode. Unknown keys are ignored.
    pub fn with_hidden(mut self, keys: &[char]) -> Self {
        for key in keys {
            match self.by_key.get(key) {
                Some(&index) => self.commands[index].hidden = true,
                None => warn!(key = %key, "ignoring unknown command key in hidden list"),
            }
        }
        self
    }

    pub fn resolve(&self, key: char) -> Result<&CommandDescriptor, RegistryError> {
        self.by_key
            .get(&key)
            .map(|&index| &self.commands[index])
            .ok_or(RegistryError::UnknownCommand(key))
    }

    /// All commands in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter()
    }

    /// Commands shown in preview mode, in declaration order.
    pub fn visible(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter().filter(|descriptor| !descriptor.hidden)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Composite tokenizer pattern: a character class of every plain key,
    /// followed by one alternative per argument command.
    pub fn token_pattern(&self) -> String {
        let plain: String = self
            .commands
            .iter()
            .filter(|descriptor| descriptor.arg_pattern.is_empty())
            .map(|descriptor| regex::escape(&descriptor.key.to_string()))
            .collect();

        let mut alternatives = Vec::new();
        if !plain.is_empty() {
            alternatives.push(format!("[{plain}]"));
        }
        alternatives.extend(
            self.commands
                .iter()
                .filter(|descriptor| !descriptor.arg_pattern.is_empty())
                .map(|descriptor| descriptor.arg_pattern.clone()),
        );
        alternatives.join("|")
    }
}
