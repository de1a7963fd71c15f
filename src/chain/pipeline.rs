//! Pipeline executor: folds a token sequence over the subject.

use tracing::{debug, warn};

use super::tokenizer::ChainToken;
use crate::commands::{CommandDescriptor, CommandError, CommandRegistry};

/// Successful chain run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub value: String,
    /// Display names of the applied commands, in order.
    pub applied: Vec<&'static str>,
}

pub struct Pipeline<'r> {
    registry: &'r CommandRegistry,
}

impl<'r> Pipeline<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    /// Apply every token to `subject` in order. The first failure aborts the
    /// run and discards the partial value.
    pub fn run(&self, subject: &str, tokens: &[ChainToken<'_>]) -> Result<PipelineOutput, CommandError> {
        let mut value = subject.to_string();
        let mut applied = Vec::with_capacity(tokens.len());

        for token in tokens {
            let Some(descriptor) = self.descriptor(token) else {
                continue;
            };
            let args = if descriptor.arity.takes_arguments() {
                token.arguments()
            } else {
                Vec::new()
            };

            value = descriptor.invoke(&value, &args).inspect_err(|err| {
                debug!(token = token.as_str(), error = %err, "chain step failed");
            })?;
            applied.push(descriptor.name);
        }

        Ok(PipelineOutput { value, applied })
    }

    /// Names of the commands `tokens` resolve to, whether or not they run.
    pub fn attempted_path(&self, tokens: &[ChainToken<'_>]) -> Vec<&'static str> {
        tokens
            .iter()
            .filter_map(|token| self.descriptor(token))
            .map(|descriptor| descriptor.name)
            .collect()
    }

    fn descriptor(&self, token: &ChainToken<'_>) -> Option<&'r CommandDescriptor> {
        let key = token.key()?;
        match self.registry.resolve(key) {
            Ok(descriptor) => Some(descriptor),
            Err(err) => {
                warn!(token = token.as_str(), error = %err, "skipping unresolved chain token");
                None
            }
        }
    }
}
