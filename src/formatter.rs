//! Result formatter: chooses chain or preview mode and builds the items.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chain::{ChainToken, ChainTokenizer, Pipeline, split_input};
use crate::commands::{CommandDescriptor, CommandRegistry, RegistryError, format_path, preview_subtitle};
use crate::config::Config;
use crate::items::ResultItem;

pub const CHAINED_ID: &str = "chained";
pub const ERROR_ID: &str = "error";
const CHAINED_ICON: &str = "Chained";

/// What preview mode does with a command that fails on the subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Emit a diagnostic item carrying the failure title.
    #[default]
    Placeholder,
    /// Leave the command out of the list.
    Skip,
}

pub struct Formatter {
    registry: CommandRegistry,
    tokenizer: ChainTokenizer,
    config: Config,
}

impl Formatter {
    pub fn new(config: Config) -> Result<Self, RegistryError> {
        let registry = CommandRegistry::builtin(&config.separator)?.with_hidden(&config.hidden);
        Self::with_registry(registry, config)
    }

    pub fn with_registry(registry: CommandRegistry, config: Config) -> Result<Self, RegistryError> {
        let tokenizer = ChainTokenizer::new(&registry)?;
        Ok(Self {
            registry,
            tokenizer,
            config,
        })
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Turn one raw host argument into result items. Never fails: every
    /// transform error becomes a diagnostic item.
    pub fn format(&self, input: &str) -> Vec<ResultItem> {
        let parts = split_input(input, &self.config.separator, &self.tokenizer);
        let tokens = parts
            .chain
            .map(|chain| self.tokenizer.tokenize(chain))
            .unwrap_or_default();

        if tokens.is_empty() {
            debug!(subject = parts.subject, "preview mode");
            self.preview_items(parts.subject)
        } else {
            debug!(subject = parts.subject, tokens = tokens.len(), "chain mode");
            vec![self.chain_item(parts.subject, &tokens)]
        }
    }

    fn chain_item(&self, subject: &str, tokens: &[ChainToken<'_>]) -> ResultItem {
        let pipeline = Pipeline::new(&self.registry);
        let subtitle = format_path(&pipeline.attempted_path(tokens));
        let icon = self.icon_ref(CHAINED_ICON);

        match pipeline.run(subject, tokens) {
            Ok(output) => ResultItem::for_value(
                CHAINED_ID,
                output.value,
                subtitle,
                icon,
                &self.config.multiline_title,
            ),
            Err(err) => {
                debug!(error = %err, "chain failed");
                ResultItem::for_failure(ERROR_ID, subject, subtitle, icon, &self.config.failure_title)
            }
        }
    }

    fn preview_items(&self, subject: &str) -> Vec<ResultItem> {
        self.registry
            .visible()
            .filter_map(|descriptor| self.preview_item(descriptor, subject))
            .collect()
    }

    fn preview_item(&self, descriptor: &CommandDescriptor, subject: &str) -> Option<ResultItem> {
        let identifier = descriptor.name.to_lowercase();
        let subtitle = preview_subtitle(descriptor);
        let icon = self.icon_ref(descriptor.name);

        match descriptor.invoke(subject, &[]) {
            Ok(value) => Some(ResultItem::for_value(
                identifier,
                value,
                subtitle,
                icon,
                &self.config.multiline_title,
            )),
            Err(err) => {
                debug!(command = descriptor.name, error = %err, "preview transform failed");
                match self.config.on_transform_error {
                    ErrorPolicy::Placeholder => Some(ResultItem::for_failure(
                        identifier,
                        subject,
                        subtitle,
                        icon,
                        &self.config.failure_title,
                    )),
                    ErrorPolicy::Skip => None,
                }
            }
        }
    }

    fn icon_ref(&self, name: &str) -> String {
        format!("{}/{}.png", self.config.icon_dir.trim_end_matches('/'), name)
    }
}
