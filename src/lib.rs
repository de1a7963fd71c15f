pub mod chain;
pub mod commands;
pub mod config;
pub mod formatter;
pub mod items;
pub mod logging;
pub mod transform;

pub use config::Config;
pub use formatter::{ErrorPolicy, Formatter};
pub use items::{ItemList, ResultItem};

/// Process one host argument with `config`.
///
/// Only a broken command table fails; transform errors are reported as
/// items.
pub fn run(input: &str, config: Config) -> Result<ItemList, commands::RegistryError> {
    let formatter = Formatter::new(config)?;
    Ok(ItemList::new(formatter.format(input)))
}
