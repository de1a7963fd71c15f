//! Rendering of invocations, paths and the command reference.

use super::registry::CommandRegistry;
use super::types::CommandDescriptor;

/// Joiner between applied command names.
pub const PATH_SEPARATOR: &str = "\u{2192}";

/// Spell a command the way a user would type it in a chain: the key, then
/// each argument quoted and preceded by a space.
///
/// Single quotes are preferred. Returns `None` when an argument contains
/// both quote characters, since such a literal cannot be written.
pub fn render_invocation(key: char, args: &[&str]) -> Option<String> {
    let mut out = key.to_string();
    for arg in args {
        let quote = if !arg.contains('\'') {
            '\''
        } else if !arg.contains('"') {
            '"'
        } else {
            return None;
        };
        out.push(' ');
        out.push(quote);
        out.push_str(arg);
        out.push(quote);
    }
    Some(out)
}

/// Human-readable transformation path, e.g. `Pascalcase→Snakecase`.
pub fn format_path<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| name.as_ref())
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// Subtitle shown for a command in preview mode.
pub fn preview_subtitle(descriptor: &CommandDescriptor) -> String {
    match &descriptor.hint {
        Some(hint) => format!("{}. {}", descriptor.name, hint),
        None => descriptor.name.to_string(),
    }
}

/// Plain-text reference of every registered command.
pub fn command_table(registry: &CommandRegistry) -> String {
    let mut lines = vec![String::from("Commands:")];
    for descriptor in registry.iter() {
        let mut line = format!("  {}  {:12}", descriptor.key, descriptor.name);
        match (descriptor.arity.required, descriptor.arg_count()) {
            (_, 0) => {}
            (required, total) if required == total => line.push_str(&format!(" ({total} args)")),
            (required, total) => line.push_str(&format!(" ({required}-{total} args)")),
        }
        if let Some(hint) = &descriptor.hint {
            line.push_str(&format!(" {}", hint));
        }
        if descriptor.hidden {
            line.push_str(" (hidden from preview)");
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_invocation_without_arguments_is_the_key() {
        assert_eq!(render_invocation('u', &[]).unwrap(), "u");
    }

    #[test]
    fn render_invocation_picks_a_quote_the_argument_lacks() {
        assert_eq!(render_invocation('R', &["a", "b"]).unwrap(), "R 'a' 'b'");
        assert_eq!(render_invocation('S', &["it's"]).unwrap(), "S \"it's\"");
        assert!(render_invocation('S', &["'\""]).is_none());
    }

    #[test]
    fn format_path_uses_arrow() {
        assert_eq!(format_path(&["Pascalcase", "Snakecase"]), "Pascalcase→Snakecase");
        assert_eq!(format_path(&["Camelcase"]), "Camelcase");
        assert_eq!(format_path::<&str>(&[]), "");
    }

    #[test]
    fn command_table_lists_every_command() {
        let registry = CommandRegistry::builtin(" /").unwrap();
        let table = command_table(&registry);
        assert!(table.starts_with("Commands:"));
        assert_eq!(table.lines().count(), registry.len() + 1);
        assert!(table.contains("R  Replace      (1-2 args)"));
        assert!(table.contains("J  Format JSON  (0-1 args)"));
        assert!(!table.contains("u  Uppercase    ("));
    }
}
