//! Built-in transformation commands.

use super::render::render_invocation;
use super::types::{Arity, CommandError};
use crate::transform::{self, DEFAULT_INDENT, DEFAULT_SLUG_REPLACEMENT};

/// Every transformation a chain can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Lowercase,
    Uppercase,
    CamelCase,
    PascalCase,
    SnakeCase,
    Trim,
    Capitalize,
    EncodeUri,
    DecodeUri,
    Reverse,
    /// Optional replacement joiner
    Slugify,
    /// Substring plus optional replacement
    Replace,
    /// Optional indent
    FormatJson,
}

impl Command {
    /// All built-in commands, in preview order.
    pub fn builtins() -> Vec<Self> {
        vec![
            Self::Lowercase,
            Self::Uppercase,
            Self::CamelCase,
            Self::PascalCase,
            Self::SnakeCase,
            Self::Trim,
            Self::Capitalize,
            Self::EncodeUri,
            Self::DecodeUri,
            Self::Reverse,
            Self::Slugify,
            Self::Replace,
            Self::FormatJson,
        ]
    }

    /// Key typed in a chain.
    pub fn key(&self) -> char {
        match self {
            Self::Lowercase => 'l',
            Self::Uppercase => 'u',
            Self::CamelCase => 'c',
            Self::PascalCase => 'p',
            Self::SnakeCase => 's',
            Self::Trim => 't',
            Self::Capitalize => 'a',
            Self::EncodeUri => 'e',
            Self::DecodeUri => 'd',
            Self::Reverse => 'r',
            Self::Slugify => 'S',
            Self::Replace => 'R',
            Self::FormatJson => 'J',
        }
    }

    /// Display name, also used for the path and icon lookup.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lowercase => "Lowercase",
            Self::Uppercase => "Uppercase",
            Self::CamelCase => "Camelcase",
            Self::PascalCase => "Pascalcase",
            Self::SnakeCase => "Snakecase",
            Self::Trim => "Trim",
            Self::Capitalize => "Capitalize",
            Self::EncodeUri => "Encode URI",
            Self::DecodeUri => "Decode URI",
            Self::Reverse => "Reverse",
            Self::Slugify => "Slugify",
            Self::Replace => "Replace",
            Self::FormatJson => "Format JSON",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Self::Slugify | Self::FormatJson => Arity::new(0, 1),
            Self::Replace => Arity::new(1, 1),
            _ => Arity::NONE,
        }
    }

    /// Usage hint for argument commands, spelled with the chain separator.
    pub fn hint(&self, separator: &str) -> Option<String> {
        let prefix = separator.trim_start();
        let usage = |args: &[&str]| {
            render_invocation(self.key(), args)
                .map(|invocation| format!("{prefix}{invocation}"))
                .unwrap_or_default()
        };

        match self {
            Self::Slugify => Some(format!(
                "Takes one argument: {}",
                usage(&["<replacement>"])
            )),
            Self::Replace => Some(format!(
                "Takes two arguments: {}",
                usage(&["<substring>", "<replacement>"])
            )),
            Self::FormatJson => Some(format!(
                "Takes one argument: {}. Integer of indentation spaces or 't' for tab char",
                usage(&["<indent>"])
            )),
            _ => None,
        }
    }

    /// Apply to `input`. Missing optional arguments take their defaults and
    /// arguments beyond the arity are ignored.
    pub fn apply(&self, input: &str, args: &[&str]) -> Result<String, CommandError> {
        let arity = self.arity();
        if args.len() < arity.required {
            return Err(CommandError::MissingRequiredArgument {
                command: self.name(),
                required: arity.required,
                given: args.len(),
            });
        }
        let arg = |index: usize, default: &'static str| args.get(index).copied().unwrap_or(default);

        let output = match self {
            Self::Lowercase => transform::to_lower_case(input),
            Self::Uppercase => transform::to_upper_case(input),
            Self::CamelCase => transform::to_camel_case(input),
            Self::PascalCase => transform::to_pascal_case(input),
            Self::SnakeCase => transform::to_snake_case(input),
            Self::Trim => transform::trim(input),
            Self::Capitalize => transform::capitalize(input),
            Self::EncodeUri => transform::encode_uri(input),
            Self::DecodeUri => transform::decode_uri(input).map_err(|source| self.failed(source))?,
            Self::Reverse => transform::reverse(input),
            Self::Slugify => transform::slugify(input, arg(0, DEFAULT_SLUG_REPLACEMENT)),
            Self::Replace => transform::replace(input, arg(0, ""), arg(1, "")),
            Self::FormatJson => {
                transform::pretty_json(input, arg(0, DEFAULT_INDENT)).map_err(|source| self.failed(source))?
            }
        };
        Ok(output)
    }

    fn failed(&self, source: transform::TransformError) -> CommandError {
        CommandError::Transform {
            command: self.name(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_keys_are_unique() {
        let keys: HashSet<_> = Command::builtins().iter().map(Command::key).collect();
        assert_eq!(keys.len(), Command::builtins().len());
    }

    #[test]
    fn only_argument_commands_have_hints() {
        for command in Command::builtins() {
            assert_eq!(
                command.hint(" /").is_some(),
                command.arity().takes_arguments(),
                "{command:?}"
            );
        }
    }

    #[test]
    fn hint_uses_separator_without_leading_space() {
        assert_eq!(
            Command::Replace.hint(" /").unwrap(),
            "Takes two arguments: /R '<substring>' '<replacement>'"
        );
        assert_eq!(
            Command::Slugify.hint("::").unwrap(),
            "Takes one argument: ::S '<replacement>'"
        );
    }

    #[test]
    fn apply_uses_defaults_for_optional_arguments() {
        assert_eq!(Command::Slugify.apply("a b", &[]).unwrap(), "a-b");
        assert_eq!(Command::Slugify.apply("a b", &["+"]).unwrap(), "a+b");
        assert_eq!(Command::Replace.apply("a-b", &["-"]).unwrap(), "ab");
        assert_eq!(Command::Replace.apply("a-b", &["-", "="]).unwrap(), "a=b");
        assert_eq!(Command::FormatJson.apply("[1]", &[]).unwrap(), "[\n  1\n]");
    }

    #[test]
    fn apply_ignores_extra_arguments() {
        assert_eq!(Command::Uppercase.apply("a", &["x", "y"]).unwrap(), "A");
    }

    #[test]
    fn replace_without_substring_is_missing_argument() {
        let err = Command::Replace.apply("text", &[]).unwrap_err();
        assert!(matches!(
            err,
            CommandError::MissingRequiredArgument {
                command: "Replace",
                required: 1,
                given: 0
            }
        ));
    }

    #[test]
    fn failing_transforms_name_the_command() {
        let err = Command::FormatJson.apply("nope", &[]).unwrap_err();
        assert!(err.to_string().starts_with("Format JSON failed"));

        let err = Command::DecodeUri.apply("%E0%A4%A", &[]).unwrap_err();
        assert!(matches!(err, CommandError::Transform { command: "Decode URI", .. }));
    }

    #[test]
    fn every_command_handles_empty_input() {
        for command in Command::builtins() {
            let result = match command {
                Command::Replace => command.apply("", &["x"]),
                Command::FormatJson => {
                    assert!(command.apply("", &[]).is_err());
                    continue;
                }
                _ => command.apply("", &[]),
            };
            assert_eq!(result.unwrap(), "", "{command:?}");
        }
    }
}
