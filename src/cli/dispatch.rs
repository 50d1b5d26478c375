/// Dispatch: narrow the argument stream to a single action and run it.
use thiserror::Error;

use super::action::OptionTable;
use super::argv::Argv;
use crate::commands;

/// Routing failures. Always fatal to the invocation; `main` prints the
/// message and exits with the mapped code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing arguments. Type acontrol-cli help to show usage options.")]
    MissingArguments,

    #[error("Context {token} not found. Type acontrol-cli help to show usage options.")]
    UnknownContext { token: String },

    #[error("{context} command: missing argument. Type acontrol-cli help to show usage options.")]
    MissingCommand { context: &'static str },

    #[error("Command {token} not found. Type acontrol-cli help to show usage options.")]
    UnknownCommand { token: String },
}

impl CliError {
    /// Process exit code: 1 at the context level, 2 inside a resolved
    /// context.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArguments | Self::UnknownContext { .. } => 1,
            Self::MissingCommand { .. } | Self::UnknownCommand { .. } => 2,
        }
    }
}

/// Resolve `argv[1]` against the top-level context table and run the match.
///
/// # Errors
///
/// `MissingArguments` when no context token is given, `UnknownContext` when
/// it resolves to nothing; whatever the resolved action's `run` returns
/// otherwise.
pub fn dispatch(argv: &Argv) -> Result<bool, CliError> {
    let token = match argv.get(1) {
        Some(token) if !token.is_empty() => token,
        _ => return Err(CliError::MissingArguments),
    };

    let contexts = commands::context_table();
    let action = contexts
        .resolve(token)
        .ok_or_else(|| CliError::UnknownContext {
            token: token.to_owned(),
        })?;

    action.run(argv)
}

/// Resolve `argv[index]` against a nested command table and run the match.
///
/// Contexts call this from their own `run` to descend one level; a nested
/// action may descend again with a deeper index, so nesting depth is bounded
/// only by the tables themselves.
///
/// # Errors
///
/// `MissingCommand` / `UnknownCommand` on routing failure at this level.
pub fn dispatch_nested(
    table: &OptionTable,
    context: &'static str,
    argv: &Argv,
    index: usize,
) -> Result<bool, CliError> {
    let token = match argv.get(index) {
        Some(token) if !token.is_empty() => token,
        _ => return Err(CliError::MissingCommand { context }),
    };

    let action = table
        .resolve(token)
        .ok_or_else(|| CliError::UnknownCommand {
            token: token.to_owned(),
        })?;

    action.run(argv)
}
