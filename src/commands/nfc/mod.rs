/// `nfc` context: card management against the remote registry.
pub mod authorize;
pub mod delete;
pub mod list;
pub mod restore;

use crate::cli::{Action, ActionInfo, Argv, CliError, OptionTable, TableEntry, dispatch_nested};

pub struct NfcContext {
    info: ActionInfo,
}

impl NfcContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            info: ActionInfo {
                name: "NFC",
                description: "Manage the cards authorized to access this device",
            },
        }
    }
}

/// Commands valid under the NFC context, in help order.
fn command_table() -> OptionTable {
    OptionTable::new(vec![
        TableEntry {
            token: "authorize",
            action: Box::new(authorize::AuthorizeCommand::new()),
        },
        TableEntry {
            token: "restore",
            action: Box::new(restore::RestoreCommand::new()),
        },
        TableEntry {
            token: "list",
            action: Box::new(list::ListCommand::new()),
        },
        TableEntry {
            token: "delete",
            action: Box::new(delete::DeleteCommand::new()),
        },
    ])
}

impl Action for NfcContext {
    fn info(&self) -> &ActionInfo {
        &self.info
    }

    fn usage(&self) {
        println!("\tUsage: acontrol-cli nfc <command> [options]\n");
        println!("\tListing all commands:\n");
        for entry in command_table().entries() {
            println!(
                "\tCommand {}\n\t{}\n",
                entry.action.name(),
                entry.action.description()
            );
            entry.action.usage();
        }
    }

    fn run(&self, argv: &Argv) -> Result<bool, CliError> {
        dispatch_nested(&command_table(), "NFC", argv, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_table_tokens() {
        let table = command_table();
        for token in ["authorize", "restore", "list", "delete"] {
            assert!(table.resolve(token).is_some(), "missing {token}");
        }
        assert!(table.resolve("format").is_none());
    }
}
