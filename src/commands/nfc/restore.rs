/// `nfc restore`: put the reader into restore mode for the next card.
use crate::cli::{Action, ActionInfo, Argv, CliError};
use crate::commands::registry_client;

pub struct RestoreCommand {
    info: ActionInfo,
}

impl RestoreCommand {
    #[must_use]
    pub fn new() -> Self {
        Self {
            info: ActionInfo {
                name: "Restore",
                description: "Restore a formatted card to factory state",
            },
        }
    }
}

impl Action for RestoreCommand {
    fn info(&self) -> &ActionInfo {
        &self.info
    }

    fn usage(&self) {
        println!("\t\tUsage: acontrol-cli nfc restore [--host <host>] [--port <port>]\n");
    }

    fn run(&self, argv: &Argv) -> Result<bool, CliError> {
        match registry_client(argv).restore_card() {
            Ok(()) => {
                println!("Restore requested. Present the card to the reader.");
                Ok(true)
            }
            Err(err) => {
                eprintln!("nfc restore failed: {err}");
                Ok(false)
            }
        }
    }
}
