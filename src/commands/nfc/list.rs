/// `nfc list`: show every card the registry knows about.
use crate::cli::output::write_cards;
use crate::cli::{Action, ActionInfo, Argv, CliError};
use crate::commands::registry_client;

pub struct ListCommand {
    info: ActionInfo,
}

impl ListCommand {
    #[must_use]
    pub fn new() -> Self {
        Self {
            info: ActionInfo {
                name: "List",
                description: "List all registered cards",
            },
        }
    }
}

impl Action for ListCommand {
    fn info(&self) -> &ActionInfo {
        &self.info
    }

    fn usage(&self) {
        println!("\t\tUsage: acontrol-cli nfc list [--json] [--host <host>] [--port <port>]\n");
    }

    fn run(&self, argv: &Argv) -> Result<bool, CliError> {
        match registry_client(argv).list_cards() {
            Ok(cards) => {
                write_cards(&cards, argv.flag("json"));
                Ok(true)
            }
            Err(err) => {
                eprintln!("nfc list failed: {err}");
                Ok(false)
            }
        }
    }
}
