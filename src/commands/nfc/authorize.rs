/// `nfc authorize`: register a new card with the remote registry.
use crate::cli::{Action, ActionInfo, Argv, CliError};
use crate::commands::registry_client;
use crate::types::NfcCard;

pub struct AuthorizeCommand {
    info: ActionInfo,
}

impl AuthorizeCommand {
    #[must_use]
    pub fn new() -> Self {
        Self {
            info: ActionInfo {
                name: "Authorize",
                description: "Authorize a new card to access this device",
            },
        }
    }
}

impl Action for AuthorizeCommand {
    fn info(&self) -> &ActionInfo {
        &self.info
    }

    fn usage(&self) {
        println!(
            "\t\tUsage: acontrol-cli nfc authorize --name <name> [--uuid <uuid>] [--host <host>] [--port <port>]\n"
        );
    }

    fn run(&self, argv: &Argv) -> Result<bool, CliError> {
        let name = argv.string_parameter("name");
        if name.is_empty() {
            println!("nfc authorize missing arguments. Type acontrol-cli help to show usage options.");
            return Ok(false);
        }

        // The registry assigns the id; 0 marks it unassigned.
        let card = NfcCard {
            id: 0,
            uuid: argv.string_parameter("uuid"),
            name,
        };

        println!("Authorizing {}...\n", card.name);

        match registry_client(argv).authorize_card(&card) {
            Ok(()) => {
                println!("Authorization requested. Present the card to the reader.");
                Ok(true)
            }
            Err(err) => {
                eprintln!("nfc authorize failed: {err}");
                Ok(false)
            }
        }
    }
}
