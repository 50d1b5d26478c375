/// `help` context: enumerate every top-level context with its usage.
use crate::cli::{Action, ActionInfo, Argv, CliError};

pub struct HelpContext {
    info: ActionInfo,
}

impl HelpContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            info: ActionInfo {
                name: "Help",
                description: "Show usage options for every context",
            },
        }
    }
}

impl Action for HelpContext {
    fn info(&self) -> &ActionInfo {
        &self.info
    }

    fn usage(&self) {
        println!("\tUsage: acontrol-cli help\n");
    }

    fn run(&self, _argv: &Argv) -> Result<bool, CliError> {
        println!("Usage: acontrol-cli <context> [<command>] [--option value | -option=value ...]\n");
        println!("Listing all contexts:\n");

        for entry in super::context_table().entries() {
            println!(
                "Context {} - {}\n{}\n",
                entry.token,
                entry.action.name(),
                entry.action.description()
            );
            entry.action.usage();
        }

        Ok(true)
    }
}
