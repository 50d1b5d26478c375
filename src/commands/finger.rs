/// `finger` context: fingerprint reader management.
///
/// The appliance firmware stubs fingerprint enrollment; the context is
/// routable so help can describe it, but it performs nothing yet.
use crate::cli::{Action, ActionInfo, Argv, CliError};

pub struct FingerContext {
    info: ActionInfo,
}

impl FingerContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            info: ActionInfo {
                name: "Fingerprint",
                description: "Manage the fingerprints authorized to access this device",
            },
        }
    }
}

impl Action for FingerContext {
    fn info(&self) -> &ActionInfo {
        &self.info
    }

    fn usage(&self) {
        println!("\tUsage: acontrol-cli finger <command> [options]\n");
    }

    fn run(&self, _argv: &Argv) -> Result<bool, CliError> {
        println!("Fingerprint management is not available yet.");
        Ok(false)
    }
}
