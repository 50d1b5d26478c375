/// `nfc delete`: unauthorize a card.
///
/// The registry exposes no delete route yet, so this rides the trait's
/// not-implemented default for `run`.
use crate::cli::{Action, ActionInfo};

pub struct DeleteCommand {
    info: ActionInfo,
}

impl DeleteCommand {
    #[must_use]
    pub fn new() -> Self {
        Self {
            info: ActionInfo {
                name: "Delete",
                description: "Unauthorize a card to access this device",
            },
        }
    }
}

impl Action for DeleteCommand {
    fn info(&self) -> &ActionInfo {
        &self.info
    }

    fn usage(&self) {
        println!("\t\tUsage: acontrol-cli nfc delete --name <name>\n");
    }
}
