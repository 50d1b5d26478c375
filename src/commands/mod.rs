/// Command surface: one module per context, plus the top-level table.
pub mod finger;
pub mod help;
pub mod nfc;

use crate::cli::{Argv, OptionTable, TableEntry};
use crate::registry::{DEFAULT_HOST, DEFAULT_PORT, RegistryClient};

/// Build the top-level context table. Cheap to construct; callers build a
/// fresh one per dispatch and never modify it.
#[must_use]
pub fn context_table() -> OptionTable {
    OptionTable::new(vec![
        TableEntry {
            token: "nfc",
            action: Box::new(nfc::NfcContext::new()),
        },
        TableEntry {
            token: "finger",
            action: Box::new(finger::FingerContext::new()),
        },
        TableEntry {
            token: "help",
            action: Box::new(help::HelpContext::new()),
        },
    ])
}

/// Registry client pointed at `--host` / `--port`, or the appliance
/// defaults when neither is given.
#[must_use]
pub fn registry_client(argv: &Argv) -> RegistryClient {
    let host = argv.string_parameter("host");
    let host = if host.is_empty() {
        DEFAULT_HOST
    } else {
        host.as_str()
    };
    let port = argv.u16_parameter("port", DEFAULT_PORT);
    RegistryClient::new(host, port)
}
