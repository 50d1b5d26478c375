/// The dispatch surface: runnable actions and the tables that route to them.
use super::argv::Argv;
use super::dispatch::CliError;

/// Identity shared by every action variant. Held by composition — each
/// concrete action owns one instead of inheriting defaults.
pub struct ActionInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A routable unit: identity, usage text, and a run operation.
///
/// `run` reports `Ok(true)` when the action handled its job successfully and
/// `Ok(false)` when it handled it but came up short (missing parameter,
/// remote failure). Routing errors from nested dispatch travel as `Err`.
pub trait Action {
    fn info(&self) -> &ActionInfo;

    fn name(&self) -> &str {
        self.info().name
    }

    fn description(&self) -> &str {
        self.info().description
    }

    /// Print usage text. Called while enumerating tables for help output,
    /// so it must always succeed.
    fn usage(&self);

    fn run(&self, argv: &Argv) -> Result<bool, CliError> {
        let _ = argv;
        println!("\t{}: not implemented yet.", self.name());
        Ok(false)
    }
}

/// One token → action binding inside a table.
pub struct TableEntry {
    pub token: &'static str,
    pub action: Box<dyn Action>,
}

/// Ordered token → action mapping for one level of dispatch. Built once by a
/// constructor function and never modified afterwards.
pub struct OptionTable {
    entries: Vec<TableEntry>,
}

impl OptionTable {
    #[must_use]
    pub fn new(entries: Vec<TableEntry>) -> Self {
        Self { entries }
    }

    /// Linear scan for the first entry whose token matches. Tokens are
    /// unique per table; should a misconfigured table carry duplicates, the
    /// first occurrence wins.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<&dyn Action> {
        self.entries
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.action.as_ref())
    }

    /// All entries in declaration order, for help enumeration.
    #[must_use]
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }
}
