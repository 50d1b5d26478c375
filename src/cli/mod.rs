/// CLI layer: action contract, option tables, argument scanning, dispatch,
/// and output formatting.
pub mod action;
pub mod argv;
pub mod dispatch;
pub mod output;

pub use action::{Action, ActionInfo, OptionTable, TableEntry};
pub use argv::Argv;
pub use dispatch::{CliError, dispatch, dispatch_nested};
