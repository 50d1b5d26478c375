/// Named-parameter scanning over the raw argument list.
///
/// The scanner sees the *entire* process argument list, independent of how
/// far the dispatcher has recursed: a leaf command three levels deep can
/// still read `--host` given anywhere on the line. Two spellings are
/// accepted, scanned left to right with the first match winning:
///
/// - `-name=value` — everything after the first `=` is the value.
/// - `--name value` — the next argument is the value, unless it looks like
///   another flag (starts with `-`), in which case the value is empty.
///
/// An absent parameter and an explicitly empty one are both reported as
/// `""`; callers cannot tell them apart.
pub struct Argv {
    args: Vec<String>,
}

impl Argv {
    /// Capture the current process arguments.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::args().collect())
    }

    /// Wrap an explicit argument list (index 0 is the program name).
    #[must_use]
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Positional access, program name at index 0.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// First occurrence of `name` in either spelling, with its value.
    fn find_token(&self, name: &str) -> Option<(usize, String)> {
        let assign = format!("-{name}=");
        let bare = format!("--{name}");

        for (index, arg) in self.args.iter().enumerate() {
            if let Some(value) = arg.strip_prefix(&assign) {
                return Some((index, value.to_owned()));
            }
            if *arg == bare {
                let value = match self.args.get(index + 1) {
                    Some(next) if !next.starts_with('-') => next.clone(),
                    _ => String::new(),
                };
                return Some((index, value));
            }
        }
        None
    }

    /// Value of the named parameter, `""` when absent or valueless.
    #[must_use]
    pub fn string_parameter(&self, name: &str) -> String {
        self.find_token(name).map_or_else(String::new, |(_, v)| v)
    }

    /// Whether the named parameter appears at all, with or without a value.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.find_token(name).is_some()
    }

    /// Named parameter parsed as a port number, falling back to `default`
    /// when absent or unparseable.
    #[must_use]
    pub fn u16_parameter(&self, name: &str, default: u16) -> u16 {
        self.string_parameter(name).parse().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Argv {
        Argv::new(args.iter().map(|s| (*s).to_owned()).collect())
    }

    #[test]
    fn test_double_dash_with_value() {
        let a = argv(&["acontrol-cli", "nfc", "authorize", "--name", "Alice"]);
        assert_eq!(a.string_parameter("name"), "Alice");
    }

    #[test]
    fn test_single_dash_assignment() {
        let a = argv(&["acontrol-cli", "nfc", "authorize", "-name=Bob"]);
        assert_eq!(a.string_parameter("name"), "Bob");
    }

    #[test]
    fn test_assignment_value_keeps_later_equals() {
        let a = argv(&["acontrol-cli", "-name=a=b"]);
        assert_eq!(a.string_parameter("name"), "a=b");
    }

    #[test]
    fn test_double_dash_trailing_is_empty() {
        let a = argv(&["acontrol-cli", "nfc", "authorize", "--name"]);
        assert_eq!(a.string_parameter("name"), "");
    }

    #[test]
    fn test_double_dash_before_flag_is_empty() {
        let a = argv(&["acontrol-cli", "--name", "--uuid", "u1"]);
        assert_eq!(a.string_parameter("name"), "");
        assert_eq!(a.string_parameter("uuid"), "u1");
    }

    #[test]
    fn test_absent_parameter_is_empty() {
        let a = argv(&["acontrol-cli", "nfc", "list"]);
        assert_eq!(a.string_parameter("name"), "");
        assert!(!a.flag("name"));
    }

    #[test]
    fn test_first_match_wins() {
        let a = argv(&["acontrol-cli", "-name=first", "--name", "second"]);
        assert_eq!(a.string_parameter("name"), "first");
    }

    #[test]
    fn test_scan_is_position_independent() {
        let a = argv(&["acontrol-cli", "--host", "reader.local", "nfc", "list"]);
        assert_eq!(a.string_parameter("host"), "reader.local");
    }

    #[test]
    fn test_flag_without_value() {
        let a = argv(&["acontrol-cli", "nfc", "list", "--json"]);
        assert!(a.flag("json"));
        assert_eq!(a.string_parameter("json"), "");
    }

    #[test]
    fn test_u16_parameter_parse_and_fallback() {
        let a = argv(&["acontrol-cli", "--port", "9090"]);
        assert_eq!(a.u16_parameter("port", 8088), 9090);

        let bad = argv(&["acontrol-cli", "-port=many"]);
        assert_eq!(bad.u16_parameter("port", 8088), 8088);
    }
}
