//! Legacy Redis commands that still work but draw a warning when called.

use std::collections::BTreeSet;

/// Commands Redis has deprecated in favour of newer forms
/// (`LMOVE`, `ZRANGE ... BYSCORE`, `SET ... NX/EX/GET`, `HSET`).
pub const DEPRECATED_COMMANDS: &[&str] = &[
    "rpoplpush",
    "zrangebyscore",
    "zrevrange",
    "zrevrangebyscore",
    "getset",
    "hmset",
    "setex",
    "setnx",
];

/// An editable, case-insensitive set of deprecated command names.
///
/// Starts out as [`DEPRECATED_COMMANDS`]. Add or remove entries, or clear
/// the whole set to silence deprecation warnings entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedCommands {
    names: BTreeSet<String>,
}

impl Default for DeprecatedCommands {
    fn default() -> Self {
        Self {
            names: DEPRECATED_COMMANDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DeprecatedCommands {
    /// A set with no entries; nothing warns.
    pub fn none() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Add a command name.
    pub fn insert(&mut self, command: &str) -> bool {
        self.names.insert(command.to_ascii_lowercase())
    }

    /// Remove a command name.
    pub fn remove(&mut self, command: &str) -> bool {
        self.names.remove(&command.to_ascii_lowercase())
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Whether calling `command` should warn.
    pub fn contains(&self, command: &str) -> bool {
        self.names.contains(&command.to_ascii_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for DeprecatedCommands {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::none();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fixed_list() {
        let set = DeprecatedCommands::default();
        assert_eq!(set.len(), DEPRECATED_COMMANDS.len());
        for name in DEPRECATED_COMMANDS {
            assert!(set.contains(name), "{} should be deprecated", name);
        }
        assert!(!set.contains("lmove"));
        assert!(!set.contains("hset"));
    }

    #[test]
    fn test_case_insensitive() {
        let set = DeprecatedCommands::default();
        assert!(set.contains("HMSET"));
        assert!(set.contains("SetEx"));
    }

    #[test]
    fn test_edit_set() {
        let mut set = DeprecatedCommands::default();
        assert!(set.remove("SETNX"));
        assert!(!set.contains("setnx"));
        assert!(set.insert("KEYS"));
        assert!(set.contains("keys"));
        assert!(!set.insert("keys"));
    }

    #[test]
    fn test_clear_and_none() {
        let mut set = DeprecatedCommands::default();
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains("hmset"));
        assert_eq!(DeprecatedCommands::none(), set);
    }

    #[test]
    fn test_from_iter() {
        let set: DeprecatedCommands = ["GETSET", "hmset"].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["getset", "hmset"]);
    }
}
