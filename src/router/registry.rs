use super::error::RouterError;
use super::segment::CAPTURE;

use std::collections::HashMap;

use regex::Regex;

const BUILTINS: &[(&str, &str)] = &[
    ("id", r"\d+"),
    (
        "ip",
        r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])){3}",
    ),
    (
        "uuid",
        r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
    ),
];

/// Validators keyed by capture name.
///
/// Every pattern is compiled anchored at both ends, so a validator always
/// judges a whole segment and never a substring of it.
#[derive(Debug, Default)]
pub struct RegexRegistry {
    map: HashMap<Box<str>, Regex>,
}

impl RegexRegistry {
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for &(name, pattern) in BUILTINS {
            let regex = compile(name, pattern).unwrap_or_else(|e| unreachable!("{}", e));
            registry.map.insert(name.into(), regex);
        }
        registry
    }

    /// Compiles `pattern` and stores it under `name`, replacing any previous
    /// validator of that name. A leading `:` on `name` is ignored.
    pub fn register(&mut self, name: &str, pattern: &str) -> Result<(), RouterError> {
        let name = normalize(name);
        let regex = compile(name, pattern)?;
        tracing::debug!(name, pattern, "registered validator");
        self.map.insert(name.into(), regex);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Regex> {
        self.map.get(normalize(name))
    }

    /// Returns `false` only when a validator exists for `name` and rejects
    /// `value`.
    pub fn accepts(&self, name: &str, value: &str) -> bool {
        match self.map.get(name) {
            Some(regex) => regex.is_match(value),
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn normalize(name: &str) -> &str {
    name.strip_prefix(CAPTURE).unwrap_or(name)
}

/// The text must compile on its own before it is wrapped, otherwise a
/// stray `)` could close the anchoring group early.
fn compile(name: &str, pattern: &str) -> Result<Regex, RouterError> {
    let invalid = |source| RouterError::InvalidRegex {
        name: name.into(),
        source,
    };
    Regex::new(pattern).map_err(invalid)?;
    Regex::new(&format!("^(?:{})$", pattern)).map_err(invalid)
}
