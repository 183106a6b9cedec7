use std::fmt;

use http::Method;

/// Setup-time failure returned from route or validator registration.
///
/// A failed registration leaves the router exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("pattern conflict: {reason}: pattern = {pattern:?}")]
    PatternConflict {
        pattern: Box<str>,
        reason: &'static str,
    },

    #[error("invalid pattern: {reason}: pattern = {pattern:?}")]
    InvalidPattern {
        pattern: Box<str>,
        reason: &'static str,
    },

    #[error("invalid regex for {name:?}: {source}")]
    InvalidRegex {
        name: Box<str>,
        #[source]
        source: regex::Error,
    },
}

impl RouterError {
    pub(super) fn conflict(pattern: &str, reason: &'static str) -> Self {
        Self::PatternConflict {
            pattern: pattern.into(),
            reason,
        }
    }

    pub(super) fn invalid(pattern: &str, reason: &'static str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason,
        }
    }
}

/// Per-request outcome when no handler answers a method and path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("no route matches the path")]
    NotFound,

    #[error("method not allowed, allowed methods: {0}")]
    MethodNotAllowed(AllowedMethods),
}

/// Methods registered on a matched path, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedMethods {
    methods: Vec<Method>,
}

impl AllowedMethods {
    pub(crate) fn new(mut methods: Vec<Method>) -> Self {
        methods.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        methods.dedup();
        Self { methods }
    }

    pub fn contains(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Method> + '_ {
        self.methods.iter()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// Renders as an `Allow` header value, e.g. `GET, POST`.
impl fmt::Display for AllowedMethods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.methods.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(m.as_str())?;
        }
        Ok(())
    }
}
