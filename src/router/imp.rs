use super::captures::Captures;
use super::error::{MatchError, RouterError};
use super::registry::RegexRegistry;
use super::{Node, Router};

use http::Method;

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    /// Creates a router with the built-in `id`, `ip` and `uuid` validators.
    pub fn new() -> Self {
        Self::with_registry(RegexRegistry::with_builtins())
    }

    /// Creates a router with no validators at all.
    pub fn empty() -> Self {
        Self::with_registry(RegexRegistry::empty())
    }

    pub fn with_registry(regexes: RegexRegistry) -> Self {
        Self {
            root: Node::default(),
            endpoints: Vec::new(),
            regexes,
        }
    }

    pub fn clear(&mut self) {
        self.root = Node::default();
        self.endpoints.clear();
    }

    pub fn regexes(&self) -> &RegexRegistry {
        &self.regexes
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Matches `method` and `path`, returning the registered data and the
    /// captures in path order.
    pub fn find<'s, 'p>(
        &'s self,
        method: &Method,
        path: &'p str,
    ) -> Result<(&'s T, Captures<'p>), MatchError>
    where
        's: 'p,
    {
        let ret = self.find_endpoint(method, path);
        tracing::trace!(%method, path, matched = ret.is_ok(), "router find");
        let (id, captures) = ret?;
        Ok((&self.endpoints[id], captures))
    }

    /// Registers `data` for `methods` on `pattern`; an empty `methods` slice
    /// registers it for any method.
    ///
    /// # Panics
    /// Panics if the pattern is malformed or conflicts with a registered one.
    pub fn insert(&mut self, pattern: &str, methods: &[Method], data: T) -> &mut Self {
        if let Err(e) = self.insert_endpoint(pattern, methods, data) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_insert(
        &mut self,
        pattern: &str,
        methods: &[Method],
        data: T,
    ) -> Result<&mut Self, RouterError> {
        self.insert_endpoint(pattern, methods, data)?;
        Ok(self)
    }

    /// Registers a validator for the capture `name`.
    ///
    /// # Panics
    /// Panics if `pattern` is not a valid regex.
    pub fn add_regex(&mut self, name: &str, pattern: &str) -> &mut Self {
        if let Err(e) = self.regexes.register(name, pattern) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_add_regex(&mut self, name: &str, pattern: &str) -> Result<&mut Self, RouterError> {
        self.regexes.register(name, pattern)?;
        Ok(self)
    }
}
