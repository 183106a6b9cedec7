use super::error::{AllowedMethods, MatchError};

use http::Method;
use smallvec::SmallVec;

/// Per-node handler table: exact methods first, then the "any method" slot.
/// Values are indices into the router's endpoint list.
#[derive(Debug, Default)]
pub(super) struct MethodTable {
    exact: SmallVec<[(Method, usize); 2]>,
    any: Option<usize>,
}

impl MethodTable {
    /// Whether registering `methods` (empty meaning "any") would take a slot
    /// that is already filled.
    pub(super) fn collides(&self, methods: &[Method]) -> bool {
        if methods.is_empty() {
            return self.any.is_some();
        }
        methods
            .iter()
            .any(|m| self.exact.iter().any(|(e, _)| e == m))
    }

    pub(super) fn register(&mut self, methods: &[Method], id: usize) {
        if methods.is_empty() {
            self.any = Some(id);
        } else {
            self.exact.extend(methods.iter().map(|m| (m.clone(), id)));
        }
    }

    pub(super) fn resolve(&self, method: &Method) -> Result<usize, MatchError> {
        if let Some(&(_, id)) = self.exact.iter().find(|(m, _)| m == method) {
            return Ok(id);
        }
        if let Some(id) = self.any {
            return Ok(id);
        }
        if self.exact.is_empty() {
            return Err(MatchError::NotFound);
        }
        let allowed = self.exact.iter().map(|(m, _)| m.clone()).collect();
        Err(MatchError::MethodNotAllowed(AllowedMethods::new(allowed)))
    }
}
