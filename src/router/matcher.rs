use super::captures::Captures;
use super::error::MatchError;
use super::segment::split_path;
use super::Router;

use http::Method;

impl<T> Router<T> {
    /// Walks the tree once, left to right. At each node the static child
    /// keyed by the part wins, then the dynamic child if its validator (if
    /// any) accepts the whole part, then the catch-all which takes the rest
    /// of the path. There is no backtracking into siblings.
    pub(super) fn find_endpoint<'s, 'p>(
        &'s self,
        method: &Method,
        path: &'p str,
    ) -> Result<(usize, Captures<'p>), MatchError>
    where
        's: 'p,
    {
        let (path, parts) = split_path(path);
        let mut captures = Captures::new();
        let mut node = &self.root;

        for &(offset, part) in &parts {
            if let Some(next) = node.statics.find(part) {
                node = next;
                continue;
            }
            if let Some(ref child) = node.dynamic {
                if !part.is_empty() && self.regexes.accepts(&child.name, part) {
                    captures.push(&child.name, part);
                    node = &child.node;
                    continue;
                }
            }
            if let Some(ref child) = node.catch_all {
                captures.push(&child.name, &path[offset..]);
                node = &child.node;
                break;
            }
            return Err(MatchError::NotFound);
        }

        let id = node.methods.resolve(method)?;
        Ok((id, captures))
    }
}
