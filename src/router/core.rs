use super::error::RouterError;
use super::segment::{parse_pattern, Segment};
use super::{Child, Node, Router};

use http::Method;
use smallvec::SmallVec;

type MethodBuf = SmallVec<[Method; 4]>;

impl<T> Router<T> {
    pub(super) fn insert_endpoint(
        &mut self,
        pattern: &str,
        methods: &[Method],
        data: T,
    ) -> Result<(), RouterError> {
        let segments = parse_pattern(pattern)?;

        let mut methods: MethodBuf = methods.iter().cloned().collect();
        methods.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        methods.dedup();

        Self::check_collision(&self.root, pattern, &segments, &methods)?;

        let id = self.endpoints.len();
        self.endpoints.push(data);

        let mut node = &mut self.root;
        for &segment in &segments {
            node = match segment {
                Segment::Static(part) => node.statics.find_mut_with(part, Node::default),
                Segment::Dynamic(name) => {
                    &mut node.dynamic.get_or_insert_with(|| Child::new(name)).node
                }
                Segment::CatchAll(name) => {
                    &mut node.catch_all.get_or_insert_with(|| Child::new(name)).node
                }
            };
        }
        node.methods.register(&methods, id);

        tracing::debug!(pattern, ?methods, id, "registered route");
        Ok(())
    }

    /// Walks the existing tree along `segments` without modifying it. Runs
    /// before any node is created so a rejected pattern leaves no trace.
    fn check_collision(
        root: &Node,
        pattern: &str,
        segments: &[Segment<'_>],
        methods: &[Method],
    ) -> Result<(), RouterError> {
        let mut node = root;

        for &segment in segments {
            let next = match segment {
                Segment::Static(part) => node.statics.find(part),
                Segment::Dynamic(name) => match node.dynamic {
                    Some(ref child) if *child.name != *name => {
                        return Err(RouterError::conflict(
                            pattern,
                            "another capture name is registered at this position",
                        ))
                    }
                    Some(ref child) => Some(&child.node),
                    None => None,
                },
                Segment::CatchAll(name) => match node.catch_all {
                    Some(ref child) if *child.name != *name => {
                        return Err(RouterError::conflict(
                            pattern,
                            "another catch-all name is registered at this position",
                        ))
                    }
                    Some(ref child) => Some(&child.node),
                    None => None,
                },
            };
            node = match next {
                Some(n) => n,
                None => return Ok(()),
            };
        }

        if node.methods.collides(methods) {
            return Err(RouterError::conflict(
                pattern,
                "a handler is already registered for this method",
            ));
        }
        Ok(())
    }
}
