mod captures;
mod core;
mod endpoint;
mod error;
mod imp;
mod matcher;
mod registry;
mod segment;

pub use self::captures::Captures;
pub use self::error::{AllowedMethods, MatchError, RouterError};
pub use self::registry::RegexRegistry;

use self::endpoint::MethodTable;
use crate::strmap::StrMap;

/// Segment tree of registered patterns plus the validators that constrain
/// its dynamic segments.
///
/// Registration needs `&mut self`; matching is a read-only walk, so a router
/// behind an `Arc` serves any number of threads without locking.
#[derive(Debug)]
pub struct Router<T> {
    root: Node,
    endpoints: Vec<T>,
    regexes: RegexRegistry,
}

#[derive(Debug, Default)]
struct Node {
    statics: StrMap<Node>,
    dynamic: Option<Box<Child>>,
    catch_all: Option<Box<Child>>,
    methods: MethodTable,
}

/// A named edge: the dynamic or catch-all slot of a node.
#[derive(Debug)]
struct Child {
    name: Box<str>,
    node: Node,
}

impl Child {
    fn new(name: &str) -> Box<Self> {
        Box::new(Self {
            name: name.into(),
            node: Node::default(),
        })
    }
}
