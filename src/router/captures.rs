use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Ordered `(name, value)` bindings of one match, in left-to-right path order.
///
/// A name bound at several positions appears once per position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures<'a> {
    buf: SmallVec<[(&'a str, &'a str); 8]>,
}

impl<'a> Captures<'a> {
    /// First value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.get_nth(name, 0)
    }

    /// Value of the `index`-th occurrence of `name`.
    pub fn get_nth(&self, name: &str, index: usize) -> Option<&'a str> {
        self.get_all(name).nth(index)
    }

    pub fn get_all<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'a str> + 's {
        self.buf
            .iter()
            .filter_map(move |&(k, v)| if k == name { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }
}

impl<'a> Deref for Captures<'a> {
    type Target = [(&'a str, &'a str)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<'a> Captures<'a> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub(super) fn push(&mut self, name: &'a str, value: &'a str) {
        self.buf.push((name, value))
    }
}
