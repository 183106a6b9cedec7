//! Per-request parameter store.
//!
//! A [`Params`] is built once from the [`Captures`] of a successful match and
//! travels inside the request's extensions, so it lives and dies with that
//! one request. Handlers read it back with [`get_value`] and [`get_values`].
//!
//! ```
//! use http::{Method, Request};
//! use pathtree::{params, Params, Router};
//!
//! let mut router: Router<u8> = Router::new();
//! router.insert("/test/:u/:u", &[Method::GET], 1);
//!
//! let mut req = Request::get("/test/A/B").body(()).unwrap();
//! let (_, caps) = router.find(req.method(), req.uri().path()).unwrap();
//! let store = Params::from(caps);
//! params::attach(&mut req, store);
//!
//! assert_eq!(params::get_values("u", &req), ["A", "B"]);
//! assert_eq!(params::get_value("u", &req, 1), "B");
//! assert_eq!(params::get_value("u", &req, 2), "");
//! ```

use crate::router::Captures;

use std::str::FromStr;

use http::Request;

/// Captured values grouped by name. Names keep their first-occurrence order;
/// values under one name keep path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    groups: Vec<(Box<str>, Vec<String>)>,
}

impl Params {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// The store attached to `req`, if the request went through a router.
    pub fn of<B>(req: &Request<B>) -> Option<&Self> {
        req.extensions().get::<Self>()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_values(name).first().map(String::as_str)
    }

    /// Value at `index` among the occurrences of `name`. Absent names and
    /// out-of-range indices both read as `""`.
    pub fn get_value(&self, name: &str, index: usize) -> &str {
        self.get_values(name).get(index).map_or("", String::as_str)
    }

    /// All values bound to `name`, empty if it was never bound.
    pub fn get_values(&self, name: &str) -> &[String] {
        self.groups
            .iter()
            .find_map(|(n, v)| if **n == *name { Some(&v[..]) } else { None })
            .unwrap_or(&[])
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(|(n, _)| &**n)
    }

    /// Every `(name, value)` pair, grouped by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.groups
            .iter()
            .flat_map(|(n, vs)| vs.iter().map(move |v| (&**n, v.as_str())))
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn push(&mut self, name: &str, value: &str) {
        match self.groups.iter_mut().find(|(n, _)| **n == *name) {
            Some((_, values)) => values.push(value.to_owned()),
            None => self.groups.push((name.into(), vec![value.to_owned()])),
        }
    }
}

impl From<&Captures<'_>> for Params {
    fn from(caps: &Captures<'_>) -> Self {
        let mut params = Self::new();
        for &(name, value) in caps.iter() {
            params.push(name, value);
        }
        params
    }
}

impl From<Captures<'_>> for Params {
    fn from(caps: Captures<'_>) -> Self {
        Self::from(&caps)
    }
}

/// Stores `params` in `req`, replacing any previously attached store.
pub fn attach<B>(req: &mut Request<B>, params: Params) {
    req.extensions_mut().insert(params);
}

/// See [`Params::get_value`]. Reads `""` when no store is attached.
pub fn get_value<'r, B>(name: &str, req: &'r Request<B>, index: usize) -> &'r str {
    Params::of(req).map_or("", |p| p.get_value(name, index))
}

/// See [`Params::get_values`]. Reads empty when no store is attached.
pub fn get_values<'r, B>(name: &str, req: &'r Request<B>) -> &'r [String] {
    Params::of(req)
        .map(|p| p.get_values(name))
        .unwrap_or_default()
}
