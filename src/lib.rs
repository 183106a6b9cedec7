//! A segment-tree URL router.
//!
//! Patterns are `/`-separated. A segment starting with `:` captures one path
//! segment under the name that follows, a final segment starting with `*`
//! captures the rest of the path, and every other segment must match
//! literally. A capture whose name has a validator registered (see
//! [`Router::add_regex`]) only accepts segments the validator matches in
//! full.
//!
//! The same name may be captured more than once along a path; every
//! occurrence is kept, in path order.
//!
//! ```
//! use pathtree::{Method, Router};
//!
//! let mut router: Router<&str> = Router::new();
//! router
//!     .add_regex("p", r"\w+")
//!     .insert("/tests/:p", &[Method::GET], "tests")
//!     .insert("/test/:u/:u", &[], "pair");
//!
//! let (data, caps) = router.find(&Method::GET, "/tests/abc").unwrap();
//! assert_eq!((*data, caps.get("p")), ("tests", Some("abc")));
//! assert!(router.find(&Method::GET, "/tests/ab!c").is_err());
//!
//! let (_, caps) = router.find(&Method::PUT, "/test/A/B").unwrap();
//! assert_eq!(caps.get_all("u").collect::<Vec<_>>(), ["A", "B"]);
//! ```

#![forbid(unsafe_code)]

mod strmap;

pub mod dispatch;
pub mod params;
pub mod router;

#[cfg(feature = "hyper-service")]
pub mod hyper_service;

pub use crate::dispatch::Dispatcher;
pub use crate::params::Params;
pub use crate::router::{Captures, MatchError, Router, RouterError};

pub use http::Method;
