//! Request dispatch on top of a [`Router`](crate::Router).
//!
//! A [`Dispatcher`] owns a router whose data are handlers. For each request
//! it matches method and path, attaches the resulting [`Params`](crate::Params)
//! to the request and calls the matched handler, or answers with a
//! not-found / method-not-allowed fallback.

mod dispatcher;
mod fallback;
mod handler;
mod router_macro;

pub use self::dispatcher::{Dispatcher, Target};
pub use self::fallback::{allowed_methods, Fallback};
pub use self::handler::{BoxHandler, Handler};
