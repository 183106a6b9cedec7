use super::fallback::Fallback;
use super::handler::Handler;
use crate::params::{self, Params};
use crate::router::{MatchError, Router};

use http::{Request, Response};
use percent_encoding::percent_decode_str;

/// Routes requests to the handlers of an immutable [`Router`].
///
/// Holds no per-request state, so a dispatcher shared behind an `Arc` can
/// serve requests from any number of threads at once.
#[derive(Debug)]
pub struct Dispatcher<H> {
    router: Router<H>,
    not_found: Option<H>,
    method_not_allowed: Option<H>,
}

/// What should answer a request.
#[derive(Debug)]
pub enum Target<'a, H> {
    Handler(&'a H),
    Fallback(Fallback),
}

impl<H> Dispatcher<H> {
    pub fn new(router: Router<H>) -> Self {
        Self {
            router,
            not_found: None,
            method_not_allowed: None,
        }
    }

    pub fn with_not_found(mut self, handler: H) -> Self {
        self.not_found = Some(handler);
        self
    }

    /// The handler finds the allowed methods with
    /// [`allowed_methods`](super::allowed_methods).
    pub fn with_method_not_allowed(mut self, handler: H) -> Self {
        self.method_not_allowed = Some(handler);
        self
    }

    pub fn router(&self) -> &Router<H> {
        &self.router
    }

    /// Matches `req` and prepares it for the handler that should answer it.
    ///
    /// The path is percent-decoded before matching, so captured values are
    /// decoded too.
    ///
    /// On a match the captured parameters are attached to `req`. On a
    /// method mismatch the allowed methods are attached instead.
    pub fn route<B>(&self, req: &mut Request<B>) -> Target<'_, H> {
        let found = {
            let path = percent_decode_str(req.uri().path()).decode_utf8_lossy();
            self.router
                .find(req.method(), &path)
                .map(|(handler, caps)| (handler, Params::from(caps)))
        };
        match found {
            Ok((handler, store)) => {
                params::attach(req, store);
                Target::Handler(handler)
            }
            Err(MatchError::NotFound) => {
                tracing::debug!(method = %req.method(), path = req.uri().path(), "not found");
                match self.not_found {
                    Some(ref h) => Target::Handler(h),
                    None => Target::Fallback(Fallback::NotFound),
                }
            }
            Err(MatchError::MethodNotAllowed(allowed)) => {
                tracing::debug!(
                    method = %req.method(),
                    path = req.uri().path(),
                    %allowed,
                    "method not allowed"
                );
                match self.method_not_allowed {
                    Some(ref h) => {
                        req.extensions_mut().insert(allowed);
                        Target::Handler(h)
                    }
                    None => Target::Fallback(Fallback::MethodNotAllowed(allowed)),
                }
            }
        }
    }

    /// Answers `req` synchronously.
    pub fn handle<B>(&self, mut req: Request<B>) -> Response<B>
    where
        H: Handler<B>,
        B: From<&'static str>,
    {
        match self.route(&mut req) {
            Target::Handler(h) => h.call(req),
            Target::Fallback(f) => f.into_response(),
        }
    }
}

impl<H> From<Router<H>> for Dispatcher<H> {
    fn from(router: Router<H>) -> Self {
        Self::new(router)
    }
}
