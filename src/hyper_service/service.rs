use super::handler::{BoxHandler, Handler};
use super::{BoxError, BoxFuture, Request, Response};
use crate::dispatch::{Dispatcher, Target};
use crate::router::Router;

use std::sync::Arc;
use std::task::{Context, Poll};

use http::Method;
use hyper::service::Service;

/// Cheap to clone: every clone shares one immutable dispatcher.
pub struct RouterService<H = BoxHandler> {
    dispatcher: Arc<Dispatcher<H>>,
}

impl<H> Clone for RouterService<H> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}

impl<H> Service<Request> for RouterService<H>
where
    H: Handler + Send + Sync,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        match self.dispatcher.route(&mut req) {
            Target::Handler(h) => h.call(req),
            Target::Fallback(f) => {
                let res: Response = f.into_response();
                Box::pin(async move { Ok::<_, BoxError>(res) })
            }
        }
    }
}

impl<H> RouterService<H> {
    pub fn new(dispatcher: Dispatcher<H>) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<H> {
        &self.dispatcher
    }
}

impl<H> From<Dispatcher<H>> for RouterService<H> {
    fn from(dispatcher: Dispatcher<H>) -> Self {
        Self::new(dispatcher)
    }
}

impl Router<BoxHandler> {
    /// Registers `h` for `methods` on `pattern`; empty `methods` means any.
    pub fn route(
        &mut self,
        methods: &[Method],
        pattern: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> &mut Self {
        self.insert(pattern, methods, Box::new(h))
    }

    pub fn any(&mut self, pattern: &str, h: impl Handler + Send + Sync + 'static) -> &mut Self {
        self.route(&[], pattern, h)
    }

    pub fn into_service(self) -> RouterService {
        RouterService::new(Dispatcher::new(self))
    }

    pub fn with_not_found(self, h: impl Handler + Send + Sync + 'static) -> RouterService {
        RouterService::new(Dispatcher::new(self).with_not_found(Box::new(h)))
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(&mut self, pattern: &str, h: impl Handler + Send + Sync + 'static) -> &mut Self {
            self.route(&[Method::$method], pattern, h)
        }
    };
}

impl Router<BoxHandler> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(patch, PATCH);
    define_method!(trace, TRACE);
}
