use super::{BoxError, BoxFuture, Request, Response, StdError};

use std::future::Future;

/// Async request handler. Path parameters are read from the request with
/// [`params::get_value`](crate::params::get_value) and friends.
pub trait Handler {
    fn call(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>>;
}

pub type BoxHandler = Box<dyn Handler + Send + Sync>;

impl Handler for BoxHandler {
    fn call(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>> {
        Handler::call(&**self, req)
    }
}

impl<F, E, Fut> Handler for F
where
    F: Fn(Request) -> Fut,
    E: StdError + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, E>> + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>> {
        let fut = (self)(req);
        Box::pin(async move {
            match fut.await {
                Ok(r) => Ok(r),
                Err(e) => Err(Box::new(e) as BoxError),
            }
        })
    }
}
