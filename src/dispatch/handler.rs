use http::{Request, Response};

/// Synchronous request handler.
pub trait Handler<B> {
    fn call(&self, req: Request<B>) -> Response<B>;
}

pub type BoxHandler<B> = Box<dyn Handler<B> + Send + Sync>;

impl<B> Handler<B> for BoxHandler<B> {
    fn call(&self, req: Request<B>) -> Response<B> {
        Handler::call(&**self, req)
    }
}

impl<F, B> Handler<B> for F
where
    F: Fn(Request<B>) -> Response<B>,
{
    fn call(&self, req: Request<B>) -> Response<B> {
        (self)(req)
    }
}
