/// Builds a [`RouterService`](crate::hyper_service::RouterService) from a
/// route table of async handlers, with an optional `_ =>` not-found handler.
#[macro_export]
macro_rules! router_service {
    {@entry $router:expr, ANY, $pattern:expr, $h:expr} => {
        $router.any($pattern, $h)
    };
    {@entry $router:expr, [$($method:ident),+], $pattern:expr, $h:expr} => {
        $router.route(&[$($crate::Method::$method),+], $pattern, $h)
    };
    {@entry $router:expr, $method:ident, $pattern:expr, $h:expr} => {
        $router.route(&[$crate::Method::$method], $pattern, $h)
    };

    {$($method:tt $pattern:expr => $h:expr),+ ; _ => $default:expr} => {{
        let mut __router: $crate::Router<$crate::hyper_service::BoxHandler> = $crate::Router::new();
        $($crate::router_service!(@entry __router, $method, $pattern, $h);)+
        __router.with_not_found($default)
    }};

    {$($method:tt $pattern:expr => $h:expr),+ $(,)?} => {{
        let mut __router: $crate::Router<$crate::hyper_service::BoxHandler> = $crate::Router::new();
        $($crate::router_service!(@entry __router, $method, $pattern, $h);)+
        __router.into_service()
    }};
}
