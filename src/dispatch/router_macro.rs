/// Builds a [`Router`](crate::Router) from a route table.
///
/// ```
/// use pathtree::{router, Method, Router};
///
/// let router: Router<u8> = router! {
///     GET "/u/:id" => 1,
///     [GET, POST] "/u/:id/posts" => 2,
///     ANY "/health" => 3,
/// };
///
/// assert_eq!(*router.find(&Method::GET, "/u/7").unwrap().0, 1);
/// assert_eq!(*router.find(&Method::POST, "/u/7/posts").unwrap().0, 2);
/// assert_eq!(*router.find(&Method::DELETE, "/health").unwrap().0, 3);
/// ```
#[macro_export]
macro_rules! router {
    {@entry $router:expr, ANY, $pattern:expr, $data:expr} => {
        $router.insert($pattern, &[], $data)
    };
    {@entry $router:expr, [$($method:ident),+], $pattern:expr, $data:expr} => {
        $router.insert($pattern, &[$($crate::Method::$method),+], $data)
    };
    {@entry $router:expr, $method:ident, $pattern:expr, $data:expr} => {
        $router.insert($pattern, &[$crate::Method::$method], $data)
    };

    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let mut __router = $crate::Router::new();
        $($crate::router!(@entry __router, $method, $pattern, $data);)+
        __router
    }};
}
