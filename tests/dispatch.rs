use pathtree::dispatch::{allowed_methods, BoxHandler, Dispatcher, Fallback, Target};
use pathtree::params::{get_value, get_values};
use pathtree::{router, Method, Router};

use std::sync::Arc;

use http::header::ALLOW;
use http::{Request, Response, StatusCode};

type Handler = BoxHandler<String>;

fn text(body: &'static str) -> Handler {
    Box::new(move |_: Request<String>| Response::new(body.to_owned()))
}

fn request(method: Method, path: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(String::new())
        .unwrap()
}

#[test]
fn dispatch_default_fallbacks() {
    let mut router: Router<Handler> = Router::new();
    router.insert("/items", &[Method::GET, Method::POST], text("items"));
    let dispatcher = Dispatcher::new(router);

    let res = dispatcher.handle(request(Method::GET, "/items"));
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.body(), "items");

    let res = dispatcher.handle(request(Method::GET, "/nothing/here"));
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.body(), "404 Not Found");

    let res = dispatcher.handle(request(Method::DELETE, "/items"));
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()[ALLOW], "GET, POST");
}

#[test]
fn dispatch_custom_fallbacks() {
    let mut router: Router<Handler> = Router::new();
    router.insert("/items", &[Method::GET], text("items"));

    let not_found: Handler = Box::new(|req: Request<String>| {
        let mut res = Response::new(format!("no {}", req.uri().path()));
        *res.status_mut() = StatusCode::NOT_FOUND;
        res
    });
    let not_allowed: Handler = Box::new(|req: Request<String>| {
        let allowed = allowed_methods(&req).map(|a| a.to_string()).unwrap_or_default();
        let mut res = Response::new(format!("try {}", allowed));
        *res.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
        res
    });

    let dispatcher = Dispatcher::new(router)
        .with_not_found(not_found)
        .with_method_not_allowed(not_allowed);

    let res = dispatcher.handle(request(Method::GET, "/missing"));
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.body(), "no /missing");

    let res = dispatcher.handle(request(Method::PUT, "/items"));
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.body(), "try GET");
}

#[test]
fn dispatch_returns_handler_response_unchanged() {
    let mut router: Router<Handler> = Router::new();
    router.insert(
        "/teapot/:name",
        &[],
        Box::new(|req: Request<String>| {
            let mut res = Response::new(get_value("name", &req, 0).to_owned());
            *res.status_mut() = StatusCode::IM_A_TEAPOT;
            res.headers_mut().insert("x-kind", "tea".parse().unwrap());
            res
        }),
    );
    let dispatcher = Dispatcher::from(router);

    let res = dispatcher.handle(request(Method::PATCH, "/teapot/earl"));
    assert_eq!(res.status(), StatusCode::IM_A_TEAPOT);
    assert_eq!(res.headers()["x-kind"], "tea");
    assert_eq!(res.body(), "earl");
}

#[test]
fn dispatch_route_targets() {
    let router: Router<u8> = router! {
        GET "/a/:x" => 1,
        [PUT, DELETE] "/a/:x/b" => 2,
        ANY "/c" => 3,
    };
    let dispatcher = Dispatcher::new(router).with_not_found(0);

    let mut req = request(Method::GET, "/a/q");
    match dispatcher.route(&mut req) {
        Target::Handler(&h) => assert_eq!(h, 1),
        t => panic!("unexpected: {:?}", t),
    }
    assert_eq!(get_values("x", &req), ["q"]);

    let mut req = request(Method::POST, "/c");
    assert!(matches!(dispatcher.route(&mut req), Target::Handler(&3)));

    let mut req = request(Method::GET, "/zzz");
    assert!(matches!(dispatcher.route(&mut req), Target::Handler(&0)));

    let mut req = request(Method::GET, "/a/q/b");
    match dispatcher.route(&mut req) {
        Target::Fallback(Fallback::MethodNotAllowed(allowed)) => {
            assert_eq!(allowed.to_string(), "DELETE, PUT");
        }
        t => panic!("unexpected: {:?}", t),
    }
    assert!(get_values("x", &req).is_empty());
}

#[test]
fn dispatch_concurrent_requests_keep_params_apart() {
    let mut router: Router<Handler> = Router::new();
    router.insert(
        "/n/:a/:b/:a",
        &[Method::GET],
        Box::new(|req: Request<String>| {
            let a = get_values("a", &req).join(",");
            let b = get_value("b", &req, 0);
            Response::new(format!("{}|{}", a, b))
        }),
    );
    let dispatcher = Arc::new(Dispatcher::new(router));

    const N: usize = 64;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..N)
            .map(|i| {
                let dispatcher = Arc::clone(&dispatcher);
                s.spawn(move || {
                    let path = format!("/n/a{}/b{}/c{}", i, i, i);
                    let res = dispatcher.handle(request(Method::GET, &path));
                    (i, res.into_body())
                })
            })
            .collect();

        for h in handles {
            let (i, body) = h.join().unwrap();
            assert_eq!(body, format!("a{},c{}|b{}", i, i, i));
        }
    });
}

#[test]
fn dispatch_matches_decoded_path() {
    let mut router: Router<Handler> = Router::new();
    router.insert(
        "/h/:name",
        &[Method::GET],
        Box::new(|req: Request<String>| Response::new(get_value("name", &req, 0).to_owned())),
    );
    router.insert("/caf\u{e9}", &[Method::GET], text("cafe"));
    let dispatcher = Dispatcher::new(router);

    let res = dispatcher.handle(request(Method::GET, "/h/John%20Doe"));
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.body(), "John Doe");

    let res = dispatcher.handle(request(Method::GET, "/caf%C3%A9"));
    assert_eq!(res.body(), "cafe");
}
