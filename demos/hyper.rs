use pathtree::params::{get_value, get_values};
use pathtree::router_service;

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;
use hyper::{Body, Request, Response};

async fn not_found(req: Request<Body>) -> Result<Response<Body>, Never> {
    tracing::info!(method = %req.method(), path = req.uri().path(), "not found");
    let mut res = Response::new(Body::from("404 Not Found"));
    *res.status_mut() = hyper::StatusCode::NOT_FOUND;
    Ok(res)
}

async fn hello(req: Request<Body>) -> Result<Response<Body>, Never> {
    let name = get_value("name", &req, 0);
    Ok(Response::new(Body::from(format!("hello, {}!", name))))
}

async fn pair(req: Request<Body>) -> Result<Response<Body>, Never> {
    let ids = get_values("uuid", &req).join(" & ");
    Ok(Response::new(Body::from(format!("pair: {}", ids))))
}

async fn file(req: Request<Body>) -> Result<Response<Body>, Never> {
    let path = get_value("filepath", &req, 0);
    Ok(Response::new(Body::from(format!("access file: {}", path))))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let service = router_service! {
        GET "/hello/:name" => hello,
        GET "/pair/:uuid/:uuid" => pair,
        [GET, HEAD] "/api/v1/file/*filepath" => file;
        _ => not_found
    };

    let make = make_service_fn(move |_| {
        let service = service.clone();
        async move { Ok::<_, Never>(service) }
    });

    let addr = ([127, 0, 0, 1], 3000).into();
    let server = hyper::Server::bind(&addr).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!(
        "pair: http://{}/pair/78F204D2-26D9-409F-BE81-2E5D061E1FA1/33A7B724-1498-4A5A-B29B-AD4E31824234",
        addr
    );
    println!("api: http://{}/api/v1/file/path/to/public/file", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    if let Err(e) = server.await {
        eprintln!("server error: {}", e);
    }
}
