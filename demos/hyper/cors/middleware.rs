use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use http_cors_rs::constants::field;
use http_cors_rs::{Headers, Request as CorsRequest, Response as CorsResponse};
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedCors;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Hyper middleware following the pattern from the official
/// "Getting Started with a Server Middleware" guide:
/// https://hyper.rs/guides/1/server/middleware/
///
/// Routing runs on the library's request model, so the whole exchange goes
/// through `Cors::handle`.
#[derive(Clone)]
pub struct HttpCors<F> {
    cors: SharedCors,
    respond: F,
}

impl<F> HttpCors<F> {
    pub fn new(cors: SharedCors, respond: F) -> Self {
        Self { cors, respond }
    }
}

impl<F> Service<Request<Incoming>> for HttpCors<F>
where
    F: Fn(&CorsRequest) -> CorsResponse + Clone + Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = Infallible;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let cors = self.cors.clone();
        let respond = self.respond.clone();
        let cors_request = cors_request(&req);

        Box::pin(async move {
            let reply = cors
                .handle(cors_request, |request| {
                    Ok::<_, Infallible>(respond(&request))
                })
                .expect("router is infallible");

            Ok(hyper_reply(reply))
        })
    }
}

fn hyper_reply(reply: CorsResponse) -> Response<CorsBody> {
    let status = StatusCode::from_u16(reply.status()).unwrap_or(StatusCode::OK);
    let mut builder = Response::builder().status(status);

    if let Some(map) = builder.headers_mut() {
        write_headers(map, reply.headers());
    }

    let body = reply.body().clone().into_bytes();
    builder.body(Full::new(body)).expect("valid reply")
}

fn write_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) =
            (HeaderName::try_from(name), HeaderValue::from_str(value))
        {
            map.insert(header_name, header_value);
        }
    }
}

fn cors_request(request: &Request<Incoming>) -> CorsRequest {
    let mut builder = CorsRequest::builder()
        .method(request.method().as_str())
        .uri(request.uri().path());

    for name in [
        field::ORIGIN,
        field::ACCESS_CONTROL_REQUEST_METHOD,
        field::ACCESS_CONTROL_REQUEST_HEADERS,
    ] {
        if let Some(value) = header_value(request.headers(), name) {
            builder = builder.header(name, value);
        }
    }

    builder.build()
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
