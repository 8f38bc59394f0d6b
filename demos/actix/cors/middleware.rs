use std::future::{Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::{Error, HttpRequest, HttpResponse};
use http_cors_rs::constants::field;
use http_cors_rs::{
    Headers, Request as CorsRequest, RequestKind, Response as CorsResponse, classify, with_cors,
    with_preflight,
};

use super::SharedCors;

type LocalBoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + 'a>>;

pub struct HttpCors {
    cors: SharedCors,
}

impl HttpCors {
    pub fn new(cors: SharedCors) -> Self {
        Self { cors }
    }
}

impl<S, B> Transform<S, ServiceRequest> for HttpCors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = HttpCorsMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HttpCorsMiddleware {
            service,
            cors: self.cors.clone(),
        }))
    }
}

pub struct HttpCorsMiddleware<S> {
    service: S,
    cors: SharedCors,
}

impl<S, B> Service<ServiceRequest> for HttpCorsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let cors = self.cors.clone();
        let cors_request = cors_request(req.request());
        let fut = self.service.call(req);

        Box::pin(async move {
            let response = fut.await?;

            match classify(&cors_request) {
                RequestKind::SameOrigin => Ok(response.map_into_left_body()),
                RequestKind::CrossOrigin => {
                    let mut response = response.map_into_left_body();
                    let decorated = with_cors(
                        &cors_request,
                        &cors_response(response.response()),
                        cors.options(),
                    );
                    write_headers(response.headers_mut(), decorated.headers());
                    Ok(response)
                }
                RequestKind::Preflight => {
                    let reply = with_preflight(
                        &cors_request,
                        &cors_response(response.response()),
                        cors.options(),
                    );
                    let (request, _) = response.into_parts();
                    Ok(ServiceResponse::new(
                        request,
                        preflight_reply(reply).map_into_right_body(),
                    ))
                }
            }
        })
    }
}

fn preflight_reply(reply: CorsResponse) -> HttpResponse {
    let status = StatusCode::from_u16(reply.status()).unwrap_or(StatusCode::NO_CONTENT);
    let mut builder = HttpResponse::build(status);

    for (name, value) in reply.headers().iter() {
        if let (Ok(header_name), Ok(header_value)) =
            (HeaderName::try_from(name), HeaderValue::from_str(value))
        {
            builder.insert_header((header_name, header_value));
        }
    }

    builder.finish()
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

fn cors_request(request: &HttpRequest) -> CorsRequest {
    let mut builder = CorsRequest::builder()
        .method(request.method().as_str())
        .uri(request.path());

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

fn cors_response<B>(response: &HttpResponse<B>) -> CorsResponse {
    let mut builder = CorsResponse::builder().status(response.status().as_u16());

    for (name, value) in response.headers() {
        if let Ok(value) = value.to_str() {
            builder = builder.header(name.as_str(), value);
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
