pub mod constants;

mod body;
mod classify;
mod cors;
mod header_builder;
mod headers;
mod options;
mod request;
mod response;

pub use body::Body;
pub use classify::{RequestKind, classify, is_cross_origin_request, is_preflight_request};
pub use cors::{Cors, with_cors, with_preflight};
pub use headers::{Headers, merge_headers};
pub use options::{AllowCredentials, CorsOptions, MaxAge};
pub use request::{Request, RequestBuilder};
pub use response::{Response, ResponseBuilder};
