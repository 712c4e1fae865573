use axum::{extract::Request, middleware::Next, response::Response};
use http::{header, HeaderValue};

pub async fn json_content_type(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
