// ABOUTME: Request builder for driving form coach routers in-process
// ABOUTME: Sends one request through tower::ServiceExt::oneshot and buffers the reply

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, Response, StatusCode},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower::ServiceExt;

const JSON_CONTENT_TYPE: &str = "application/json";

/// One request against a router, built fluently
pub struct AxumTestRequest {
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
    body: Body,
}

impl AxumTestRequest {
    fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_owned(),
            headers: Vec::new(),
            body: Body::empty(),
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    #[allow(dead_code)]
    pub fn options(uri: &str) -> Self {
        Self::new(Method::OPTIONS, uri)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Identify the caller the way clients do, through `X-User-ID`
    #[allow(dead_code)]
    pub fn user(self, user_id: &str) -> Self {
        self.header("x-user-id", user_id)
    }

    pub fn json<T: Serialize>(self, payload: &T) -> Self {
        let text = serde_json::to_string(payload).expect("payload serializes");
        self.raw_json(&text)
    }

    /// Body sent verbatim with a JSON content type, for malformed payloads
    pub fn raw_json(mut self, text: &str) -> Self {
        self.body = Body::from(text.to_owned());
        self.header(header::CONTENT_TYPE.as_str(), JSON_CONTENT_TYPE)
    }

    pub async fn send(self, app: Router) -> AxumTestResponse {
        let request = self
            .headers
            .iter()
            .fold(
                Request::builder().method(self.method).uri(&self.uri),
                |builder, (name, value)| builder.header(name, value),
            )
            .body(self.body)
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router is infallible");
        AxumTestResponse::buffer(response).await
    }
}

/// Buffered response
pub struct AxumTestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl AxumTestResponse {
    async fn buffer(response: Response<Body>) -> Self {
        let (parts, body) = response.into_parts();
        let body = to_bytes(body, usize::MAX)
            .await
            .expect("response body readable")
            .to_vec();
        Self {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }

    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    pub fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "status {} body is not the expected JSON ({e}): {}",
                self.status,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    #[allow(dead_code)]
    pub fn text(self) -> String {
        String::from_utf8(self.body).expect("response is UTF-8")
    }

    #[allow(dead_code)]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "unexpected status, body: {}",
            String::from_utf8_lossy(&self.body)
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        routing::{get, post},
        Json,
    };
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_json_body_reaches_handler() {
        let app = Router::new().route(
            "/echo",
            post(|Json(body): Json<Value>| async move { Json(json!({"received": body})) }),
        );

        let response = AxumTestRequest::post("/echo")
            .json(&json!({"exercise_type": "squats"}))
            .send(app)
            .await;

        assert_eq!(response.status(), 200);
        let body: Value = response.json();
        assert_eq!(body["received"]["exercise_type"], "squats");
    }

    #[tokio::test]
    async fn test_user_header_is_sent() {
        let app = Router::new().route(
            "/whoami",
            get(|headers: HeaderMap| async move {
                headers
                    .get("x-user-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("missing")
                    .to_owned()
            }),
        );

        let response = AxumTestRequest::get("/whoami")
            .user("athlete-1")
            .send(app)
            .await;

        assert_eq!(response.text(), "athlete-1");
    }
}
