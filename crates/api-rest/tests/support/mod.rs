#![allow(dead_code)]

use anyhow::Context as _;
use api_rest::{router, AppState};
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use dohac_core::{AttendancePatchPolicy, CoreConfig, Store};
use tower::ServiceExt as _;

pub const BASE_URL: &str = "https://test.example.org/api";
pub const REGISTRATION_URL: &str = "https://iam.example.org/register";
pub const TOKEN: &str = "Bearer mock_test-client_20230701000000";

pub struct TestApp {
    pub router: Router,
}

/// A decoded response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|err| {
            panic!(
                "response body is not JSON ({err}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn error(&self) -> String {
        self.json()["error"]
            .as_str()
            .unwrap_or_else(|| panic!("no error member in {}", self.json()))
            .to_owned()
    }
}

impl TestApp {
    /// Seeded store, record patch policy.
    pub fn new() -> Self {
        Self::with_policy(AttendancePatchPolicy::Record)
    }

    pub fn with_policy(policy: AttendancePatchPolicy) -> Self {
        let cfg = CoreConfig::new(BASE_URL.into(), REGISTRATION_URL.into(), policy)
            .expect("valid test config");
        Self {
            router: router(AppState::new(cfg, Store::seeded())),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<(&str, Bytes)>,
        headers: &[(&str, &str)],
    ) -> anyhow::Result<TestResponse> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path_and_query)
            .header("host", "test.example.org");
        let body = match body {
            Some((content_type, bytes)) => {
                builder = builder.header("content-type", content_type);
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        let mut request = builder.body(body).context("build request")?;

        for (name, value) in headers {
            request.headers_mut().insert(
                name.parse::<HeaderName>().context("parse header name")?,
                value.parse::<HeaderValue>().context("parse header value")?,
            );
        }

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }

    /// GET with a valid bearer token.
    pub async fn get(&self, path_and_query: &str) -> anyhow::Result<TestResponse> {
        self.request(Method::GET, path_and_query, None, &[("authorization", TOKEN)])
            .await
    }

    /// Authenticated request with a JSON body.
    pub async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: serde_json::Value,
    ) -> anyhow::Result<TestResponse> {
        self.request(
            method,
            path,
            Some(("application/json", Bytes::from(body.to_string()))),
            &[("authorization", TOKEN)],
        )
        .await
    }

    /// Authenticated PATCH with a multipart body holding one file part.
    pub async fn patch_csv(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        contents: &str,
    ) -> anyhow::Result<TestResponse> {
        let (content_type, body) = multipart_body(field, file_name, contents);
        self.request(
            Method::PATCH,
            path,
            Some((content_type.as_str(), body)),
            &[("authorization", TOKEN)],
        )
        .await
    }
}

const BOUNDARY: &str = "dohac-test-boundary";

/// Builds a `multipart/form-data` body carrying a single file part.
pub fn multipart_body(field: &str, file_name: &str, contents: &str) -> (String, Bytes) {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
         Content-Type: text/csv\r\n\
         \r\n\
         {contents}\r\n\
         --{BOUNDARY}--\r\n"
    );
    (
        format!("multipart/form-data; boundary={BOUNDARY}"),
        Bytes::from(body),
    )
}
