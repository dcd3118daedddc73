mod support;

use axum::body::Bytes;
use axum::http::{header, Method, StatusCode};
use support::TestApp;

#[tokio::test]
async fn health_needs_no_token() -> anyhow::Result<()> {
    let app = TestApp::new();
    let resp = app.request(Method::GET, "/api/health", None, &[]).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), serde_json::json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn protected_routes_reject_missing_or_bad_tokens() -> anyhow::Result<()> {
    let app = TestApp::new();
    let cases: [(&[(&str, &str)], &str); 4] = [
        (&[], "Authorization header is required"),
        (
            &[("authorization", "Basic dXNlcjpwYXNz")],
            "Authorization header must be Bearer token",
        ),
        (
            &[("authorization", "Bearer")],
            "Authorization header must be Bearer token",
        ),
        (&[("authorization", "Bearer badtoken")], "Invalid token"),
    ];

    for path in [
        "/api/Provider",
        "/api/HealthcareService/SVC-54321",
        "/api/Questionnaire",
        "/api/RegisteredNurseAttendance",
    ] {
        for (headers, message) in cases {
            let resp = app.request(Method::GET, path, None, headers).await?;
            assert_eq!(resp.status, StatusCode::UNAUTHORIZED, "{path} {headers:?}");
            assert_eq!(resp.error(), message, "{path} {headers:?}");
        }
    }
    Ok(())
}

#[tokio::test]
async fn gate_runs_before_body_handling() -> anyhow::Result<()> {
    let app = TestApp::new();
    let resp = app
        .request(
            Method::PATCH,
            "/api/RegisteredNurseAttendance/RN-12345",
            Some(("text/plain", Bytes::from_static(b"hello"))),
            &[],
        )
        .await?;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn cors_preflight_mirrors_the_origin() -> anyhow::Result<()> {
    let app = TestApp::new();
    let resp = app
        .request(
            Method::OPTIONS,
            "/api/RegisteredNurseAttendance/RN-12345",
            None,
            &[
                ("origin", "https://portal.example.org"),
                ("access-control-request-method", "PATCH"),
                ("access-control-request-headers", "authorization,content-type"),
            ],
        )
        .await?;

    assert!(resp.status.is_success(), "status {}", resp.status);
    assert_eq!(
        resp.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://portal.example.org"
    );
    assert_eq!(resp.headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    let methods = resp.headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .expect("ascii");
    assert!(methods.contains("PATCH"), "{methods}");
    Ok(())
}

#[tokio::test]
async fn simple_requests_carry_cors_headers() -> anyhow::Result<()> {
    let app = TestApp::new();
    let resp = app
        .request(
            Method::GET,
            "/api/health",
            None,
            &[("origin", "http://localhost:5173")],
        )
        .await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    Ok(())
}

#[tokio::test]
async fn unknown_api_paths_are_json_404s() -> anyhow::Result<()> {
    let app = TestApp::new();
    let resp = app.get("/api/Patient").await?;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.error(), "Not found");
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = TestApp::new();
    let resp = app
        .request(Method::GET, "/api/api-docs/openapi.json", None, &[])
        .await?;
    assert_eq!(resp.status, StatusCode::OK);
    let doc = resp.json();
    assert!(doc["paths"]
        .get("/api/RegisteredNurseAttendance/{id}")
        .is_some());
    assert!(doc["components"]["securitySchemes"].get("bearer").is_some());
    Ok(())
}
