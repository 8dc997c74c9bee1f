use anyhow::Context;
use axum::{routing::get, Router};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::{docs, users};

pub fn build_app(state: AppState) -> Router {
    let docs = docs::docs_router(&state.config.docs);

    Router::new()
        .nest("/v1", users::router())
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
        .merge(docs)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        let status = res.status();
                        let latency_ms = latency.as_millis() as u64;
                        if status.is_server_error() {
                            tracing::error!(%status, latency_ms, "response");
                        } else {
                            tracing::info!(%status, latency_ms, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn call(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let res = app
            .clone()
            .oneshot(req.body(body).expect("request"))
            .await
            .expect("response");
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    #[tokio::test]
    async fn create_then_list() {
        let app = build_app(AppState::fake());

        let (status, body) = call(
            &app,
            Method::POST,
            "/v1/users",
            Some(json!({"name": "X", "email": "x@x.com", "role": "viewer"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], true);
        assert_eq!(body["message"], "User created successfully");
        assert_eq!(body["data"]["user"]["name"], "X");
        assert_eq!(body["data"]["user"]["email"], "x@x.com");
        assert_eq!(body["data"]["user"]["role"], "viewer");
        let new_id = body["data"]["user"]["id"].as_str().expect("id").to_string();

        let (status, body) = call(&app, Method::GET, "/v1/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Users found successfully");
        let users = body["data"]["users"].as_array().expect("users");
        assert_eq!(users.len(), 6);
        assert_eq!(users[5]["id"], new_id.as_str());
        assert_eq!(users[0]["name"], "John Doe");
    }

    #[tokio::test]
    async fn id_routes_find_seeded_user() {
        let state = AppState::fake();
        let target = state.users.list().await[1].clone();
        let app = build_app(state);
        let uri = format!("/v1/users/{}", target.id);

        let (status, body) = call(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User found successfully");
        assert_eq!(body["data"]["user"]["email"], "jane.smith@example.com");

        let (status, body) =
            call(&app, Method::PATCH, &uri, Some(json!({"role": "admin"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User updated successfully");
        assert_eq!(body["data"]["user"]["role"], "staff");

        let (status, body) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User removed successfully");
        assert_eq!(body["data"]["user"]["id"], target.id.as_str());

        let (status, _) = call(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_id_is_404_on_every_id_route() {
        let app = build_app(AppState::fake());
        let uri = "/v1/users/nonexistent-id";

        for (method, body) in [
            (Method::GET, None),
            (Method::PATCH, Some(json!({}))),
            (Method::DELETE, None),
        ] {
            let (status, body) = call(&app, method.clone(), uri, body).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
            assert_eq!(body["message"], "User not found");
            assert_eq!(body["statusCode"], 404);
        }

        let (_, body) = call(&app, Method::GET, "/v1/users", None).await;
        assert_eq!(body["data"]["users"].as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn patch_without_body_still_reaches_lookup() {
        let state = AppState::fake();
        let target = state.users.list().await[0].clone();
        let app = build_app(state);

        let (status, body) =
            call(&app, Method::PATCH, &format!("/v1/users/{}", target.id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User updated successfully");
        assert_eq!(body["data"]["user"]["name"], "John Doe");

        let (status, body) = call(&app, Method::PATCH, "/v1/users/nonexistent-id", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "User not found");
    }

    #[tokio::test]
    async fn serves_health_and_openapi_document() {
        let app = build_app(AppState::fake());

        let res = app
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(res.status(), StatusCode::OK);

        let (status, doc) = call(&app, Method::GET, "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["info"]["title"], "User Directory API");
        assert!(doc["paths"]["/v1/users/{id}"].is_object());
    }
}
