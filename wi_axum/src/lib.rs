use axum::{
    Json, Router,
    body::Body,
    http::{
        Request, StatusCode,
        header::{
            self, ACCEPT, ACCEPT_ENCODING, AUTHORIZATION, CONTENT_TYPE, ORIGIN,
        },
    },
    response::IntoResponse,
};
use serde_json::json;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer,
};

/// Wraps a router with the layers every web-interface API shares: request
/// tracing, permissive CORS and gzip/deflate compression.
pub fn with_common_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let trace_layer = TraceLayer::new_for_http().on_request(
        |request: &Request<Body>, _: &tracing::Span| {
            tracing::info!(
                "received request: {method} {uri}",
                method = request.method(),
                uri = request.uri()
            );
        },
    );

    let cors_layer = CorsLayer::new()
        .allow_headers([
            ACCEPT,
            ACCEPT_ENCODING,
            AUTHORIZATION,
            CONTENT_TYPE,
            ORIGIN,
        ])
        .allow_methods(tower_http::cors::Any)
        .allow_origin(tower_http::cors::Any);

    let compression_layer = CompressionLayer::new().gzip(true).deflate(true);

    router
        .layer(cors_layer)
        .layer(trace_layer)
        .layer(compression_layer)
}

/// Fallback for unrouted paths.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "application/json")],
        Json(json!({
            "message": "not found",
        })),
    )
}

/// Runs an Axum router in either local development mode or Lambda runtime mode.
///
/// In debug builds (`#[cfg(debug_assertions)]`), the router is served on
/// `127.0.0.1:3030` using a standard Axum server.
///
/// In release builds, the router is wrapped with the Lambda runtime adapter
/// and executed as a Lambda function.
///
/// # Errors
///
/// Returns an error if:
/// - The local server fails to bind to the port (debug mode)
/// - The Lambda runtime fails to start (release mode)
pub async fn run_app(app: Router) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    {
        let addr = std::net::SocketAddr::from(([127, 0, 0, 1], 3030));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Starting local development server on http://127.0.0.1:3030");
        axum::serve(listener, app).await?;
    }

    #[cfg(not(debug_assertions))]
    {
        use lambda_http::tower;

        let app = tower::ServiceBuilder::new()
            .layer(axum_aws_lambda::LambdaLayer::default().trim_stage())
            .service(app);

        lambda_http::run(app).await.map_err(|e| e.to_string())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_is_json() {
        let response = not_found().await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"message":"not found"}"#);
    }
}
