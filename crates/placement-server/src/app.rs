use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::Extension;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use placement_core::messages::flavor_messages;
use placement_core::sample::sample_students;
use placement_core::{SampleStudent, StatsSummary};
use rand::Rng;
use serde_json::{json, Value};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::dataset::resolve_stats;
use crate::demo::demo_prediction;

#[derive(Debug, Error)]
enum InputError {
    #[error("request content type must be application/json")]
    NotJsonContent,
    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("request body must be a JSON object")]
    NotObject,
    #[error("could not convert {0} to float")]
    NotNumber(&'static str),
}

/// `stats` is what `GET /api/stats` reports for the life of the server.
pub fn router(stats: StatsSummary) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/predict", post(predict))
        .route("/api/stats", get(stats_handler))
        .route("/api/sample-data", get(sample_data))
        .layer(Extension(Arc::new(stats)))
}

/// Serve the API, computing stats from `dataset` when it loads.
pub async fn serve(addr: SocketAddr, dataset: Option<&Path>) -> anyhow::Result<()> {
    let stats = resolve_stats(dataset);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        target: "placement_server",
        addr = %listener.local_addr()?,
        data_source = stats.data_source.as_deref().unwrap_or("demo"),
        "listening"
    );
    axum::serve(listener, router(stats)).await?;
    Ok(())
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "Placement Predictor API", "status": "active" }))
}

/// Missing fields read as `0`; numeric strings are accepted.
fn number_field(body: &serde_json::Map<String, Value>, field: &'static str) -> Result<f64, InputError> {
    match body.get(field) {
        None => Ok(0.0),
        Some(Value::Number(number)) => number.as_f64().ok_or(InputError::NotNumber(field)),
        Some(Value::String(text)) => text.trim().parse().map_err(|_| InputError::NotNumber(field)),
        Some(_) => Err(InputError::NotNumber(field)),
    }
}

/// `application/json` or any `application/*+json` type.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()) else {
        return false;
    };
    let mime = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn parse_inputs(headers: &HeaderMap, body: &[u8]) -> Result<(f64, f64), InputError> {
    if !is_json(headers) {
        return Err(InputError::NotJsonContent);
    }
    let value: Value = serde_json::from_slice(body)?;
    let Value::Object(fields) = value else {
        return Err(InputError::NotObject);
    };
    Ok((number_field(&fields, "cgpa")?, number_field(&fields, "iq")?))
}

async fn predict(headers: HeaderMap, body: Bytes) -> Response {
    let (cgpa, iq) = match parse_inputs(&headers, &body) {
        Ok(inputs) => inputs,
        Err(error) => {
            tracing::warn!(target: "placement_server", error = %error, "rejected predict request");
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": error.to_string() }))).into_response();
        }
    };

    let demo = demo_prediction(cgpa, iq);
    let placed = demo.prediction == 1;
    let candidates = flavor_messages(placed);
    let fun_message = candidates[rand::thread_rng().gen_range(0..candidates.len())];
    tracing::info!(
        target: "placement_server",
        cgpa,
        iq,
        prediction = demo.prediction,
        "prediction request"
    );

    Json(json!({
        "success": true,
        "prediction": demo.prediction,
        "probability": demo.probability,
        "message": if placed { "Placed" } else { "Not Placed" },
        "fun_message": fun_message,
        "cgpa": cgpa,
        "iq": iq,
        "model_type": "demo",
        "confidence": (demo.probability * 100.0).round() as u32,
    }))
    .into_response()
}

async fn stats_handler(Extension(stats): Extension<Arc<StatsSummary>>) -> Json<StatsSummary> {
    Json(stats.as_ref().clone())
}

async fn sample_data() -> Json<Vec<SampleStudent>> {
    Json(sample_students())
}
