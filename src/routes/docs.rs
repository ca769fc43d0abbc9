use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::models::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/openapi.json", get(openapi))
        .with_state(state)
}

/// Machine-readable description of the HTTP surface, served at a fixed path
/// for tooling and documentation.
async fn openapi(State(state): State<AppState>) -> Json<Value> {
    let envelope_schema = json!({
        "type": "object",
        "properties": {
            "code": { "type": "integer" },
            "msg": { "type": "string" },
            "data": { "type": ["string", "null"] }
        },
        "required": ["code", "msg"]
    });

    Json(json!({
        "openapi": "3.1.0",
        "info": {
            "title": state.config.title,
            "description": state.config.description,
            "version": state.config.version,
        },
        "paths": {
            "/uploadfile/": {
                "post": {
                    "operationId": "uploadFile",
                    "summary": "Upload a docx document and receive a summary",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "multipart/form-data": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "file": { "type": "string", "format": "binary" }
                                    },
                                    "required": ["file"]
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Success or failure envelope",
                            "content": {
                                "application/json": { "schema": envelope_schema }
                            }
                        }
                    }
                }
            },
            "/health": {
                "get": {
                    "operationId": "healthCheck",
                    "summary": "Liveness probe",
                    "responses": {
                        "200": { "description": "Service is up" }
                    }
                }
            }
        }
    }))
}
