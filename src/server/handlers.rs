//! HTTP request handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use log::warn;

use crate::errors::{SpeechError, TranslationError};
use crate::server::types::{ErrorResponse, PronounceRequest, StatusResponse, TranslateRequest, messages};
use crate::speech::SpeechService;
use crate::translation::TranslationService;

/// Shared state of the HTTP handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub translation: TranslationService,
    pub speech: SpeechService,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// POST /translate
pub async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected translate request body: {}", rejection);
            return error_response(StatusCode::BAD_REQUEST, messages::MISSING_TRANSLATE_FIELDS);
        }
    };

    let (Some(text), Some(target)) = (request.text.as_deref(), request.target.as_deref()) else {
        warn!("Translate request without text or target");
        return error_response(StatusCode::BAD_REQUEST, messages::MISSING_TRANSLATE_FIELDS);
    };

    match state
        .translation
        .translate_request(text, request.input.as_deref(), target)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(TranslationError::InvalidInput(reason)) => {
            warn!("Invalid translate request: {}", reason);
            error_response(StatusCode::BAD_REQUEST, messages::MISSING_TRANSLATE_FIELDS)
        }
        Err(TranslationError::Provider(_)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, messages::TRANSLATION_FAILED)
        }
    }
}

/// POST /pronounce
pub async fn pronounce(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PronounceRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected pronounce request body: {}", rejection);
            return error_response(StatusCode::BAD_REQUEST, messages::MISSING_PRONOUNCE_FIELDS);
        }
    };

    let (Some(text), Some(lang)) = (request.text.as_deref(), request.lang.as_deref()) else {
        warn!("Pronounce request without text or language");
        return error_response(StatusCode::BAD_REQUEST, messages::MISSING_PRONOUNCE_FIELDS);
    };

    match state.speech.pronounce(text, lang).await {
        Ok(audio) => (StatusCode::OK, [(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response(),
        Err(SpeechError::InvalidInput(reason)) => {
            warn!("Invalid pronounce request: {}", reason);
            error_response(StatusCode::BAD_REQUEST, messages::MISSING_PRONOUNCE_FIELDS)
        }
        Err(SpeechError::Provider(_)) => error_response(StatusCode::INTERNAL_SERVER_ERROR, messages::SPEECH_FAILED),
    }
}

/// GET /status
pub async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let analyzer_ready = state.translation.analyzer_ready();
    let status = if analyzer_ready { "ready" } else { "loading" };

    let response = StatusResponse {
        status: status.to_string(),
        analyzer_ready,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
