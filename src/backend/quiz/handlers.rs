/**
 * Quiz Submission Handler
 *
 * `POST /quiz/submit` records one score per authenticated user. The
 * uniqueness constraint on the score table enforces the one-submission
 * rule; a violation maps to 409.
 */

use crate::backend::error::BackendError;
use crate::backend::middleware::SessionUser;
use crate::backend::supabase::SupabaseClient;
use crate::shared::SharedError;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Body of `POST /quiz/submit`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizSubmitRequest {
    #[serde(default)]
    pub score: Option<i64>,
}

/// Response of `POST /quiz/submit`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSubmitResponse {
    pub ok: bool,
}

/// Handle `POST /quiz/submit`
///
/// # Errors
///
/// * `400 Bad Request` - missing score
/// * `401 Unauthorized` - missing or invalid session token
/// * `409 Conflict` - the user already submitted a score
/// * `500 Internal Server Error` - backend not configured or insert failure
pub async fn submit_quiz(
    State(supabase): State<Option<SupabaseClient>>,
    session: SessionUser,
    Json(request): Json<QuizSubmitRequest>,
) -> Result<Json<QuizSubmitResponse>, BackendError> {
    let score = request
        .score
        .ok_or_else(|| SharedError::validation("score", "is required"))?;

    let client = supabase.ok_or_else(|| BackendError::not_configured("quiz"))?;

    let row = serde_json::json!({
        "user_id": session.id,
        "user_name": session.name,
        "score": score.max(0),
    });

    match client.insert("quiz_scores", &row).await {
        Ok(()) => {
            tracing::info!("user '{}' submitted quiz score {}", session.id, score);
            Ok(Json(QuizSubmitResponse { ok: true }))
        }
        Err(e) if e.is_unique_violation() => Err(BackendError::handler(
            StatusCode::CONFLICT,
            "score already submitted",
        )),
        Err(e) => Err(e.into()),
    }
}
