//! Quiz session endpoints.
//!
//! The round payload carries the region's adcode (so the client can draw the
//! outline from its own map data) and the shuffled name options, but never
//! the region name itself.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::response::{created, ok, AppError};
use crate::session::{AnswerFeedback, QuizSession, Round, MAX_ROUNDS};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_session))
        .route("/:id/answer", post(submit_answer))
        .route("/:id/summary", get(get_summary))
        .route("/:id/restart", post(restart_session))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundView {
    question: u32,
    max_rounds: u32,
    region_adcode: u32,
    options: Vec<&'static str>,
}

impl RoundView {
    fn from_round(round: &Round) -> Self {
        Self {
            question: round.question,
            max_rounds: MAX_ROUNDS,
            region_adcode: round.region.adcode,
            options: round.options.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    session_id: Uuid,
    game_over: bool,
    round: Option<RoundView>,
    adjusted_score: f64,
    accuracy: u32,
    correct_answers: u32,
    total_answers: u32,
}

impl SessionView {
    fn from_session(session: &QuizSession) -> Self {
        Self {
            session_id: session.id(),
            game_over: session.is_over(),
            round: session.current_round().map(RoundView::from_round),
            adjusted_score: session.scoring().adjusted_score(),
            accuracy: session.scoring().accuracy(),
            correct_answers: session.scoring().correct_answers(),
            total_answers: session.scoring().total_answers(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerRequest {
    /// Number of the round being answered; stale numbers are rejected.
    question: u32,
    choice: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerView {
    #[serde(flatten)]
    feedback: AnswerFeedback,
    next_round: Option<RoundView>,
}

async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let session = QuizSession::new();
    let view = SessionView::from_session(&session);
    let id = state.insert_session(session).await;

    tracing::info!(session_id = %id, "Quiz session created");
    created(view)
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = state.sessions().read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| AppError::not_found("Quiz session not found"))?;

    Ok(ok(SessionView::from_session(session)))
}

async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.choice.trim().is_empty() {
        return Err(AppError::bad_request("VALIDATION_ERROR", "choice must not be empty"));
    }

    let mut sessions = state.sessions().write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found("Quiz session not found"))?;

    let feedback = session.answer(payload.question, &payload.choice)?;
    let next_round = session.current_round().map(RoundView::from_round);

    tracing::debug!(
        session_id = %id,
        question = payload.question,
        correct = feedback.correct,
        adjusted_score = feedback.adjusted_score,
        "Answer graded"
    );

    Ok(ok(AnswerView {
        feedback,
        next_round,
    }))
}

async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = state.sessions().read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| AppError::not_found("Quiz session not found"))?;

    let summary = session.summary()?;
    Ok(ok(summary))
}

async fn restart_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mut sessions = state.sessions().write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found("Quiz session not found"))?;

    session.reset();
    tracing::info!(session_id = %id, "Quiz session restarted");

    Ok(ok(SessionView::from_session(session)))
}
