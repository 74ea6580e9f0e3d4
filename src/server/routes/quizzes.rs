use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::questions;
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResponse, AppJson};

/// The client also sends the category's `type` label; only the id matters
/// here, and id 0 is its "ALL" sentinel.
#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Deserialize)]
struct QuizBody {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Question,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    AppJson(body): AppJson<QuizBody>,
) -> ApiResponse<QuizResponse> {
    let category = body.quiz_category.map(|c| c.id).filter(|&id| id != 0);

    let candidates = match category {
        Some(id) => questions::get_questions_for_category(&pool, id).await,
        None => questions::get_all_questions(&pool).await,
    }
    .map_err(ApiError::unprocessable)?;

    let candidates: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !body.previous_questions.contains(&q.id))
        .collect();

    let question = candidates
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or(ApiError::NotFound)?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
