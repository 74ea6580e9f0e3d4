use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::deserializers::PageQuery;
use crate::server::error::{ApiError, ApiResponse, AppJson};
use crate::server::pagination::paginate;

use super::category_map;

#[derive(Deserialize)]
struct NewQuestion {
    question: String,
    answer: String,
    difficulty: i64,
    category: i64,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionListResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    // placeholder, the original client never reads it
    current_category: Vec<String>,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    created: i64,
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<String>,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<QuestionListResponse> {
    let selection = questions::get_all_questions(&pool).await?;
    let categories = categories::get_all_categories(&pool).await?;

    let current_questions = paginate(page, &selection);
    if current_questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions: current_questions,
        total_questions: selection.len(),
        current_category: Vec::new(),
        categories: category_map(categories),
    }))
}

/// The insert and the re-listing share one transaction; any failure up to the
/// commit rolls the insert back, so a 422 never leaves a row behind.
async fn create_question(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
    AppJson(new_question): AppJson<NewQuestion>,
) -> ApiResponse<CreatedResponse> {
    let mut tx = pool.begin().await.map_err(ApiError::unprocessable)?;

    let created = questions::create_question(
        &mut *tx,
        &new_question.question,
        &new_question.answer,
        new_question.category,
        new_question.difficulty,
    )
    .await
    .map_err(ApiError::unprocessable)?;

    let selection = questions::get_all_questions(&mut *tx)
        .await
        .map_err(ApiError::unprocessable)?;

    tx.commit().await.map_err(ApiError::unprocessable)?;

    Ok(Json(CreatedResponse {
        success: true,
        questions: paginate(page, &selection),
        total_questions: selection.len(),
        created,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<DeletedResponse> {
    let mut tx = pool.begin().await.map_err(ApiError::unprocessable)?;

    let question = questions::get_question(&mut *tx, id)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or(ApiError::NotFound)?;

    questions::delete_question(&mut *tx, question.id)
        .await
        .map_err(ApiError::unprocessable)?;

    let remaining = questions::get_all_questions(&mut *tx)
        .await
        .map_err(ApiError::unprocessable)?;

    tx.commit().await.map_err(ApiError::unprocessable)?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question.id,
        questions: paginate(page, &remaining),
        total_questions: remaining.len(),
    }))
}

/// An empty or missing `searchTerm` is a 404, not a validation error; an
/// empty result set for a real term is a success with an empty list.
async fn search_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
    AppJson(body): AppJson<SearchBody>,
) -> ApiResponse<SearchResponse> {
    let term = body
        .search_term
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::NotFound)?;

    let selection = questions::search_questions(&pool, &term).await?;

    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(page, &selection),
        total_questions: selection.len(),
        current_category: None,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .with_state(state)
}
