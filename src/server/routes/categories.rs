use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResponse};

use super::category_map;

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesResponse> {
    let categories = categories::get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// Questions filtered by exact category id. An unknown category and a known
/// category with zero questions both read as 404, not an empty list.
async fn get_category_questions(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<CategoryQuestionsResponse> {
    let category = categories::get_category(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let selection = questions::get_questions_for_category(&pool, category.id).await?;
    if selection.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: selection.len(),
        questions: selection,
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
        .with_state(state)
}
