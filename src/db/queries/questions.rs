use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteExecutor;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

pub async fn get_all_questions<'e>(
    executor: impl SqliteExecutor<'e>,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_question<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_questions_for_category<'e>(
    executor: impl SqliteExecutor<'e>,
    category: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions
        WHERE category = ?1 ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(executor)
    .await
}

/// Case-insensitive substring match against the question text.
pub async fn search_questions<'e>(
    executor: impl SqliteExecutor<'e>,
    term: &str,
) -> sqlx::Result<Vec<Question>> {
    let pattern = format!("%{}%", term.to_lowercase());
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions
        WHERE lower(question) LIKE ?1 ORDER BY id
        "#,
    )
    .bind(pattern)
    .fetch_all(executor)
    .await
}

/// Runs on whatever executor the caller passes; handlers hand in their own
/// transaction so the insert only lands when the whole operation commits.
pub async fn create_question<'e>(
    executor: impl SqliteExecutor<'e>,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(executor)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn delete_question<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        DELETE FROM questions WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn import_questions(pool: &SqlitePool, questions: Vec<Question>) -> anyhow::Result<()> {
    let mut tx = pool.begin().await?;
    for question in questions {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO questions (id, question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(question.id)
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(())
}
