mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use std::collections::BTreeMap;

use crate::db::Category;

/// `{id -> type}` mapping returned alongside question lists. Integer keys
/// serialize as JSON object keys, i.e. strings.
pub(super) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
