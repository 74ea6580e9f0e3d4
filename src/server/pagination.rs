pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` slice of `items`. Out-of-range pages yield an
/// empty vec, never an error; callers decide whether an empty page is a 404.
pub fn paginate<T: Clone>(page: usize, items: &[T]) -> Vec<T> {
    let start = match (page.max(1) - 1).checked_mul(QUESTIONS_PER_PAGE) {
        Some(start) if start < items.len() => start,
        _ => return Vec::new(),
    };
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    items[start..end].to_vec()
}
