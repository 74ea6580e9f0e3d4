use serde::{Deserialize, Deserializer};

/// `?page=N` on every paginated endpoint. The frontend sends the page as a
/// bare string; anything missing or unparseable falls back to page 1 instead
/// of rejecting the request.
#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_lenient_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.parse::<usize>().ok().filter(|&p| p >= 1).unwrap_or(1))
}
