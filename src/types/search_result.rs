use serde::{Deserialize, Serialize};

/// Body of a successful `POST /search` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// Matching knowledge-base snippets, best first.
    #[serde(default)]
    pub results: Vec<String>,

    /// The query as the service understood it.
    pub query: String,
}

impl SearchResult {
    /// Returns true when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_result_deserialization() {
        let result: SearchResult = serde_json::from_value(json!({
            "results": ["Eye of Cthulhu: The Eye of Cthulhu is usually the first boss players encounter."],
            "query": "eye"
        }))
        .unwrap();
        assert_eq!(result.query, "eye");
        assert_eq!(result.results.len(), 1);
        assert!(!result.is_empty());
    }
}
