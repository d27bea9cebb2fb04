use serde::{Deserialize, Serialize};

/// Body of a `POST /search` request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query.
    pub query: String,

    /// Optional snippets to narrow the search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<String>>,
}

impl SearchRequest {
    /// Create a new `SearchRequest` without context.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            context: None,
        }
    }

    /// Attach context snippets.
    pub fn with_context(mut self, context: Vec<String>) -> Self {
        self.context = Some(context);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn search_request_minimal() {
        let request = SearchRequest::new("Terra Blade");
        assert_eq!(to_value(&request).unwrap(), json!({"query": "Terra Blade"}));
    }

    #[test]
    fn search_request_with_context() {
        let request = SearchRequest::new("drops").with_context(vec!["Skeletron".to_string()]);
        assert_eq!(
            to_value(&request).unwrap(),
            json!({"query": "drops", "context": ["Skeletron"]})
        );
    }
}
