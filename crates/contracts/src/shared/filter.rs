//! List filter sent with `get_all`

use serde::{Deserialize, Serialize};

/// Filter of the project list.
///
/// The UI keeps whatever the inputs hold, including empty strings;
/// [`sanitize_filter`] maps those to absent right before transmission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub query: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
}

impl Filter {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// Map empty-string fields to absent
pub fn sanitize_filter(filter: &Filter) -> Filter {
    Filter {
        query: non_empty(&filter.query),
        category: non_empty(&filter.category),
        language: non_empty(&filter.language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_strings_become_absent() {
        let filter = Filter {
            query: Some(String::new()),
            category: Some("x".into()),
            language: Some(String::new()),
        };

        assert_eq!(
            sanitize_filter(&filter),
            Filter {
                query: None,
                category: Some("x".into()),
                language: None,
            }
        );
    }

    #[test]
    fn test_whitespace_is_kept() {
        let filter = Filter::with_query(" ");
        assert_eq!(sanitize_filter(&filter).query.as_deref(), Some(" "));
    }

    #[test]
    fn test_wire_shape() {
        let wire = serde_json::to_value(sanitize_filter(&Filter::with_query(""))).unwrap();
        assert_eq!(wire, json!({"query": null, "category": null, "language": null}));
    }
}
