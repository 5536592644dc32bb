// src/domain/post/content.rs
use serde_json::Value;

/// Opaque structured document produced by the editor collaborator. This
/// layer stores it verbatim; the only local interpretation is best-effort
/// plain-text extraction for excerpts.
#[derive(Debug, Clone, PartialEq)]
pub struct PostContent(Value);

impl PostContent {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Walks the generic node tree collecting `text` leaves. Unknown node
    /// kinds are traversed, not rejected.
    pub fn extract_text(&self) -> String {
        fn collect(node: &Value, out: &mut Vec<String>) {
            match node {
                Value::Object(map) => {
                    if let Some(Value::String(text)) = map.get("text") {
                        if !text.is_empty() {
                            out.push(text.clone());
                        }
                    }
                    if let Some(Value::Array(children)) = map.get("content") {
                        for child in children {
                            collect(child, out);
                        }
                    }
                }
                Value::Array(nodes) => {
                    for child in nodes {
                        collect(child, out);
                    }
                }
                _ => {}
            }
        }

        let mut parts = Vec::new();
        collect(&self.0, &mut parts);
        parts.join(" ").trim().to_string()
    }

    /// Excerpt helper: extracted text truncated to `max_len` characters,
    /// with an ellipsis when cut.
    pub fn generate_excerpt(&self, max_len: usize) -> String {
        let text = self.extract_text();
        if text.chars().count() <= max_len {
            return text;
        }
        let cut: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

impl From<Value> for PostContent {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
