use serde::{Deserialize, Serialize};

/// A single pattern/replacement record in the snippet table.
///
/// Two entries may carry the same pattern; lookups take the first match
/// in table order. Identity beyond the pattern is the optional `id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SnippetEntry {
    pub pattern: String,
    pub replacement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SnippetEntry {
    pub fn new(pattern: String, replacement: String) -> Self {
        Self {
            pattern,
            replacement,
            hotkey: None,
            id: None,
        }
    }

    pub fn with_hotkey(pattern: String, replacement: String, hotkey: String) -> Self {
        Self {
            pattern,
            replacement,
            hotkey: Some(hotkey),
            id: None,
        }
    }

    pub fn update_replacement(&mut self, new_replacement: String) {
        self.replacement = new_replacement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_entries_saved_without_hotkey_or_id() {
        let json = r#"[{"pattern": "brb", "replacement": "be right back"}]"#;
        let entries: Vec<SnippetEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].pattern, "brb");
        assert_eq!(entries[0].hotkey, None);
        assert_eq!(entries[0].id, None);
    }

    #[test]
    fn omits_absent_optional_fields_when_serializing() {
        let entry = SnippetEntry::new("sig".to_string(), "Regards".to_string());
        let json = serde_json::to_string(&entry).unwrap();

        assert_eq!(json, r#"{"pattern":"sig","replacement":"Regards"}"#);
    }
}
