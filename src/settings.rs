use serde::{Deserialize, Serialize};

use crate::error::{Result, SnipnoteError};

/// Persisted expansion options, including the four sentinel markers.
///
/// Markers are detected by plain substring search, not escaping, so
/// each must be a non-empty string that does not occur in ordinary
/// prose, and no two markers may be equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionSettings {
    /// Marks the final cursor rest position after expansion.
    pub end_marker: String,
    /// Translated into a real line break at expansion time.
    pub newline_marker: String,
    /// Marks an intermediate cursor stop, consumed on the next trigger.
    pub stop_marker: String,
    /// Later replaced with clipboard contents by the host.
    pub paste_marker: String,
    /// Expand on the Tab key.
    pub use_tab: bool,
    /// Expand on the Space key.
    pub use_space: bool,
    /// Characters that end a word when auto-selecting under the cursor,
    /// on top of whitespace.
    pub word_delimiters: String,
    /// Treat snippet patterns as regular expressions.
    pub is_regex: bool,
}

impl Default for ExpansionSettings {
    fn default() -> Self {
        Self {
            end_marker: "$end$".to_string(),
            newline_marker: "$nl$".to_string(),
            stop_marker: "$tb$".to_string(),
            paste_marker: "$pst$".to_string(),
            use_tab: true,
            use_space: false,
            word_delimiters: "$()[]{}<>,.!?;:'\"\\/".to_string(),
            is_regex: false,
        }
    }
}

impl ExpansionSettings {
    /// Check that every marker is usable for substring detection.
    pub fn validate(&self) -> Result<()> {
        let markers = [
            ("end", &self.end_marker),
            ("newline", &self.newline_marker),
            ("stop", &self.stop_marker),
            ("paste", &self.paste_marker),
        ];

        for (name, marker) in &markers {
            if marker.is_empty() {
                return Err(SnipnoteError::InvalidConfig(format!(
                    "{} marker must not be empty",
                    name
                )));
            }
        }

        for i in 0..markers.len() {
            for j in i + 1..markers.len() {
                if markers[i].1 == markers[j].1 {
                    return Err(SnipnoteError::InvalidConfig(format!(
                        "{} marker and {} marker are both '{}'",
                        markers[i].0, markers[j].0, markers[i].1
                    )));
                }
            }
        }

        Ok(())
    }
}
