use regex::Regex;
use tracing::warn;

use crate::dynamic::{evaluate_dynamic_expressions, DynamicVariables};
use crate::models::SnippetEntry;

/// Find the replacement for `selected_text` in an ordered snippet
/// table. At most one entry wins: the first match in table order.
///
/// In literal mode the first entry whose pattern equals the selection
/// exactly wins and its replacement is returned. In regex mode the
/// first entry whose pattern matches wins and the selection is
/// returned with that first match substituted; back-references (`$1`,
/// `$name`, `${name}`) in the replacement are expanded from capture
/// groups. Patterns that fail to compile are skipped.
///
/// Returns an empty string when nothing matches — "no snippet" is a
/// sentinel here, not an error. When `variables` is supplied, a
/// non-empty result is run through the dynamic-expression resolver
/// before being returned.
pub fn find_snippet(
    selected_text: &str,
    snippets: &[SnippetEntry],
    is_regex: bool,
    variables: Option<&DynamicVariables>,
) -> String {
    let mut result = String::new();

    for entry in snippets {
        if is_regex {
            let regex = match Regex::new(&entry.pattern) {
                Ok(regex) => regex,
                Err(err) => {
                    warn!(
                        "Skipping snippet with malformed pattern '{}': {}",
                        entry.pattern, err
                    );
                    continue;
                }
            };
            if regex.is_match(selected_text) {
                result = regex
                    .replace(selected_text, entry.replacement.as_str())
                    .into_owned();
                break;
            }
        } else if entry.pattern == selected_text {
            result = entry.replacement.clone();
            break;
        }
    }

    if result.is_empty() {
        return result;
    }

    evaluate_dynamic_expressions(&result, variables)
}
