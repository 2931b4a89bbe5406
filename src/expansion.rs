use crate::cursor::{calculate_cursor_end_pos, CursorPosition};
use crate::dynamic::{evaluate_dynamic_expressions, DynamicVariables};
use crate::matcher::find_snippet;
use crate::models::SnippetEntry;
use crate::settings::ExpansionSettings;
use crate::words::{word_at, WordRange};

/// What the host hands the engine for one trigger press.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionRequest<'a> {
    /// Text of the line the cursor is on.
    pub line_text: &'a str,
    /// The cursor position; with a selection, its start.
    pub cursor: CursorPosition,
    /// Explicitly selected text, if any. When absent the word under
    /// the cursor is matched instead.
    pub selection: Option<&'a str>,
}

/// Result of a successful expansion, ready for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionOutcome {
    /// Final literal text to insert.
    pub text: String,
    /// Absolute cursor position after insertion.
    pub cursor: CursorPosition,
    /// Character range to replace on the cursor line when the engine
    /// auto-selected the word under the cursor; `None` when the host
    /// replaces its own selection.
    pub replace: Option<WordRange>,
    /// The inserted text contains a tab stop; the host should run its
    /// tab-stop search from the insertion point instead of `cursor`.
    pub stop_found: bool,
    /// The inserted text still carries the paste marker, to be filled
    /// from the clipboard by the host.
    pub wants_clipboard: bool,
}

/// Run the full pipeline for a trigger press: pick the text to match,
/// find its replacement, resolve dynamic expressions, rewrite markers.
///
/// Returns `None` when no snippet applies, so the host can fall
/// through to its tab-stop search.
pub fn expand(
    request: ExpansionRequest<'_>,
    snippets: &[SnippetEntry],
    settings: &ExpansionSettings,
    variables: Option<&DynamicVariables>,
) -> Option<ExpansionOutcome> {
    let (selected, origin, replace) = match request.selection {
        Some(selection) => (selection.to_string(), request.cursor, None),
        None => {
            let word = word_at(
                request.line_text,
                request.cursor.column,
                &settings.word_delimiters,
            );
            let origin = CursorPosition {
                line: request.cursor.line,
                column: word.start,
            };
            (word.word.clone(), origin, Some(word))
        }
    };

    let replacement = find_snippet(&selected, snippets, settings.is_regex, variables);
    if replacement.is_empty() {
        return None;
    }

    Some(finish(&replacement, origin, replace, settings))
}

/// Expand one specific entry, bypassing the matcher. Used for
/// per-snippet hotkey bindings.
pub fn expand_entry(
    entry: &SnippetEntry,
    cursor: CursorPosition,
    settings: &ExpansionSettings,
    variables: Option<&DynamicVariables>,
) -> ExpansionOutcome {
    let replacement = evaluate_dynamic_expressions(&entry.replacement, variables);
    finish(&replacement, cursor, None, settings)
}

fn finish(
    replacement: &str,
    origin: CursorPosition,
    replace: Option<WordRange>,
    settings: &ExpansionSettings,
) -> ExpansionOutcome {
    let (text, delta) = calculate_cursor_end_pos(replacement, origin, settings);
    let stop_found = text.contains(&settings.stop_marker);
    let wants_clipboard = text.contains(&settings.paste_marker);

    let cursor = if stop_found {
        origin
    } else {
        CursorPosition {
            line: origin.line + delta.line_delta,
            column: (origin.column as isize + delta.column_offset).max(0) as usize,
        }
    };

    ExpansionOutcome {
        text,
        cursor,
        replace,
        stop_found,
        wants_clipboard,
    }
}
