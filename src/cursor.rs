use regex::Regex;

use crate::settings::ExpansionSettings;

/// A line/column position in the editor. Columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Cursor displacement to apply after an expansion is inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorEndPosition {
    pub line_delta: usize,
    pub column_offset: isize,
}

/// Rewrite the sentinel markers in a replacement into literal text and
/// compute where the cursor lands relative to the insertion point.
///
/// Literal newlines are discarded up front: multi-line snippets are
/// authored with the newline marker, so a real `\n` in the replacement
/// carries no meaning. A stop marker anywhere pins the displacement to
/// zero, line count included, even when an end marker is also present;
/// the host's tab-stop search places the cursor in that case (inherited
/// behavior, kept as-is). Otherwise the cursor goes to the first end
/// marker, or to the end of the text when there is none. When a newline
/// marker precedes that point, the column offset is measured from the
/// last such marker with the origin column subtracted, so adding the
/// offset to the origin column yields the absolute column on the
/// destination line.
///
/// Every newline marker becomes one real `\n` in the output, and only
/// the first end marker is consumed; any repeats stay in the text.
pub fn calculate_cursor_end_pos(
    raw: &str,
    cursor: CursorPosition,
    settings: &ExpansionSettings,
) -> (String, CursorEndPosition) {
    let stripped: String = raw.chars().filter(|&c| c != '\n').collect();
    let newline_marker = &settings.newline_marker;

    // A marker with a trailing real newline counts once, same as a bare
    // marker. Markers may contain regex metacharacters, hence escape.
    let escaped = regex::escape(newline_marker);
    let break_pattern = Regex::new(&format!(r"{}\n|{}", escaped, escaped))
        .expect("escaped marker is a valid pattern");

    let mut end = CursorEndPosition::default();
    if !stripped.contains(&settings.stop_marker) {
        let raw_end = stripped
            .find(&settings.end_marker)
            .unwrap_or(stripped.len());
        let before_end = &stripped[..raw_end];
        let end_col = before_end.chars().count() as isize;

        end.column_offset = match before_end.rfind(newline_marker) {
            Some(last) => {
                let marker_col = stripped[..last].chars().count() as isize;
                let marker_len = newline_marker.chars().count() as isize;
                end_col - marker_col - marker_len - cursor.column as isize
            }
            None => end_col,
        };
        end.line_delta = break_pattern.find_iter(before_end).count();
    }

    let mut text = break_pattern.replace_all(&stripped, "\n").into_owned();
    text = text.replacen(&settings.end_marker, "", 1);

    (text, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ExpansionSettings {
        ExpansionSettings::default()
    }

    fn at(line: usize, column: usize) -> CursorPosition {
        CursorPosition { line, column }
    }

    #[test]
    fn newline_marker_becomes_a_line_break() {
        let (text, end) = calculate_cursor_end_pos("Hello$nl$World$end$", at(0, 5), &settings());

        assert_eq!(text, "Hello\nWorld");
        assert_eq!(end.line_delta, 1);
        // Offset plus the origin column (5) is the absolute column on
        // the new line: the end of "World".
        assert_eq!(end.column_offset, 0);
    }

    #[test]
    fn plain_text_passes_through_with_cursor_at_its_end() {
        let (text, end) = calculate_cursor_end_pos("plain", at(0, 3), &settings());

        assert_eq!(text, "plain");
        assert_eq!(end.line_delta, 0);
        assert_eq!(end.column_offset, 5);
    }

    #[test]
    fn missing_end_marker_defaults_to_text_end() {
        let (text, end) = calculate_cursor_end_pos("A$nl$BB", at(0, 2), &settings());

        assert_eq!(text, "A\nBB");
        assert_eq!(end.line_delta, 1);
        assert_eq!(end.column_offset, 0);
    }

    #[test]
    fn stop_marker_short_circuits_cursor_placement() {
        let (text, end) =
            calculate_cursor_end_pos("for ($tb$;$tb$)$nl$$tb$$end$", at(0, 7), &settings());

        assert_eq!(text, "for ($tb$;$tb$)\n$tb$");
        assert_eq!(end, CursorEndPosition::default());
    }

    #[test]
    fn stop_marker_after_end_marker_still_short_circuits() {
        let (_, end) = calculate_cursor_end_pos("x$end$y$tb$", at(0, 0), &settings());

        assert_eq!(end, CursorEndPosition::default());
    }

    #[test]
    fn only_the_first_end_marker_is_removed() {
        let (text, end) = calculate_cursor_end_pos("a$end$b$end$", at(0, 0), &settings());

        assert_eq!(text, "ab$end$");
        assert_eq!(end.line_delta, 0);
        assert_eq!(end.column_offset, 1);
    }

    #[test]
    fn literal_newlines_are_discarded() {
        let (text, end) = calculate_cursor_end_pos("Hello\nWorld", at(0, 0), &settings());

        assert_eq!(text, "HelloWorld");
        assert_eq!(end.column_offset, 10);
    }

    #[test]
    fn markers_with_regex_metacharacters_work() {
        let custom = ExpansionSettings {
            newline_marker: "*nl*".to_string(),
            end_marker: "(end)".to_string(),
            ..Default::default()
        };

        let (text, end) = calculate_cursor_end_pos("A*nl*B(end)", at(0, 0), &custom);

        assert_eq!(text, "A\nB");
        assert_eq!(end.line_delta, 1);
        assert_eq!(end.column_offset, 1);
    }

    #[test]
    fn line_breaks_after_the_end_marker_are_not_counted() {
        let (text, end) =
            calculate_cursor_end_pos("one$nl$two$end$$nl$three", at(0, 0), &settings());

        assert_eq!(text, "one\ntwo\nthree");
        assert_eq!(end.line_delta, 1);
        assert_eq!(end.column_offset, 3);
    }

    #[test]
    fn multibyte_text_counts_columns_in_characters() {
        let (text, end) = calculate_cursor_end_pos("héllo$end$", at(0, 0), &settings());

        assert_eq!(text, "héllo");
        assert_eq!(end.column_offset, 5);
    }
}
