/// Characters that always terminate a word, before any configured
/// delimiters: space, tab, newline, carriage return, vertical tab.
const WHITESPACE: &str = " \t\n\r\x0B";

/// True unless `c` is whitespace or one of the delimiter characters.
pub fn is_word(c: char, delimiters: &str) -> bool {
    !WHITESPACE.contains(c) && !delimiters.contains(c)
}

/// Half-open character range of a word within a line, plus the word
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRange {
    pub start: usize,
    pub end: usize,
    pub word: String,
}

/// Find the word around `column` in `line` by expanding in both
/// directions while word characters hold.
///
/// Columns are character indices; a column past the end of the line is
/// clamped to the line length. On a non-word character the range is
/// empty at `column`.
pub fn word_at(line: &str, column: usize, delimiters: &str) -> WordRange {
    let chars: Vec<char> = line.chars().collect();
    let mut start = column.min(chars.len());
    let mut end = start;

    while start > 0 && is_word(chars[start - 1], delimiters) {
        start -= 1;
    }
    while end < chars.len() && is_word(chars[end], delimiters) {
        end += 1;
    }

    WordRange {
        start,
        end,
        word: chars[start..end].iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELIMITERS: &str = "$()[]{}<>,.!?;:'\"\\/";

    #[test]
    fn finds_word_boundaries_around_cursor() {
        let range = word_at("hello world", 5, DELIMITERS);

        assert_eq!(
            range,
            WordRange {
                start: 0,
                end: 5,
                word: "hello".to_string()
            }
        );
    }

    #[test]
    fn expands_in_both_directions() {
        let range = word_at("hello world", 8, DELIMITERS);

        assert_eq!(range.start, 6);
        assert_eq!(range.end, 11);
        assert_eq!(range.word, "world");
    }

    #[test]
    fn delimiters_end_a_word() {
        let range = word_at("foo.bar", 5, DELIMITERS);

        assert_eq!(range.word, "bar");
        assert_eq!(range.start, 4);
    }

    #[test]
    fn cursor_on_whitespace_yields_empty_range() {
        let range = word_at("a b", 1, DELIMITERS);

        assert_eq!(range.start, 1);
        assert_eq!(range.end, 1);
        assert_eq!(range.word, "");
    }

    #[test]
    fn column_past_line_end_is_clamped() {
        let range = word_at("hi", 10, DELIMITERS);

        assert_eq!(range.word, "hi");
        assert_eq!(range.end, 2);
    }

    #[test]
    fn is_word_rejects_whitespace_and_delimiters() {
        assert!(is_word('a', DELIMITERS));
        assert!(is_word('-', DELIMITERS));
        assert!(!is_word(' ', DELIMITERS));
        assert!(!is_word('\t', DELIMITERS));
        assert!(!is_word('$', DELIMITERS));
    }
}
