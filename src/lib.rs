//! Snipnote - a snippet expansion engine for note editors.
//!
//! The host editor hands the engine its snippet table, marker settings
//! and cursor position; the engine answers with plain strings and
//! positions. Pattern matching, dynamic `{{...}}` expressions and
//! sentinel markers are handled here. Editor integration, clipboard
//! access and keyboard wiring stay in the host, which applies the
//! returned text and runs the tab-stop/clipboard follow-up itself.
//!
//! Every engine function is pure and synchronous: inputs are read-only
//! snapshots, nothing is awaited, and repeated calls are safe from any
//! call site.

pub mod config;
pub mod cursor;
pub mod dynamic;
pub mod error;
pub mod expansion;
pub mod hotkey;
pub mod matcher;
pub mod models;
pub mod settings;
pub mod storage;
pub mod words;

// Re-export common items for convenience
pub use config::{db_file_exists, ensure_config_dir, get_config_dir, get_db_file_path};
pub use cursor::{calculate_cursor_end_pos, CursorEndPosition, CursorPosition};
pub use dynamic::{
    evaluate_dynamic_expressions, has_dynamic_expressions, Clock, DynamicVariables, SystemClock,
};
pub use error::{Result, SnipnoteError};
pub use expansion::{expand, expand_entry, ExpansionOutcome, ExpansionRequest};
pub use hotkey::{parse_hotkey, Hotkey, Modifier};
pub use matcher::find_snippet;
pub use models::SnippetEntry;
pub use settings::ExpansionSettings;
pub use storage::{
    add_snippet, assign_missing_ids, delete_snippet, load_snippets, save_snippets, update_snippet,
};
pub use words::{is_word, word_at, WordRange};
