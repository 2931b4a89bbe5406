use std::collections::HashMap;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

/// A `{{ expr }}` token: balanced braces with a non-empty interior.
static DYNAMIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("dynamic expression pattern is valid"));

/// Source of the current instant. Injected into the resolver so hosts
/// supply wall-clock time and tests supply a fixed one.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock [`Clock`] for hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

type Producer<'a> = Box<dyn Fn() -> String + 'a>;

struct Variable<'a> {
    producer: Producer<'a>,
    formattable: bool,
}

/// Table of dynamic variables: name to zero-argument producer.
///
/// Formattable variables are the time-bearing ones; they additionally
/// accept a `{{name:FORMAT}}` form rendering the current instant with a
/// chrono strftime pattern. Variables such as `title` carry host state
/// instead and ignore formats.
pub struct DynamicVariables<'a> {
    clock: &'a dyn Clock,
    vars: HashMap<String, Variable<'a>>,
}

impl<'a> DynamicVariables<'a> {
    /// An empty table on the given clock.
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self {
            clock,
            vars: HashMap::new(),
        }
    }

    /// The built-in variables: `date` (`%Y-%m-%d`), `time` (`%H:%M`)
    /// and `title` (the active document title, empty when there is
    /// none).
    pub fn builtin(clock: &'a dyn Clock, title: Option<String>) -> Self {
        let mut table = Self::new(clock);
        table.insert_formattable("date", move || clock.now().format("%Y-%m-%d").to_string());
        table.insert_formattable("time", move || clock.now().format("%H:%M").to_string());
        let title = title.unwrap_or_default();
        table.insert("title", move || title.clone());
        table
    }

    /// Add a variable that carries host state and does not support
    /// custom date/time formats.
    pub fn insert(&mut self, name: &str, producer: impl Fn() -> String + 'a) {
        self.vars.insert(
            name.to_string(),
            Variable {
                producer: Box::new(producer),
                formattable: false,
            },
        );
    }

    /// Add a time-bearing variable that also accepts `{{name:FORMAT}}`.
    pub fn insert_formattable(&mut self, name: &str, producer: impl Fn() -> String + 'a) {
        self.vars.insert(
            name.to_string(),
            Variable {
                producer: Box::new(producer),
                formattable: true,
            },
        );
    }

    fn get(&self, name: &str) -> Option<&Variable<'a>> {
        self.vars.get(name)
    }

    fn is_formattable(&self, name: &str) -> bool {
        self.vars.get(name).map_or(false, |v| v.formattable)
    }
}

/// Substitute every `{{ expr }}` token in `text`.
///
/// A token whose trimmed interior names a table variable produces that
/// variable's value. Otherwise `variable:format` (split at the first
/// colon) renders the current instant for formattable variables, with
/// `timestamp` special-cased: `unix` is seconds since epoch, `iso` is
/// an ISO-8601 UTC timestamp, anything else a custom pattern. A token
/// that resolves to nothing, or whose format the formatter rejects,
/// stays in the output verbatim, braces included. Without a table the
/// input passes through unchanged.
pub fn evaluate_dynamic_expressions(text: &str, variables: Option<&DynamicVariables>) -> String {
    let Some(table) = variables else {
        return text.to_string();
    };
    if !has_dynamic_expressions(text) {
        return text.to_string();
    }

    DYNAMIC_PATTERN
        .replace_all(text, |caps: &Captures| {
            let original = caps[0].to_string();
            let expression = caps[1].trim();

            if let Some(variable) = table.get(expression) {
                let value = (variable.producer)();
                debug!("Resolved dynamic expression '{}' -> '{}'", expression, value);
                return value;
            }

            if let Some((name, format)) = expression.split_once(':') {
                let name = name.trim();
                let format = format.trim();

                if name == "timestamp" {
                    return match format {
                        "unix" => table.clock.now().timestamp().to_string(),
                        "iso" => table
                            .clock
                            .now()
                            .with_timezone(&Utc)
                            .to_rfc3339_opts(SecondsFormat::Millis, true),
                        _ => format_instant(table.clock.now(), format).unwrap_or(original),
                    };
                }

                if table.is_formattable(name) {
                    return format_instant(table.clock.now(), format).unwrap_or(original);
                }
            }

            original
        })
        .into_owned()
}

/// True when `text` contains at least one well-formed `{{...}}` token.
/// Recognizes the same shape the resolver substitutes, without
/// evaluating anything.
pub fn has_dynamic_expressions(text: &str) -> bool {
    DYNAMIC_PATTERN.is_match(text)
}

/// Render `instant` with a strftime pattern, or `None` when the
/// pattern contains specifiers chrono cannot format.
fn format_instant(instant: DateTime<Local>, format: &str) -> Option<String> {
    let items: Vec<Item> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    Some(instant.format_with_items(items.into_iter()).to_string())
}
