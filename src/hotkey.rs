use serde::{Deserialize, Serialize};

/// Modifier keys recognized in a hotkey binding. `Mod` is the platform
/// primary modifier: Ctrl, or Cmd on macOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    Mod,
    Alt,
    Shift,
}

/// A parsed per-snippet hotkey binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

/// Parse a binding such as `"ctrl+shift+k"`.
///
/// The last `+`-separated token is the key; `ctrl` and `cmd` both map
/// to [`Modifier::Mod`]. Unrecognized modifier tokens are dropped.
pub fn parse_hotkey(binding: &str) -> Hotkey {
    let lowered = binding.to_lowercase();
    let mut parts: Vec<&str> = lowered.split('+').collect();
    let key = parts.pop().unwrap_or("").trim().to_string();

    let mut modifiers = Vec::new();
    for part in parts {
        match part.trim() {
            "ctrl" | "cmd" => modifiers.push(Modifier::Mod),
            "alt" => modifiers.push(Modifier::Alt),
            "shift" => modifiers.push(Modifier::Shift),
            _ => {}
        }
    }

    Hotkey { modifiers, key }
}
