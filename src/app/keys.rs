use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Key bindings from `[keys]` in config.toml.
///
/// Plain characters go into the URL field, so the defaults use `Ctrl+`
/// chords or named keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub load: String,
    pub toggle_grayscale: String,
    pub clear: String,
    pub quit: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            load: "Enter".to_string(),
            toggle_grayscale: "Ctrl+g".to_string(),
            clear: "Ctrl+u".to_string(),
            quit: "Esc".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        if let Some(rest) = key_str.strip_prefix("Ctrl+") {
            if !event.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            return match rest.chars().next() {
                Some(ch) if rest.chars().count() == 1 => {
                    event.code == KeyCode::Char(ch.to_ascii_lowercase())
                        || event.code == KeyCode::Char(ch.to_ascii_uppercase())
                }
                _ => false,
            };
        }

        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "BackTab" => event.code == KeyCode::BackTab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            s if s.chars().count() == 1 => {
                if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                    return false;
                }
                match s.chars().next() {
                    Some(ch) if ch.is_uppercase() => {
                        event.code == KeyCode::Char(ch)
                            || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                                && event.modifiers.contains(KeyModifiers::SHIFT))
                    }
                    Some(ch) => event.code == KeyCode::Char(ch),
                    None => false,
                }
            }
            _ => false,
        }
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        if let Some(rest) = key_str.strip_prefix("Ctrl+") {
            return format!("^{}", rest.to_uppercase());
        }
        match key_str {
            "Enter" => "↵".to_string(),
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Backspace" => "Bksp".to_string(),
            _ => key_str.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn named_keys_match() {
        let keys = KeyConfig::default();
        assert!(keys.matches(key(KeyCode::Enter, KeyModifiers::NONE), &keys.load));
        assert!(keys.matches(key(KeyCode::Esc, KeyModifiers::NONE), &keys.quit));
        assert!(!keys.matches(key(KeyCode::Char('q'), KeyModifiers::NONE), &keys.quit));
    }

    #[test]
    fn ctrl_chords_require_control() {
        let keys = KeyConfig::default();
        assert!(keys.matches(key(KeyCode::Char('g'), KeyModifiers::CONTROL), &keys.toggle_grayscale));
        assert!(!keys.matches(key(KeyCode::Char('g'), KeyModifiers::NONE), &keys.toggle_grayscale));
        assert!(keys.matches(key(KeyCode::Char('u'), KeyModifiers::CONTROL), &keys.clear));
    }

    #[test]
    fn single_chars_ignore_ctrl_chords() {
        let keys = KeyConfig::default();
        assert!(keys.matches(key(KeyCode::Char('g'), KeyModifiers::NONE), "g"));
        assert!(!keys.matches(key(KeyCode::Char('g'), KeyModifiers::CONTROL), "g"));
        assert!(keys.matches(key(KeyCode::Char('g'), KeyModifiers::SHIFT), "G"));
    }

    #[test]
    fn display_shortens_chords() {
        let keys = KeyConfig::default();
        assert_eq!(keys.display("Ctrl+g"), "^G");
        assert_eq!(keys.display("Enter"), "↵");
        assert_eq!(keys.display("Esc"), "Esc");
    }
}
