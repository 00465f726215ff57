use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin Mocha
        Self {
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            red: Color::Rgb(243, 139, 168),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            blue: Color::Rgb(137, 180, 250),
        }
    }
}

// Nested `[theme]` table on disk
#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

pub fn parse_theme(content: &str) -> Option<Theme> {
    if let Ok(wrapper) = toml::from_str::<ThemeFile>(content) {
        return Some(wrapper.theme);
    }
    // Flat file without the [theme] header
    toml::from_str::<Theme>(content).ok()
}

/// Read `theme.toml`, writing the default one first if it does not exist.
pub fn load_theme(path: &Path) -> Theme {
    if path.exists() {
        return fs::read_to_string(path)
            .ok()
            .and_then(|content| parse_theme(&content))
            .unwrap_or_else(|| {
                tracing::warn!(path = %path.display(), "invalid theme file, using default");
                Theme::default()
            });
    }

    let default_theme = Theme::default();
    let wrapper = ThemeFile {
        theme: default_theme.clone(),
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(toml_str) = toml::to_string_pretty(&wrapper) {
        let _ = fs::write(path, toml_str);
    }
    default_theme
}
