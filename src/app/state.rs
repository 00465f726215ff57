use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::config::UserConfig;
use super::events::AppEvent;
use super::keys::KeyConfig;
use crate::loader::{LoadSnapshot, LoadState};
use crate::theme::Theme;
use crate::ui::halfblock::LineCache;
use crate::ui::DisplayOptions;

/// Work the event loop hands to the loader after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load(String),
    Clear,
}

/// Result of feeding one event into the app.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Update {
    pub command: Option<Command>,
    pub redraw: bool,
}

pub struct App {
    pub is_running: bool,
    pub url: String,
    /// Latest snapshot published by the loader
    pub load: LoadSnapshot,
    pub display: DisplayOptions,
    pub theme: Theme,
    pub keys: KeyConfig,
    pub tick: u64,
    pub image_cache: LineCache,
}

impl App {
    pub fn new(config: &UserConfig, theme: Theme) -> Self {
        Self {
            is_running: true,
            url: String::new(),
            load: LoadSnapshot::default(),
            display: DisplayOptions {
                grayscale: config.grayscale,
            },
            theme,
            keys: config.keys.clone(),
            tick: 0,
            image_cache: LineCache::default(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.load.state
    }

    /// Snapshots from older requests than the one shown are ignored.
    pub fn apply_snapshot(&mut self, snapshot: LoadSnapshot) {
        if snapshot.request >= self.load.request {
            self.load = snapshot;
        }
    }

    /// Advances the spinner. Returns whether anything visible changed.
    pub fn on_tick(&mut self) -> bool {
        if self.load.state.is_loading() {
            self.tick = self.tick.wrapping_add(1);
            return true;
        }
        false
    }

    pub fn on_event(&mut self, event: AppEvent) -> Update {
        match event {
            AppEvent::Input(Event::Key(key)) => Update {
                command: self.handle_key(key),
                redraw: true,
            },
            AppEvent::Input(Event::Paste(text)) => {
                self.paste(&text);
                Update {
                    command: None,
                    redraw: true,
                }
            }
            AppEvent::Input(Event::Resize(..)) => Update {
                command: None,
                redraw: true,
            },
            AppEvent::Input(_) => Update::default(),
            AppEvent::InputClosed => {
                self.is_running = false;
                Update::default()
            }
            AppEvent::LoadUpdate(snapshot) => {
                self.apply_snapshot(snapshot);
                Update {
                    command: None,
                    redraw: true,
                }
            }
            AppEvent::Tick => Update {
                command: None,
                redraw: self.on_tick(),
            },
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.is_running = false;
            return None;
        }

        let keys = &self.keys;
        if keys.matches(key, &keys.quit) {
            self.is_running = false;
            return None;
        }
        if keys.matches(key, &keys.load) {
            return Some(Command::Load(self.url.clone()));
        }
        if keys.matches(key, &keys.toggle_grayscale) {
            self.display.toggle_grayscale();
            return None;
        }
        if keys.matches(key, &keys.clear) {
            return self.clear_url();
        }

        match key.code {
            KeyCode::Backspace => {
                if self.url.pop().is_some() && self.url.is_empty() {
                    return Some(Command::Clear);
                }
                None
            }
            KeyCode::Char(ch)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.url.push(ch);
                None
            }
            _ => None,
        }
    }

    pub fn paste(&mut self, text: &str) {
        self.url.extend(text.chars().filter(|c| !c.is_control()));
    }

    pub fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }

    fn clear_url(&mut self) -> Option<Command> {
        if self.url.is_empty() {
            return None;
        }
        self.url.clear();
        Some(Command::Clear)
    }
}
