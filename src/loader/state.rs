use std::sync::Arc;

use image::DynamicImage;

use super::LoadError;

/// Progress/outcome of the most recent load request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Arc<DynamicImage>),
    Failed(LoadError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn image(&self) -> Option<&Arc<DynamicImage>> {
        match self {
            LoadState::Loaded(image) => Some(image),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Human readable failure reason, if any.
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Short name used in log fields.
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

/// Value published to observers: the state plus the id of the request
/// that owns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadSnapshot {
    pub request: u64,
    pub state: LoadState,
}
