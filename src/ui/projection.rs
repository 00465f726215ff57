use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::loader::LoadState;

/// Rendering preferences. Never touches fetch logic or the stored image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub grayscale: bool,
}

impl DisplayOptions {
    pub fn toggle_grayscale(&mut self) {
        self.grayscale = !self.grayscale;
    }
}

/// Which of the four mutually exclusive views the image area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderBranch<'a> {
    Image(&'a DynamicImage),
    Progress,
    Warning(String),
    Empty,
}

impl<'a> RenderBranch<'a> {
    pub fn project(state: &'a LoadState) -> Self {
        match state {
            LoadState::Loaded(image) => RenderBranch::Image(image),
            LoadState::Loading => RenderBranch::Progress,
            LoadState::Failed(err) => RenderBranch::Warning(err.to_string()),
            LoadState::Idle => RenderBranch::Empty,
        }
    }
}
