pub mod halfblock;
pub mod layout;
pub mod projection;
pub mod widgets;

pub use projection::{DisplayOptions, RenderBranch};

use crate::app::App;
use ratatui::Frame;

pub fn ui(f: &mut Frame, app: &mut App) {
    let main_layout = layout::get_main_layout(f.area());

    widgets::input::render(f, main_layout.input_area, app);
    widgets::image_view::render(f, main_layout.image_area, app);
    widgets::controls::render(f, main_layout.footer_area, app);
}
