use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub input_area: Rect,
    pub image_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // URL field
            Constraint::Min(0),    // Image
            Constraint::Length(1), // Controls
        ])
        .split(area);

    MainLayout {
        input_area: chunks[0],
        image_area: chunks[1],
        footer_area: chunks[2],
    }
}
