use crossterm::event::Event;
use crate::loader::LoadSnapshot;

pub enum AppEvent {
    Input(Event),
    /// The terminal event stream failed or ended
    InputClosed,
    LoadUpdate(LoadSnapshot),
    Tick,
}
