pub mod app;
pub mod loader;
pub mod logging;
pub mod theme;
pub mod ui;
