pub mod controls;
pub mod image_view;
pub mod input;
