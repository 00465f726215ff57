pub mod cli;
pub mod config;
pub mod events;
pub mod keys;
pub mod state;

pub use state::*;
