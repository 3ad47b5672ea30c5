pub mod app;
pub mod components;
pub mod keymap;
pub mod theme;

pub use app::{Selection, run};
pub use theme::Theme;
