pub mod picker;
pub mod search_bar;
