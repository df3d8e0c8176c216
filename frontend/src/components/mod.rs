pub mod editor;
pub mod theme;
