pub mod letter;
pub mod theme;
