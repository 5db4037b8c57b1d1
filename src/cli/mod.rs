pub mod prompt;
pub mod ui;
