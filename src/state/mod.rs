//! View-local state

pub mod splash;
pub mod ui;
