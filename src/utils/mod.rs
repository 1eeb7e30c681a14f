//! Pure helpers and constants

pub mod constants;
pub mod scroll;
pub mod viewport;
