//! Browser side effects

pub mod navigation;
